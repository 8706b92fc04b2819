use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from relative upload key to the file that backs it. The
/// manifest holds paths, not file contents; files are opened lazily when
/// the upload request is assembled, so memory use stays bounded no
/// matter how large the site is.
#[derive(Debug, Default)]
pub struct UploadManifest {
    entries: BTreeMap<String, PathBuf>,
}

impl UploadManifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as (relative key, backing file path).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }
}

/// Derive the upload manifest for `files` relative to `root`. The key of
/// each entry is the file's path with the root prefix removed and its
/// components joined with `/`, regardless of platform separator.
///
/// Every path must live under `root`; anything else means the caller
/// paired the wrong root with the file list, which is an error rather
/// than something to silently repair. Component names must be valid
/// UTF-8: a lossy conversion could collapse two distinct file names into
/// the same key and drop a file from the upload, so non-UTF-8 names are
/// rejected instead, and a duplicate key is likewise an error.
pub fn build_manifest(root: &Path, files: &[PathBuf]) -> Result<UploadManifest> {
    let mut entries = BTreeMap::new();
    for file in files {
        let rel = match file.strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => bail!(
                "{} is not under the upload root {}",
                file.display(),
                root.display()
            ),
        };
        let mut parts = Vec::new();
        for component in rel.components() {
            let part = component.as_os_str().to_str().with_context(|| {
                format!("{} has a file name that is not valid UTF-8", file.display())
            })?;
            parts.push(part);
        }
        let key = parts.join("/");
        if entries.insert(key.clone(), file.clone()).is_some() {
            bail!("Duplicate upload key {}", key);
        }
    }
    Ok(UploadManifest { entries })
}
