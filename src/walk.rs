// Directory flattening: reduces a folder tree to the flat list of files
// that make up one site upload.

use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

/// How the walk reacts to an unreadable directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorMode {
    /// Abort the whole walk on the first unreadable directory.
    FailFast,
    /// Print a warning and treat the unreadable subtree as empty.
    BestEffort,
}

/// Recursively list every regular file under `root`. Paths are returned
/// as `root` joined with each entry's relative location, so callers that
/// pass a canonicalized root get absolute paths back.
///
/// Entries are visited in file-name order, making the result stable
/// across runs on an unmodified tree. Symlinks are skipped, never
/// followed; that also rules out symlink cycles.
pub fn list_files(root: &Path, mode: ErrorMode) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_into(root, mode, &mut files)?;
    Ok(files)
}

fn walk_into(dir: &Path, mode: ErrorMode, out: &mut Vec<PathBuf>) -> Result<()> {
    let reader = match fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(err) => return skip_or_fail(dir, err, mode),
    };

    let mut entries = Vec::new();
    for entry in reader {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) => skip_or_fail(dir, err, mode)?,
        }
    }
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        // DirEntry::file_type does not follow symlinks.
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(err) => {
                skip_or_fail(&entry.path(), err, mode)?;
                continue;
            }
        };
        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_dir() {
            walk_into(&entry.path(), mode, out)?;
        } else {
            out.push(entry.path());
        }
    }
    Ok(())
}

fn skip_or_fail(path: &Path, err: std::io::Error, mode: ErrorMode) -> Result<()> {
    match mode {
        ErrorMode::FailFast => {
            Err(err).with_context(|| format!("Failed to read {}", path.display()))
        }
        ErrorMode::BestEffort => {
            eprintln!(
                "{} skipping {}: {}",
                style("Warning:").yellow().bold(),
                path.display(),
                err
            );
            Ok(())
        }
    }
}
