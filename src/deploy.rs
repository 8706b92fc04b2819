use anyhow::{ensure, Context, Result};
use std::path::PathBuf;

use crate::manifest::{self, UploadManifest};
use crate::ui;
use crate::walk::{self, ErrorMode};

/// One deploy invocation: the alias chosen by the user and the folder to
/// publish. Both are validated on construction so the orchestrator can
/// assume they are usable.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub alias: String,
    pub folder: PathBuf,
}

impl DeploymentRequest {
    pub fn new(alias: impl Into<String>, folder: impl Into<PathBuf>) -> Result<Self> {
        let alias = alias.into().trim().to_string();
        let folder = folder.into();
        ensure!(!alias.is_empty(), "Website alias must not be empty");
        ensure!(
            folder.is_dir(),
            "{} is not a readable directory",
            folder.display()
        );
        Ok(DeploymentRequest { alias, folder })
    }
}

/// The five backend operations a deploy runs, in order. `ApiClient` is
/// the real implementation; tests substitute their own.
pub trait SiteBackend {
    fn register_alias(&self, alias: &str) -> Result<()>;
    fn create_bucket(&self, alias: &str) -> Result<()>;
    fn create_cloudfront(&self, alias: &str) -> Result<()>;
    fn create_record(&self, alias: &str) -> Result<()>;
    fn upload_site(&self, alias: &str, manifest: &UploadManifest) -> Result<()>;
}

/// Run the deploy sequence. Steps are strictly sequential, nothing is
/// retried, and the first failure stops the run; resources already
/// created on the backend are left as they are.
pub fn run(backend: &dyn SiteBackend, request: &DeploymentRequest) -> Result<()> {
    let alias = request.alias.as_str();
    ui::step("Saving your website alias", "Saved", || {
        backend.register_alias(alias)
    })?;
    ui::step("Creating storage bucket", "Created", || {
        backend.create_bucket(alias)
    })?;
    ui::step("Creating CDN distribution", "Created", || {
        backend.create_cloudfront(alias)
    })?;
    ui::step("Creating DNS record", "Created", || {
        backend.create_record(alias)
    })?;
    ui::step("Uploading your static files", "Uploaded", || {
        let root = request
            .folder
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", request.folder.display()))?;
        let files = walk::list_files(&root, ErrorMode::FailFast)?;
        let manifest = manifest::build_manifest(&root, &files)?;
        backend.upload_site(alias, &manifest)
    })?;
    Ok(())
}
