// API client module: a small blocking HTTP client that talks to the
// hosting backend. All five deploy endpoints live here; errors are
// returned to the caller instead of terminating the process, so the
// orchestrator and tests can decide what a failure means.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use std::fs::File;

use crate::deploy::SiteBackend;
use crate::manifest::UploadManifest;

/// Backend the released binary talks to. Tests point `ApiClient::new`
/// at a local server instead.
pub const DEFAULT_BASE_URL: &str = "https://api.webship.dev";

/// HTTP client holding the backend base URL and an optional bearer
/// token. The token is passed in at construction; there is no hidden
/// process-wide credential state.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Body shared by the four resource-creation endpoints.
#[derive(Serialize, Debug)]
struct SiteRequest<'a> {
    alias: &'a str,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Build the Authorization header map when a token is set.
    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(t) = &self.token {
            let val = format!("Bearer {}", t);
            let val =
                HeaderValue::from_str(&val).context("Stored token is not a valid header value")?;
            headers.insert(AUTHORIZATION, val);
        }
        Ok(headers)
    }

    fn create_resource(&self, endpoint: &str, alias: &str, what: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, endpoint);
        let res = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&SiteRequest { alias })
            .send()
            .with_context(|| format!("Failed to send {} request", what))?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("{} failed: {} - {}", what, status, txt);
        }
        Ok(())
    }
}

impl SiteBackend for ApiClient {
    fn register_alias(&self, alias: &str) -> Result<()> {
        self.create_resource("/website", alias, "Alias registration")
    }

    fn create_bucket(&self, alias: &str) -> Result<()> {
        self.create_resource("/website/bucket", alias, "Bucket creation")
    }

    fn create_cloudfront(&self, alias: &str) -> Result<()> {
        self.create_resource("/website/cloudfront", alias, "Cloudfront creation")
    }

    fn create_record(&self, alias: &str) -> Result<()> {
        self.create_resource("/website/record", alias, "Record creation")
    }

    /// Serialize the manifest into one multipart request, one part per
    /// relative key, and POST it. Files are opened here, just before the
    /// request; the form owns the handles, so they are closed when the
    /// request finishes on any path.
    fn upload_site(&self, alias: &str, manifest: &UploadManifest) -> Result<()> {
        let url = format!("{}/website/bucket/upload/{}", self.base_url, alias);
        let mut form = multipart::Form::new();
        for (key, path) in manifest.entries() {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            let part = multipart::Part::reader(file).file_name(key.to_string());
            form = form.part(key.to_string(), part);
        }
        let res = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .multipart(form)
            .send()
            .context("Failed to send upload request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Upload failed: {} - {}", status, txt);
        }
        Ok(())
    }
}
