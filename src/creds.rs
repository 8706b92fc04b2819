// Credential store: one plain-text access token in the user's home
// directory, overwritten on each login.

use anyhow::{Context, Result};
use std::path::PathBuf;

const TOKEN_FILE: &str = ".webship";

/// Path of the token file, `~/.webship`, falling back to the current
/// directory when no home directory is available.
pub fn token_path() -> PathBuf {
    let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.join(TOKEN_FILE)
}

pub fn save_token(token: &str) -> Result<()> {
    let path = token_path();
    std::fs::write(&path, token)
        .with_context(|| format!("Failed to save token to {}", path.display()))?;
    Ok(())
}

/// Read the persisted token. A missing file means the user never logged
/// in (or logged out by deleting it), so the error says what to do next.
pub fn load_token() -> Result<String> {
    let path = token_path();
    let data = std::fs::read_to_string(&path).with_context(|| {
        format!(
            "No saved token at {} - run `webship login` first",
            path.display()
        )
    })?;
    Ok(data.trim().to_string())
}
