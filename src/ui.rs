// UI layer: interactive prompts via `dialoguer` and a spinner helper
// via `indicatif`. Everything here is terminal-facing; no business
// logic.

use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::deploy::DeploymentRequest;

/// Run `f` behind a spinner that shows `doing` while it works and
/// `done` once it succeeds. On failure the spinner is cleared and the
/// error is returned untouched, so the top-level handler reports it.
pub fn step<T>(doing: &str, done: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(tpl) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(tpl);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(doing.to_string());
    match f() {
        Ok(value) => {
            spinner.finish_with_message(done.to_string());
            Ok(value)
        }
        Err(err) => {
            spinner.finish_and_clear();
            Err(err)
        }
    }
}

pub fn prompt_token() -> Result<String> {
    let token: String = Input::new()
        .with_prompt("Please enter your access token")
        .interact_text()?;
    Ok(token.trim().to_string())
}

/// Collect the folder and alias for a deploy. Validation lives in
/// `DeploymentRequest::new`, so non-interactive callers get the same
/// checks.
pub fn prompt_deployment() -> Result<DeploymentRequest> {
    let folder: String = Input::new()
        .with_prompt("Which folder do you want to deploy")
        .interact_text()?;
    let alias: String = Input::new()
        .with_prompt("Please choose a name for your website")
        .interact_text()?;
    DeploymentRequest::new(alias, folder)
}
