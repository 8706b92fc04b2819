// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the `login` and `deploy`
// commands.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the hosting backend (the
//   four resource-creation endpoints and the multipart upload).
// - `cli`: Command-line surface and the command handlers.
// - `creds`: Persists the access token in the user's home directory.
// - `deploy`: Drives the sequential deploy steps against a backend.
// - `manifest`: Maps flattened files to their relative upload keys.
// - `ui`: Interactive prompts and spinner helpers.
// - `walk`: Flattens a folder tree into the list of files to upload.
//
// Keeping this separation makes it easier to test the deploy logic
// without a terminal or a live backend.
pub mod api;
pub mod cli;
pub mod creds;
pub mod deploy;
pub mod manifest;
pub mod ui;
pub mod walk;
