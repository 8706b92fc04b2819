use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;

use crate::api::{ApiClient, DEFAULT_BASE_URL};
use crate::creds;
use crate::deploy;
use crate::ui;

/// Where users pick up their access token during `login`.
const LOGIN_URL: &str = "https://webship.dev/login";

#[derive(Debug, Parser)]
#[command(
    name = "webship",
    version,
    about = "Deploy static sites to the webship hosting backend"
)]
pub struct RootCmd {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in to your account and store the access token
    Login,
    /// Deploy a folder as a static website
    Deploy,
}

pub fn run(cmd: RootCmd) -> Result<()> {
    match cmd.cmd {
        Command::Login => handle_login(),
        Command::Deploy => handle_deploy(),
    }
}

fn handle_login() -> Result<()> {
    // A browser that refuses to open is not fatal; the URL is enough.
    if webbrowser::open(LOGIN_URL).is_err() {
        println!("Open {} in your browser to get an access token.", LOGIN_URL);
    }
    let token = ui::prompt_token()?;
    creds::save_token(&token)?;
    println!("{}", style("Token saved, you are ready to deploy.").green());
    Ok(())
}

fn handle_deploy() -> Result<()> {
    let token = creds::load_token()?;
    let api = ApiClient::new(DEFAULT_BASE_URL, Some(token))?;
    let request = ui::prompt_deployment()?;
    deploy::run(&api, &request)?;
    println!(
        "{}",
        style(format!(
            "Your website is live at https://{}.webship.dev",
            request.alias
        ))
        .green()
    );
    Ok(())
}
