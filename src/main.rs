// Entrypoint for the CLI application.
// - Keeps `main` small: parse the command line and hand off to `cli::run`.
// - All failures bubble up here as `anyhow` errors; this is the only place
//   that prints them and decides the exit code.

use clap::Parser;
use console::style;
use webship::cli;

fn main() {
    let cmd = cli::RootCmd::parse();
    if let Err(err) = cli::run(cmd) {
        eprintln!("{} {:#}", style("Error:").red().bold(), err);
        std::process::exit(1);
    }
}
