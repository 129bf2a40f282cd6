//! Entry point for the `wab` command-line tool.
#![forbid(unsafe_code)]

use wab_cli::CliError;

fn main() {
    match wab_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wab: {err}");
            std::process::exit(1);
        }
    }
}
