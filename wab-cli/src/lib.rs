//! Command-line interface for the Worked All Britain overlay.
//!
//! `wab render` prints one overlay frame as JSON for a zoom level and
//! viewport; `wab resolve` converts a single grid reference to WGS84.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod error;
mod render;
mod resolve;

pub use error::CliError;

use render::{RenderArgs, run_render_with};
use resolve::{ResolveArgs, run_resolve_with};

const ARG_ZOOM: &str = "zoom";
const ARG_WEST: &str = "west";
const ARG_SOUTH: &str = "south";
const ARG_EAST: &str = "east";
const ARG_NORTH: &str = "north";
const ENV_ZOOM: &str = "WAB_CMDS_RENDER_ZOOM";
const ENV_WEST: &str = "WAB_CMDS_RENDER_WEST";
const ENV_SOUTH: &str = "WAB_CMDS_RENDER_SOUTH";
const ENV_EAST: &str = "WAB_CMDS_RENDER_EAST";
const ENV_NORTH: &str = "WAB_CMDS_RENDER_NORTH";

/// Run the `wab` CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, a
/// reference cannot be resolved, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Render(args) => run_render_with(args, &mut stdout),
        Command::Resolve(args) => run_resolve_with(&args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wab",
    about = "Worked All Britain square overlay tooling",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the overlay for a zoom level and viewport.
    Render(RenderArgs),
    /// Convert one grid reference to WGS84.
    Resolve(ResolveArgs),
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
