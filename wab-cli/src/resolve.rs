//! `resolve` command: one grid reference to WGS84.

use clap::Args;
use serde::Serialize;
use std::io::Write;
use wab_core::GridSystem;

use crate::{CliError, write_json};

/// CLI arguments for the `resolve` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct ResolveArgs {
    /// Grid system: GB, IE (or NI) or CI.
    #[arg(value_name = "system")]
    pub(crate) system: String,
    /// Grid reference such as "TQ 30000 80000" or "SU 12 34".
    #[arg(value_name = "reference")]
    pub(crate) reference: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResolvedReport {
    system: GridSystem,
    reference: String,
    longitude: f64,
    latitude: f64,
}

pub(crate) fn resolve_reference(args: &ResolveArgs) -> Result<ResolvedReport, CliError> {
    let system: GridSystem = args
        .system
        .parse()
        .map_err(|_| CliError::UnknownSystem(args.system.clone()))?;
    let registry = wab_geodesy::default_registry();
    let reference = wab_core::GridReference::parse(system, &args.reference)
        .map_err(wab_core::TransformError::from)?;
    let coord = registry.resolve(system, &reference)?;
    Ok(ResolvedReport {
        system,
        reference: reference.to_string(),
        longitude: coord.x,
        latitude: coord.y,
    })
}

pub(crate) fn run_resolve_with(args: &ResolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = resolve_reference(args)?;
    write_json(writer, &report)
}
