//! Error types emitted by the `wab` CLI.

use std::sync::Arc;

use thiserror::Error;
use wab_core::TransformError;

/// Errors emitted by the `wab` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The viewport edges are not finite or are crossed.
    #[error("invalid viewport: west {west}, south {south}, east {east}, north {north}")]
    InvalidBounds {
        /// Western edge in degrees.
        west: f64,
        /// Southern edge in degrees.
        south: f64,
        /// Eastern edge in degrees.
        east: f64,
        /// Northern edge in degrees.
        north: f64,
    },
    /// The grid system name is not one of GB, IE or CI.
    #[error("unknown grid system '{0}' (expected GB, IE or CI)")]
    UnknownSystem(String),
    /// A grid reference could not be resolved.
    #[error("failed to resolve grid reference: {0}")]
    Resolve(#[from] TransformError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
