//! `render` command: one overlay frame as JSON.

use clap::Parser;
use geo::{Coord, Rect};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use wab_core::{Frame, GeographicBounds, GridSystem, OverlayOptions, RenderableGeometry, WabOverlay};

use crate::{
    ARG_EAST, ARG_NORTH, ARG_SOUTH, ARG_WEST, ARG_ZOOM, CliError, ENV_EAST, ENV_NORTH, ENV_SOUTH,
    ENV_WEST, ENV_ZOOM, write_json,
};

/// CLI arguments for the `render` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Render the WAB overlay for one map view. The zoom level \
                 picks the detail tier; the viewport edges cull sub-squares. \
                 Square lists default to the standard WAB squares and can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Render the overlay for a zoom level and viewport"
)]
#[ortho_config(prefix = "WAB")]
pub(crate) struct RenderArgs {
    /// Map zoom level.
    #[arg(long = ARG_ZOOM, value_name = "level", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) zoom: Option<f64>,
    /// Western edge of the viewport in degrees longitude.
    #[arg(long = ARG_WEST, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) west: Option<f64>,
    /// Southern edge of the viewport in degrees latitude.
    #[arg(long = ARG_SOUTH, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) south: Option<f64>,
    /// Eastern edge of the viewport in degrees longitude.
    #[arg(long = ARG_EAST, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) east: Option<f64>,
    /// Northern edge of the viewport in degrees latitude.
    #[arg(long = ARG_NORTH, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) north: Option<f64>,
    /// CSS colour for outlines and labels.
    #[arg(long, value_name = "css")]
    #[serde(default)]
    pub(crate) color: Option<String>,
    /// Comma-separated GB squares, replacing the standard list.
    #[arg(long, value_name = "squares", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) gb_squares: Option<Vec<String>>,
    /// Comma-separated Irish Grid squares, replacing the standard list.
    #[arg(long, value_name = "squares", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) ni_squares: Option<Vec<String>>,
    /// Comma-separated Channel Islands squares, replacing the standard list.
    #[arg(long, value_name = "squares", value_delimiter = ',')]
    #[serde(default)]
    pub(crate) ci_squares: Option<Vec<String>>,
}

impl RenderArgs {
    pub(crate) fn into_config(self) -> Result<RenderConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RenderConfig::try_from(merged)
    }
}

/// Resolved `render` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RenderConfig {
    pub(crate) zoom: f64,
    pub(crate) bounds: GeographicBounds,
    pub(crate) options: OverlayOptions,
}

impl TryFrom<RenderArgs> for RenderConfig {
    type Error = CliError;

    fn try_from(args: RenderArgs) -> Result<Self, Self::Error> {
        let zoom = required(args.zoom, ARG_ZOOM, ENV_ZOOM)?;
        let west = required(args.west, ARG_WEST, ENV_WEST)?;
        let south = required(args.south, ARG_SOUTH, ENV_SOUTH)?;
        let east = required(args.east, ARG_EAST, ENV_EAST)?;
        let north = required(args.north, ARG_NORTH, ENV_NORTH)?;
        let edges = [west, south, east, north];
        if edges.iter().any(|edge| !edge.is_finite()) || west > east || south > north {
            return Err(CliError::InvalidBounds {
                west,
                south,
                east,
                north,
            });
        }

        let defaults = OverlayOptions::default();
        let options = OverlayOptions {
            color: args.color.unwrap_or(defaults.color),
            gb_squares: args.gb_squares.unwrap_or(defaults.gb_squares),
            ni_squares: args.ni_squares.unwrap_or(defaults.ni_squares),
            ci_squares: args.ci_squares.unwrap_or(defaults.ci_squares),
        };

        Ok(Self {
            zoom,
            bounds: Rect::new(Coord { x: west, y: south }, Coord { x: east, y: north }),
            options,
        })
    }
}

fn required(value: Option<f64>, field: &'static str, env: &'static str) -> Result<f64, CliError> {
    value.ok_or(CliError::MissingArgument { field, env })
}

/// JSON shape of a rendered frame.
#[derive(Debug, Serialize)]
pub(crate) struct FrameReport<'a> {
    tier: u8,
    color: &'a str,
    geometries: &'a [RenderableGeometry],
    skipped: Vec<SkippedReport>,
    unavailable: &'a [GridSystem],
    config_issues: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SkippedReport {
    square: String,
    cell: Option<[u8; 2]>,
    error: String,
}

impl<'a> From<&'a Frame> for FrameReport<'a> {
    fn from(frame: &'a Frame) -> Self {
        let skipped = frame
            .outcome
            .skipped
            .iter()
            .map(|skip| SkippedReport {
                square: skip.square.to_string(),
                cell: skip.cell.map(|cell| [cell.i(), cell.j()]),
                error: skip.error.to_string(),
            })
            .collect();
        Self {
            tier: frame.tier.as_u8(),
            color: &frame.color,
            geometries: &frame.outcome.geometries,
            skipped,
            unavailable: &frame.outcome.unavailable,
            config_issues: frame.config_issues.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Render with the standard transforms and write the frame to `writer`.
pub(crate) fn run_render_with(args: RenderArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let frame = render_frame(&config);
    write_json(writer, &FrameReport::from(&frame))
}

pub(crate) fn render_frame(config: &RenderConfig) -> Frame {
    let overlay = WabOverlay::with_registry(config.options.clone(), wab_geodesy::default_registry());
    let frame = overlay.redraw(config.zoom, &config.bounds);
    log::debug!(
        "rendered {} geometries at tier {}",
        frame.outcome.geometries.len(),
        frame.tier.as_u8()
    );
    frame
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RenderConfig, CliError> {
    let merged = RenderArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RenderConfig::try_from(merged)
}
