//! Focused unit tests covering render configuration and output.

use super::*;
use crate::render::{RenderConfig, config_from_layers_for_test, render_frame};
use rstest::{fixture, rstest};
use wab_core::{DetailTier, OverlayOptions, RenderableGeometry};

fn london() -> RenderArgs {
    RenderArgs {
        zoom: Some(12.0),
        west: Some(-0.2),
        south: Some(51.45),
        east: Some(-0.05),
        north: Some(51.55),
        ..RenderArgs::default()
    }
}

#[fixture]
fn london_args() -> RenderArgs {
    london()
}

#[rstest]
#[case(RenderArgs { zoom: None, ..london() }, ARG_ZOOM, ENV_ZOOM)]
#[case(RenderArgs { west: None, ..london() }, ARG_WEST, ENV_WEST)]
#[case(RenderArgs { south: None, ..london() }, ARG_SOUTH, ENV_SOUTH)]
#[case(RenderArgs { east: None, ..london() }, ARG_EAST, ENV_EAST)]
#[case(RenderArgs { north: None, ..london() }, ARG_NORTH, ENV_NORTH)]
fn converting_without_required_fields_errors(
    #[case] args: RenderArgs,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let err = RenderConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn crossed_bounds_are_rejected(london_args: RenderArgs) {
    let args = RenderArgs {
        west: Some(1.0),
        east: Some(-1.0),
        ..london_args
    };
    let err = RenderConfig::try_from(args).expect_err("crossed bounds should error");
    assert!(matches!(err, CliError::InvalidBounds { .. }), "{err:?}");
}

#[rstest]
fn non_finite_bounds_are_rejected(london_args: RenderArgs) {
    let args = RenderArgs {
        north: Some(f64::NAN),
        ..london_args
    };
    let err = RenderConfig::try_from(args).expect_err("NaN bounds should error");
    assert!(matches!(err, CliError::InvalidBounds { .. }), "{err:?}");
}

#[rstest]
fn unset_options_fall_back_to_standard_lists(london_args: RenderArgs) {
    let args = RenderArgs {
        color: Some("red".into()),
        ci_squares: Some(vec!["WV".into()]),
        ..london_args
    };
    let config = RenderConfig::try_from(args).expect("config should build");
    let defaults = OverlayOptions::default();
    assert_eq!(config.options.color, "red");
    assert_eq!(config.options.ci_squares, ["WV"]);
    assert_eq!(config.options.gb_squares, defaults.gb_squares);
    assert_eq!(config.options.ni_squares, defaults.ni_squares);
}

#[rstest]
fn london_frame_holds_tq_sub_squares(london_args: RenderArgs) {
    let config = RenderConfig::try_from(london_args).expect("config should build");
    let frame = render_frame(&config);
    assert_eq!(frame.tier, DetailTier::SubGrid);
    let labels: Vec<&str> = frame
        .outcome
        .geometries
        .iter()
        .filter_map(RenderableGeometry::label_text)
        .collect();
    assert_eq!(labels, ["TQ27", "TQ28", "TQ37", "TQ38"]);
}

#[rstest]
fn frame_report_is_json(london_args: RenderArgs) {
    let config = RenderConfig::try_from(london_args).expect("config should build");
    let frame = render_frame(&config);
    let mut buffer = Vec::new();
    write_json(&mut buffer, &render::FrameReport::from(&frame)).expect("write report");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid JSON");
    assert_eq!(value["tier"], 2);
    assert_eq!(value["color"], "rgba(80, 80, 80, 1)");
    assert_eq!(value["geometries"].as_array().map(Vec::len), Some(8));
    assert_eq!(value["geometries"][0]["type"], "square");
    assert_eq!(value["geometries"][1]["type"], "label");
    assert_eq!(value["skipped"].as_array().map(Vec::len), Some(0));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "zoom": "close" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "zoom": 5.0,
            "west": -11.0,
            "south": 49.0,
            "east": 2.0,
            "north": 61.0,
            "color": "blue",
        }),
        None,
    );
    composer.push_environment(json!({ "zoom": 7.0, "ni_squares": ["J"] }));
    composer.push_cli(json!({ "zoom": 9.5 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert!((config.zoom - 9.5).abs() < f64::EPSILON);
    assert_eq!(config.options.color, "blue");
    assert_eq!(config.options.ni_squares, ["J"]);
    assert!((config.bounds.min().x + 11.0).abs() < f64::EPSILON);
}
