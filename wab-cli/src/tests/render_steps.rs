//! Behaviour-driven step definitions driving the render CLI scenarios.

use super::*;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

const LONDON: [&str; 8] = [
    "--west", "-0.2", "--south", "51.45", "--east", "-0.05", "--north", "51.55",
];

#[derive(Debug, Default)]
struct RenderWorld {
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RenderWorld {
    fn set_args(&self, extra: &[&str]) {
        let mut argv = vec!["wab".to_owned(), "render".to_owned()];
        argv.extend(extra.iter().map(|arg| (*arg).to_owned()));
        *self.cli_args.borrow_mut() = argv;
    }

    fn output(&self) -> serde_json::Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON")
    }

    fn labels(&self) -> Vec<String> {
        self.output()["geometries"]
            .as_array()
            .expect("geometry array")
            .iter()
            .filter_map(|geometry| geometry["text"].as_str().map(str::to_owned))
            .collect()
    }
}

#[fixture]
fn world() -> RenderWorld {
    RenderWorld::default()
}

#[given("a render over central London at zoom level 12")]
fn london_close_up(#[from(world)] world: &RenderWorld) {
    let mut args = vec!["--zoom", "12"];
    args.extend(LONDON);
    world.set_args(&args);
}

#[given("a render of GB square TQ only at zoom level 6")]
fn tq_only(#[from(world)] world: &RenderWorld) {
    world.set_args(&[
        "--zoom",
        "6",
        "--west",
        "-11",
        "--south",
        "48",
        "--east",
        "3",
        "--north",
        "62",
        "--gb-squares",
        "TQ",
        "--ni-squares",
        "",
        "--ci-squares",
        "",
    ]);
}

#[given("a render over central London without a zoom level")]
fn london_without_zoom(#[from(world)] world: &RenderWorld) {
    world.set_args(&LONDON);
}

#[when("I run the render command")]
fn run_render_command(#[from(world)] world: &RenderWorld) {
    let parsed = Cli::try_parse_from(world.cli_args.borrow().iter()).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Render(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_render_with(args, &mut *buffer)
        }
        Command::Resolve(_) => panic!("expected render command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints the sub-squares TQ27 TQ28 TQ37 TQ38")]
fn prints_london_sub_squares(#[from(world)] world: &RenderWorld) {
    assert_eq!(world.labels(), ["TQ27", "TQ28", "TQ37", "TQ38"]);
    assert_eq!(world.output()["tier"], 2);
}

#[then("the command prints one square labelled TQ")]
fn prints_single_square(#[from(world)] world: &RenderWorld) {
    assert_eq!(world.labels(), ["TQ"]);
    assert_eq!(world.output()["tier"], 1);
}

#[then("the command fails because the zoom level is missing")]
fn fails_missing_zoom(#[from(world)] world: &RenderWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_ZOOM),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_render_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/render_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RenderWorld) {
            let _ = world;
        }
    };
}

register_render_scenario!(render_london, "rendering sub-squares over central London");
register_render_scenario!(render_single_square, "rendering a single labelled square");
register_render_scenario!(render_missing_zoom, "rejecting a render without a zoom level");
