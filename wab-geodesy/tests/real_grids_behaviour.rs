//! Behavioural tests for the overlay driven by the real grid transforms.

use geo::{Coord, Rect};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use wab_core::{
    DetailTier, Frame, GeographicBounds, OverlayOptions, RenderableGeometry, TransformRegistry,
    WabOverlay,
};

fn bounds(west: f64, south: f64, east: f64, north: f64) -> GeographicBounds {
    Rect::new(Coord { x: west, y: south }, Coord { x: east, y: north })
}

fn labels(frame: &Frame) -> Vec<&str> {
    frame
        .outcome
        .geometries
        .iter()
        .filter_map(RenderableGeometry::label_text)
        .collect()
}

#[fixture]
fn registry() -> RefCell<Option<TransformRegistry>> {
    RefCell::new(None)
}

#[fixture]
fn options() -> RefCell<OverlayOptions> {
    RefCell::new(OverlayOptions::default())
}

#[fixture]
fn frame() -> RefCell<Option<Frame>> {
    RefCell::new(None)
}

fn redraw(
    registry: &RefCell<Option<TransformRegistry>>,
    options: &RefCell<OverlayOptions>,
    frame: &RefCell<Option<Frame>>,
    zoom: f64,
    view: &GeographicBounds,
) {
    let registry = registry.borrow_mut().take().expect("transforms installed");
    let overlay = WabOverlay::with_registry(options.borrow().clone(), registry);
    *frame.borrow_mut() = Some(overlay.redraw(zoom, view));
}

#[given("the standard grid transforms")]
fn given_transforms(#[from(registry)] registry: &RefCell<Option<TransformRegistry>>) {
    *registry.borrow_mut() = Some(wab_geodesy::default_registry());
}

#[given("the standard square lists")]
fn given_standard_lists(#[from(options)] options: &RefCell<OverlayOptions>) {
    *options.borrow_mut() = OverlayOptions::default();
}

#[given("only the Channel Islands square WA is configured")]
fn given_only_wa(#[from(options)] options: &RefCell<OverlayOptions>) {
    *options.borrow_mut() = OverlayOptions {
        gb_squares: Vec::new(),
        ni_squares: Vec::new(),
        ci_squares: vec!["WA".into()],
        ..OverlayOptions::default()
    };
}

#[when("I redraw at zoom level 6 over the British Isles")]
fn when_british_isles(
    #[from(registry)] registry: &RefCell<Option<TransformRegistry>>,
    #[from(options)] options: &RefCell<OverlayOptions>,
    #[from(frame)] frame: &RefCell<Option<Frame>>,
) {
    redraw(registry, options, frame, 6.0, &bounds(-12.0, 48.0, 3.0, 62.0));
}

#[when("I redraw at zoom level 10 over the Channel Islands")]
fn when_channel_islands(
    #[from(registry)] registry: &RefCell<Option<TransformRegistry>>,
    #[from(options)] options: &RefCell<OverlayOptions>,
    #[from(frame)] frame: &RefCell<Option<Frame>>,
) {
    redraw(registry, options, frame, 10.0, &bounds(-3.5, 48.8, -1.5, 50.0));
}

#[when("I redraw at zoom level 12 over central London")]
fn when_london(
    #[from(registry)] registry: &RefCell<Option<TransformRegistry>>,
    #[from(options)] options: &RefCell<OverlayOptions>,
    #[from(frame)] frame: &RefCell<Option<Frame>>,
) {
    redraw(registry, options, frame, 12.0, &bounds(-0.2, 51.45, -0.05, 51.55));
}

#[then("63 labelled squares are drawn and nothing is skipped")]
fn then_all_placed(#[from(frame)] frame: &RefCell<Option<Frame>>) {
    let borrow = frame.borrow();
    let frame = borrow.as_ref().expect("redraw ran");
    assert_eq!(frame.tier, DetailTier::Labelled);
    assert_eq!(frame.outcome.square_count(), 63);
    assert_eq!(labels(frame).len(), 63);
    assert!(frame.outcome.skipped.is_empty());
    assert!(frame.outcome.unavailable.is_empty());
}

#[then("20 sub-squares labelled WA?0 or WA?1 are drawn")]
fn then_wa_rows(#[from(frame)] frame: &RefCell<Option<Frame>>) {
    let borrow = frame.borrow();
    let frame = borrow.as_ref().expect("redraw ran");
    let texts = labels(frame);
    assert_eq!(texts.len(), 20);
    assert!(
        texts
            .iter()
            .all(|text| text.starts_with("WA") && (text.ends_with('0') || text.ends_with('1')))
    );
}

#[then("sub-square TQ38 is drawn among fewer than 100 sub-squares")]
fn then_london(#[from(frame)] frame: &RefCell<Option<Frame>>) {
    let borrow = frame.borrow();
    let frame = borrow.as_ref().expect("redraw ran");
    let texts = labels(frame);
    assert!(texts.contains(&"TQ38"));
    assert!(texts.len() < 100);
    assert!(texts.iter().all(|text| text.starts_with("TQ")));
}

#[scenario(path = "tests/features/real_grids.feature", index = 0)]
fn standard_squares(
    registry: RefCell<Option<TransformRegistry>>,
    options: RefCell<OverlayOptions>,
    frame: RefCell<Option<Frame>>,
) {
    let _ = (registry, options, frame);
}

#[scenario(path = "tests/features/real_grids.feature", index = 1)]
fn channel_islands_trim(
    registry: RefCell<Option<TransformRegistry>>,
    options: RefCell<OverlayOptions>,
    frame: RefCell<Option<Frame>>,
) {
    let _ = (registry, options, frame);
}

#[scenario(path = "tests/features/real_grids.feature", index = 2)]
fn london_close_up(
    registry: RefCell<Option<TransformRegistry>>,
    options: RefCell<OverlayOptions>,
    frame: RefCell<Option<Frame>>,
) {
    let _ = (registry, options, frame);
}
