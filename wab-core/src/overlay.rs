//! The WAB overlay as a host sees it: options, providers and a redraw call.

use crate::cull::{CornerCuller, GeographicBounds, ViewportCuller};
use crate::engine::{GridOverlayEngine, RenderOutcome};
use crate::options::{ConfigIssue, OverlayOptions};
use crate::tier::DetailTier;
use crate::transform::{GridTransform, Readiness, TransformRegistry};

/// Result of one [`WabOverlay::redraw`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Tier picked for the zoom level.
    pub tier: DetailTier,
    /// Colour to draw every geometry with.
    pub color: String,
    /// Geometry and per-cell diagnostics.
    pub outcome: RenderOutcome,
    /// Configuration entries that were ignored.
    pub config_issues: Vec<ConfigIssue>,
}

/// Worked All Britain square overlay.
///
/// Zoom and viewport are passed to every [`WabOverlay::redraw`]; the overlay
/// never reads them from a map object. Providers arrive through
/// [`WabOverlay::install_provider`], and the host redraws whenever that
/// reports a [`Readiness`] change.
///
/// # Examples
/// ```
/// # #[cfg(feature = "test-support")]
/// # fn main() {
/// use geo::{Coord, Rect};
/// use wab_core::test_support::LatticeTransform;
/// use wab_core::{DetailTier, GridSystem, OverlayOptions, WabOverlay};
///
/// let mut overlay = WabOverlay::new(OverlayOptions::default());
/// let view = Rect::new(Coord { x: -10.0, y: -10.0 }, Coord { x: 10.0, y: 10.0 });
/// assert!(overlay.redraw(6.0, &view).outcome.geometries.is_empty());
///
/// overlay.install_provider(LatticeTransform::new(GridSystem::Ie));
/// let frame = overlay.redraw(6.0, &view);
/// assert_eq!(frame.tier, DetailTier::Labelled);
/// assert_eq!(frame.outcome.square_count(), 5);
/// # }
/// # #[cfg(not(feature = "test-support"))]
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct WabOverlay<C = CornerCuller> {
    options: OverlayOptions,
    registry: TransformRegistry,
    engine: GridOverlayEngine<C>,
}

impl WabOverlay<CornerCuller> {
    /// Create an overlay with no providers installed.
    #[must_use]
    pub fn new(options: OverlayOptions) -> Self {
        Self::with_registry(options, TransformRegistry::new())
    }

    /// Create an overlay around an existing registry.
    #[must_use]
    pub const fn with_registry(options: OverlayOptions, registry: TransformRegistry) -> Self {
        Self {
            options,
            registry,
            engine: GridOverlayEngine::new(),
        }
    }
}

impl<C: ViewportCuller> WabOverlay<C> {
    /// Swap the culling policy.
    #[must_use]
    pub fn with_culler<D: ViewportCuller>(self, culler: D) -> WabOverlay<D> {
        WabOverlay {
            options: self.options,
            registry: self.registry,
            engine: GridOverlayEngine::with_culler(culler),
        }
    }

    /// Install a transform provider; redraw when this returns.
    pub fn install_provider<T>(&mut self, provider: T) -> Readiness
    where
        T: GridTransform + 'static,
    {
        let change = self.registry.install(provider);
        if self.registry.all_ready() {
            log::info!("all grid transform providers ready");
        }
        change
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Replace the options; takes effect on the next redraw.
    pub fn set_options(&mut self, options: OverlayOptions) {
        self.options = options;
    }

    /// Provider registry.
    #[must_use]
    pub const fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    /// Render the overlay for `zoom` and the visible `bounds`.
    #[must_use]
    pub fn redraw(&self, zoom: f64, bounds: &GeographicBounds) -> Frame {
        let tier = DetailTier::for_zoom(zoom);
        let configured = self.options.configured_squares();
        let outcome = self
            .engine
            .render(&self.registry, &configured.squares, tier, bounds);
        Frame {
            tier,
            color: self.options.color.clone(),
            outcome,
            config_issues: configured.issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSystem;
    use crate::test_support::{LatticeTransform, RejectAllCuller};
    use geo::{Coord, Rect};
    use rstest::{fixture, rstest};

    #[fixture]
    fn view() -> GeographicBounds {
        Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 2.0, y: 2.0 })
    }

    #[fixture]
    fn options() -> OverlayOptions {
        OverlayOptions {
            gb_squares: vec!["HP".into()],
            ni_squares: vec!["D".into()],
            ci_squares: vec!["WA".into()],
            ..OverlayOptions::default()
        }
    }

    #[rstest]
    fn zoom_selects_tier(options: OverlayOptions, view: GeographicBounds) {
        let mut overlay = WabOverlay::new(options);
        overlay.install_provider(LatticeTransform::new(GridSystem::Gb));
        assert_eq!(overlay.redraw(3.0, &view).outcome.geometries.len(), 1);
        assert_eq!(overlay.redraw(7.0, &view).outcome.geometries.len(), 2);
        assert_eq!(overlay.redraw(9.0, &view).outcome.geometries.len(), 200);
    }

    #[rstest]
    fn frame_carries_colour_and_readiness(options: OverlayOptions, view: GeographicBounds) {
        let mut overlay = WabOverlay::new(options);
        overlay.install_provider(LatticeTransform::new(GridSystem::Ci));
        let frame = overlay.redraw(9.0, &view);
        assert_eq!(frame.color, "rgba(80, 80, 80, 1)");
        // WA keeps its two southern rows only.
        assert_eq!(frame.outcome.square_count(), 20);
        assert_eq!(frame.outcome.unavailable, vec![GridSystem::Gb, GridSystem::Ie]);
    }

    #[rstest]
    fn custom_culler_is_used(options: OverlayOptions, view: GeographicBounds) {
        let mut overlay = WabOverlay::new(options).with_culler(RejectAllCuller);
        overlay.install_provider(LatticeTransform::new(GridSystem::Gb));
        assert!(overlay.redraw(9.0, &view).outcome.geometries.is_empty());
        assert_eq!(overlay.redraw(5.0, &view).outcome.geometries.len(), 2);
    }

    #[rstest]
    fn option_changes_apply_on_next_redraw(options: OverlayOptions, view: GeographicBounds) {
        let mut overlay = WabOverlay::new(options);
        overlay.install_provider(LatticeTransform::new(GridSystem::Gb));
        overlay.set_options(OverlayOptions {
            gb_squares: vec!["HP".into(), "XX".into()],
            ..overlay.options().clone()
        });
        let frame = overlay.redraw(2.0, &view);
        assert_eq!(frame.outcome.square_count(), 1);
        assert_eq!(frame.config_issues.len(), 1);
    }
}
