//! Turn configured squares into renderable geometry for one view.
//!
//! The engine owns no projection maths and keeps no state between renders.
//! Every corner and centre is resolved through the [`TransformRegistry`]
//! with one provider call each. Failures never escape: a system without a
//! provider contributes nothing, and a reference that cannot be resolved
//! drops only its own square or cell.

use geo::Coord;

use crate::cull::{CornerCuller, GeographicBounds, ViewportCuller};
use crate::deconflict::is_valid_cell;
use crate::geometry::{LabelKind, RenderableGeometry};
use crate::grid::{GridSystem, SquareId, SubCell};
use crate::reference::{GridReference, MAX_OFFSET};
use crate::tier::DetailTier;
use crate::transform::{TransformError, TransformRegistry};

/// Width of a sub-grid cell in metres.
const CELL_METRES: u32 = 10_000;

/// Offset of a cell's far edge from its near edge.
const CELL_FAR_EDGE: u32 = CELL_METRES - 1;

/// Offset of a cell's centre from its south-west corner.
const CELL_CENTRE: u32 = 5_000;

/// Offset of a square's centre from its south-west corner.
const SQUARE_CENTRE: u32 = 50_000;

/// A square or sub-cell dropped because a reference failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCell {
    /// Square being rendered.
    pub square: SquareId,
    /// Sub-cell being rendered, or `None` for a whole-square outline.
    pub cell: Option<SubCell>,
    /// Why the reference failed.
    pub error: TransformError,
}

/// Everything produced by one [`GridOverlayEngine::render`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOutcome {
    /// Geometry in emission order.
    pub geometries: Vec<RenderableGeometry>,
    /// Squares or cells dropped by transform failures.
    pub skipped: Vec<SkippedCell>,
    /// Systems whose squares were skipped because no provider was ready,
    /// in order of first appearance.
    pub unavailable: Vec<GridSystem>,
}

impl RenderOutcome {
    /// Number of outlines emitted.
    #[must_use]
    pub fn square_count(&self) -> usize {
        self.geometries.iter().filter(|g| g.is_square()).count()
    }

    /// Number of labels emitted.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.geometries.iter().filter(|g| g.is_label()).count()
    }

    fn mark_unavailable(&mut self, system: GridSystem) {
        if !self.unavailable.contains(&system) {
            log::debug!("{system} squares skipped: no transform provider ready");
            self.unavailable.push(system);
        }
    }

    fn skip(&mut self, square: &SquareId, cell: Option<SubCell>, error: TransformError) {
        if let TransformError::ProviderUnavailable(system) = error {
            self.mark_unavailable(system);
            return;
        }
        log::warn!("skipping {square} cell {cell:?}: {error}");
        self.skipped.push(SkippedCell {
            square: square.clone(),
            cell,
            error,
        });
    }
}

/// Builds square outlines and labels for the current tier and viewport.
///
/// # Examples
/// ```
/// # #[cfg(feature = "test-support")]
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use geo::{Coord, Rect};
/// use wab_core::test_support::LatticeTransform;
/// use wab_core::{DetailTier, GridOverlayEngine, GridSystem, SquareId, TransformRegistry};
///
/// let mut registry = TransformRegistry::new();
/// registry.install(LatticeTransform::new(GridSystem::Gb));
/// let squares = vec![SquareId::parse(GridSystem::Gb, "HP")?];
/// let view = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 2.0, y: 2.0 });
///
/// let outcome = GridOverlayEngine::new().render(&registry, &squares, DetailTier::Labelled, &view);
/// assert_eq!(outcome.square_count(), 1);
/// assert_eq!(outcome.geometries[1].label_text(), Some("HP"));
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "test-support"))]
/// # fn main() {}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOverlayEngine<C = CornerCuller> {
    culler: C,
}

impl GridOverlayEngine<CornerCuller> {
    /// Engine using corner-based viewport culling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            culler: CornerCuller,
        }
    }
}

impl<C: ViewportCuller> GridOverlayEngine<C> {
    /// Engine using a custom culling policy.
    #[must_use]
    pub const fn with_culler(culler: C) -> Self {
        Self { culler }
    }

    /// Render `squares` at `tier` for the viewport `bounds`.
    ///
    /// Output order follows `squares`, then sub-cells by `i` ascending and
    /// `j` ascending. Identical inputs always yield identical output.
    #[must_use]
    pub fn render(
        &self,
        registry: &TransformRegistry,
        squares: &[SquareId],
        tier: DetailTier,
        bounds: &GeographicBounds,
    ) -> RenderOutcome {
        let mut outcome = RenderOutcome::default();
        for square in squares {
            if !registry.is_ready(square.system()) {
                outcome.mark_unavailable(square.system());
                continue;
            }
            let resolver = Resolver { registry, square };
            match tier {
                DetailTier::Outline | DetailTier::Labelled => {
                    render_whole_square(&resolver, tier, &mut outcome);
                }
                DetailTier::SubGrid => self.render_sub_grid(&resolver, bounds, &mut outcome),
            }
        }
        log::debug!(
            "rendered {} geometries for {} squares at tier {} ({} skipped)",
            outcome.geometries.len(),
            squares.len(),
            tier.as_u8(),
            outcome.skipped.len()
        );
        outcome
    }

    /// [`GridOverlayEngine::render`] without diagnostics.
    #[must_use]
    pub fn render_geometries(
        &self,
        registry: &TransformRegistry,
        squares: &[SquareId],
        tier: DetailTier,
        bounds: &GeographicBounds,
    ) -> Vec<RenderableGeometry> {
        self.render(registry, squares, tier, bounds).geometries
    }

    fn render_sub_grid(
        &self,
        resolver: &Resolver<'_>,
        bounds: &GeographicBounds,
        outcome: &mut RenderOutcome,
    ) {
        let square = resolver.square;
        for cell in SubCell::all().filter(|cell| is_valid_cell(square.as_str(), *cell)) {
            let east = u32::from(cell.i()) * CELL_METRES;
            let north = u32::from(cell.j()) * CELL_METRES;
            let corners = match resolver.corners(
                east,
                north,
                east + CELL_FAR_EDGE,
                north + CELL_FAR_EDGE,
            ) {
                Ok(corners) => corners,
                Err(error) => {
                    outcome.skip(square, Some(cell), error);
                    continue;
                }
            };
            if !self.culler.intersects(bounds, &corners) {
                continue;
            }
            let centre = match resolver.resolve(east + CELL_CENTRE, north + CELL_CENTRE) {
                Ok(centre) => centre,
                Err(error) => {
                    outcome.skip(square, Some(cell), error);
                    continue;
                }
            };
            outcome.geometries.push(RenderableGeometry::square(corners));
            outcome.geometries.push(RenderableGeometry::label(
                centre,
                format!("{square}{}{}", cell.i(), cell.j()),
                LabelKind::SubSquare,
            ));
        }
    }
}

fn render_whole_square(resolver: &Resolver<'_>, tier: DetailTier, outcome: &mut RenderOutcome) {
    let square = resolver.square;
    let corners = match resolver.corners(0, 0, MAX_OFFSET, MAX_OFFSET) {
        Ok(corners) => corners,
        Err(error) => {
            outcome.skip(square, None, error);
            return;
        }
    };
    if tier == DetailTier::Outline {
        outcome.geometries.push(RenderableGeometry::square(corners));
        return;
    }
    match resolver.resolve(SQUARE_CENTRE, SQUARE_CENTRE) {
        Ok(centre) => {
            outcome.geometries.push(RenderableGeometry::square(corners));
            outcome.geometries.push(RenderableGeometry::label(
                centre,
                square.as_str(),
                LabelKind::Square,
            ));
        }
        Err(error) => outcome.skip(square, None, error),
    }
}

/// Resolves offsets within one square through the registry.
struct Resolver<'a> {
    registry: &'a TransformRegistry,
    square: &'a SquareId,
}

impl Resolver<'_> {
    fn resolve(&self, easting: u32, northing: u32) -> Result<Coord<f64>, TransformError> {
        let reference = GridReference::new(self.square.clone(), easting, northing)?;
        self.registry.resolve(self.square.system(), &reference)
    }

    /// Corners in drawing order: south-west, south-east, north-east,
    /// north-west.
    fn corners(
        &self,
        west: u32,
        south: u32,
        east: u32,
        north: u32,
    ) -> Result<[Coord<f64>; 4], TransformError> {
        Ok([
            self.resolve(west, south)?,
            self.resolve(east, south)?,
            self.resolve(east, north)?,
            self.resolve(west, north)?,
        ])
    }
}
