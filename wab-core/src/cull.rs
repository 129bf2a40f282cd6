//! Viewport culling for sub-grid cells.
//!
//! Only corners are tested. A cell whose corners all lie outside the
//! viewport while its body spans it (for instance when zoomed far into a
//! single cell) is culled. Culling is an optimisation, and callers that
//! need every intersecting cell must not rely on it.

use geo::{Coord, Intersects, Rect};

/// Current visible map area, `x = longitude`, `y = latitude`.
pub type GeographicBounds = Rect<f64>;

/// Return whether any of `corners` lies within `bounds`.
///
/// Containment is inclusive on every edge.
///
/// # Examples
/// ```
/// use geo::{Coord, Rect};
/// use wab_core::corners_intersect;
///
/// let view = Rect::new(Coord { x: -1.0, y: 50.0 }, Coord { x: 0.0, y: 51.0 });
/// let corners = [
///     Coord { x: 0.0, y: 51.0 },
///     Coord { x: 1.0, y: 51.0 },
///     Coord { x: 1.0, y: 52.0 },
///     Coord { x: 0.0, y: 52.0 },
/// ];
/// assert!(corners_intersect(&view, &corners));
/// ```
#[must_use]
pub fn corners_intersect(bounds: &GeographicBounds, corners: &[Coord<f64>; 4]) -> bool {
    // `Intersects` treats boundary points as inside the rectangle.
    corners.iter().any(|corner| bounds.intersects(corner))
}

/// Decides whether a candidate cell is worth emitting.
///
/// The engine consults a culler for every sub-grid cell. [`CornerCuller`] is
/// the standard policy; tests substitute their own.
pub trait ViewportCuller {
    /// Return `true` when the cell with `corners` may be visible.
    fn intersects(&self, bounds: &GeographicBounds, corners: &[Coord<f64>; 4]) -> bool;
}

/// Culls cells with no corner inside the viewport.
#[derive(Debug, Default, Clone, Copy)]
pub struct CornerCuller;

impl ViewportCuller for CornerCuller {
    fn intersects(&self, bounds: &GeographicBounds, corners: &[Coord<f64>; 4]) -> bool {
        corners_intersect(bounds, corners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn view() -> GeographicBounds {
        Rect::new(Coord { x: -2.0, y: 50.0 }, Coord { x: 0.0, y: 52.0 })
    }

    fn square(min_x: f64, min_y: f64, size: f64) -> [Coord<f64>; 4] {
        [
            Coord { x: min_x, y: min_y },
            Coord {
                x: min_x + size,
                y: min_y,
            },
            Coord {
                x: min_x + size,
                y: min_y + size,
            },
            Coord {
                x: min_x,
                y: min_y + size,
            },
        ]
    }

    #[rstest]
    fn keeps_cells_with_a_corner_inside(view: GeographicBounds) {
        assert!(corners_intersect(&view, &square(-0.5, 51.5, 1.0)));
    }

    #[rstest]
    fn keeps_cells_touching_the_edge(view: GeographicBounds) {
        assert!(corners_intersect(&view, &square(0.0, 52.0, 1.0)));
    }

    #[rstest]
    fn drops_cells_entirely_outside(view: GeographicBounds) {
        assert!(!corners_intersect(&view, &square(5.0, 55.0, 1.0)));
    }

    #[rstest]
    fn drops_cells_that_enclose_the_viewport(view: GeographicBounds) {
        // Corners only; a cell larger than the view is culled.
        assert!(!CornerCuller.intersects(&view, &square(-3.0, 49.0, 4.0)));
    }
}
