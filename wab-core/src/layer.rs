//! Bookkeeping between rendered frames and a host drawing surface.
//!
//! Each redraw removes everything the previous frame added, once per
//! geometry, then adds the new frame's geometries once each.

use crate::geometry::RenderableGeometry;

/// Opaque handle a surface returns for an added geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

/// Host drawing surface, such as a map layer group.
pub trait DisplaySurface {
    /// Draw `geometry`, returning a handle for later removal.
    fn add(&mut self, geometry: &RenderableGeometry) -> SurfaceHandle;

    /// Remove a previously added geometry.
    fn remove(&mut self, handle: SurfaceHandle);
}

/// Tracks which geometries are currently on a [`DisplaySurface`].
///
/// # Examples
/// ```
/// # #[cfg(feature = "test-support")]
/// # fn main() {
/// use geo::Coord;
/// use wab_core::test_support::RecordingSurface;
/// use wab_core::{LabelKind, OverlayLayer, RenderableGeometry};
///
/// let mut layer = OverlayLayer::new(RecordingSurface::default());
/// let label = RenderableGeometry::label(Coord { x: 0.0, y: 0.0 }, "HP", LabelKind::Square);
/// layer.show(&[label.clone()]);
/// layer.show(&[label]);
/// assert_eq!(layer.surface().adds, 2);
/// assert_eq!(layer.surface().removes, 1);
/// assert_eq!(layer.len(), 1);
/// # }
/// # #[cfg(not(feature = "test-support"))]
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct OverlayLayer<S> {
    surface: S,
    shown: Vec<SurfaceHandle>,
}

impl<S: DisplaySurface> OverlayLayer<S> {
    /// Wrap `surface` with nothing shown.
    #[must_use]
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            shown: Vec::new(),
        }
    }

    /// Replace the previous frame's geometries with `geometries`.
    pub fn show(&mut self, geometries: &[RenderableGeometry]) {
        self.clear();
        self.shown = geometries
            .iter()
            .map(|geometry| self.surface.add(geometry))
            .collect();
    }

    /// Remove every geometry currently shown.
    pub fn clear(&mut self) {
        for handle in self.shown.drain(..) {
            self.surface.remove(handle);
        }
    }

    /// Number of geometries currently shown.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.shown.len()
    }

    /// Whether nothing is shown.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    /// Borrow the wrapped surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Clear the surface and hand it back.
    #[must_use]
    pub fn into_surface(mut self) -> S {
        self.clear();
        self.surface
    }
}
