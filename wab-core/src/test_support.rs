//! Deterministic transform providers, cullers and display surfaces used by
//! unit and behaviour tests.

use std::collections::{HashMap, HashSet};

use geo::Coord;

use crate::{
    GeographicBounds, GridReference, GridSystem, GridTransform, RenderableGeometry, SubCell,
    TransformError, ViewportCuller,
    layer::{DisplaySurface, SurfaceHandle},
};

/// Degrees spanned by one 100 km square on the lattice.
pub const LATTICE_SQUARE_DEGREES: f64 = 1.0;

/// `GridTransform` placing squares on a flat one-degree lattice.
///
/// Each square's south-west corner sits at its configured origin (default
/// `(0, 0)`); offsets map linearly so `99_999` lands just short of the next
/// degree. Individual sub-cells can be made to fail.
#[derive(Debug, Clone)]
pub struct LatticeTransform {
    system: GridSystem,
    origins: HashMap<String, Coord<f64>>,
    failing: HashSet<SubCell>,
}

impl LatticeTransform {
    /// Create a lattice for `system` with every square at the origin.
    #[must_use]
    pub fn new(system: GridSystem) -> Self {
        Self {
            system,
            origins: HashMap::new(),
            failing: HashSet::new(),
        }
    }

    /// Place `square`'s south-west corner at `origin`.
    #[must_use]
    pub fn with_origin(mut self, square: &str, origin: Coord<f64>) -> Self {
        self.origins.insert(square.to_owned(), origin);
        self
    }

    /// Fail every reference that falls inside `cell`.
    #[must_use]
    pub fn failing_at(mut self, cell: SubCell) -> Self {
        self.failing.insert(cell);
        self
    }

    #[expect(
        clippy::integer_division,
        reason = "offsets truncate to the 10 km cell that contains them"
    )]
    fn containing_cell(reference: &GridReference) -> Option<SubCell> {
        let i = u8::try_from(reference.easting() / 10_000).ok()?;
        let j = u8::try_from(reference.northing() / 10_000).ok()?;
        SubCell::new(i, j).ok()
    }
}

impl GridTransform for LatticeTransform {
    fn system(&self) -> GridSystem {
        self.system
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "lattice coordinates scale offsets linearly from the origin"
    )]
    fn resolve(&self, reference: &GridReference) -> Result<Coord<f64>, TransformError> {
        self.check_system(reference)?;
        if Self::containing_cell(reference).is_some_and(|cell| self.failing.contains(&cell)) {
            return Err(TransformError::NonConvergent(reference.to_string()));
        }
        let origin = self
            .origins
            .get(reference.square().as_str())
            .copied()
            .unwrap_or(Coord { x: 0.0, y: 0.0 });
        Ok(Coord {
            x: origin.x + f64::from(reference.easting()) / 100_000.0 * LATTICE_SQUARE_DEGREES,
            y: origin.y + f64::from(reference.northing()) / 100_000.0 * LATTICE_SQUARE_DEGREES,
        })
    }
}

/// `GridTransform` returning the same coordinate for every reference.
#[derive(Debug, Clone, Copy)]
pub struct FixedTransform {
    /// System served.
    pub system: GridSystem,
    /// Coordinate returned for every reference.
    pub coord: Coord<f64>,
}

impl GridTransform for FixedTransform {
    fn system(&self) -> GridSystem {
        self.system
    }

    fn resolve(&self, reference: &GridReference) -> Result<Coord<f64>, TransformError> {
        self.check_system(reference)?;
        Ok(self.coord)
    }
}

/// Culler rejecting every cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectAllCuller;

impl ViewportCuller for RejectAllCuller {
    fn intersects(&self, _bounds: &GeographicBounds, _corners: &[Coord<f64>; 4]) -> bool {
        false
    }
}

/// Culler accepting every cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAllCuller;

impl ViewportCuller for AcceptAllCuller {
    fn intersects(&self, _bounds: &GeographicBounds, _corners: &[Coord<f64>; 4]) -> bool {
        true
    }
}

/// `DisplaySurface` recording what is currently drawn and every call made.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next: u64,
    /// Geometries currently on the surface keyed by handle.
    pub drawn: HashMap<SurfaceHandle, RenderableGeometry>,
    /// Number of `add` calls.
    pub adds: usize,
    /// Number of `remove` calls.
    pub removes: usize,
}

impl DisplaySurface for RecordingSurface {
    fn add(&mut self, geometry: &RenderableGeometry) -> SurfaceHandle {
        self.next += 1;
        let handle = SurfaceHandle(self.next);
        self.drawn.insert(handle, geometry.clone());
        self.adds += 1;
        handle
    }

    fn remove(&mut self, handle: SurfaceHandle) {
        self.drawn.remove(&handle);
        self.removes += 1;
    }
}
