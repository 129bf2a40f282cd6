//! Per-grid transform capability.

use geo::Coord;

use crate::grid::GridSystem;
use crate::reference::GridReference;

use super::error::TransformError;

/// Resolve grid references of one [`GridSystem`] to WGS84 coordinates.
///
/// Returned coordinates use `x = longitude` and `y = latitude` in degrees.
/// Implementations must be pure: the same reference always yields the same
/// coordinate, so renders are repeatable.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use wab_core::{GridReference, GridSystem, GridTransform, TransformError};
///
/// /// Places every GB square on a flat one-degree lattice.
/// struct Flat;
///
/// impl GridTransform for Flat {
///     fn system(&self) -> GridSystem {
///         GridSystem::Gb
///     }
///
///     fn resolve(&self, reference: &GridReference) -> Result<Coord<f64>, TransformError> {
///         Ok(Coord {
///             x: f64::from(reference.easting()) / 100_000.0,
///             y: f64::from(reference.northing()) / 100_000.0,
///         })
///     }
/// }
///
/// let reference = GridReference::parse(GridSystem::Gb, "HP 50000 50000")?;
/// let centre = Flat.resolve(&reference)?;
/// assert_eq!(centre, Coord { x: 0.5, y: 0.5 });
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait GridTransform: Send + Sync {
    /// Grid system this provider serves.
    fn system(&self) -> GridSystem;

    /// Convert `reference` to a geographic coordinate.
    ///
    /// Implementations should return [`TransformError::SystemMismatch`] for
    /// references belonging to another system rather than guessing.
    fn resolve(&self, reference: &GridReference) -> Result<Coord<f64>, TransformError>;

    /// Reject references that belong to another system.
    fn check_system(&self, reference: &GridReference) -> Result<(), TransformError> {
        if reference.system() == self.system() {
            Ok(())
        } else {
            Err(TransformError::SystemMismatch {
                expected: self.system(),
                found: reference.system(),
            })
        }
    }
}
