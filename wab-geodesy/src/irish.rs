//! Irish Grid (IE and Northern Ireland).

use geo::Coord;
use wab_core::grid::grid_letter_index;
use wab_core::{GridReference, GridSystem, GridTransform, SquareId, TransformError};

use crate::helmert::Datum;
use crate::project_to_wgs84;
use crate::transverse_mercator::TransverseMercator;

const SQUARE_METRES: u32 = 100_000;

/// Resolves Irish Grid references through Ireland 1975.
#[derive(Debug, Clone, Copy, Default)]
pub struct IrishGridTransform;

impl IrishGridTransform {
    /// South-west corner of a single-letter 100 km square.
    ///
    /// Letters run west to east in rows of five, starting with `A` in the
    /// north-west.
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "letter indices split into rows and columns of five"
    )]
    pub fn square_origin(square: &SquareId) -> Option<(u32, u32)> {
        let index = grid_letter_index(square.letters().next()?)?;
        let east = index % 5;
        let north = 4_u32.checked_sub(index / 5)?;
        Some((east * SQUARE_METRES, north * SQUARE_METRES))
    }

    /// Full Irish Grid easting and northing of `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::SystemMismatch`] for non-IE references and
    /// [`TransformError::UnknownSquare`] when the letter cannot be placed.
    pub fn grid_position(&self, reference: &GridReference) -> Result<(u32, u32), TransformError> {
        self.check_system(reference)?;
        let (east, north) = Self::square_origin(reference.square())
            .ok_or_else(|| TransformError::UnknownSquare(reference.square().clone()))?;
        Ok((east + reference.easting(), north + reference.northing()))
    }
}

impl GridTransform for IrishGridTransform {
    fn system(&self) -> GridSystem {
        GridSystem::Ie
    }

    fn resolve(&self, reference: &GridReference) -> Result<Coord<f64>, TransformError> {
        let (easting, northing) = self.grid_position(reference)?;
        project_to_wgs84(
            &TransverseMercator::IRISH_GRID,
            &Datum::IRL1975,
            easting,
            northing,
            reference,
        )
    }
}
