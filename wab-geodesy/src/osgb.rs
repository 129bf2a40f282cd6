//! Ordnance Survey National Grid (GB).

use geo::Coord;
use wab_core::grid::grid_letter_index;
use wab_core::{GridReference, GridSystem, GridTransform, SquareId, TransformError};

use crate::helmert::Datum;
use crate::project_to_wgs84;
use crate::transverse_mercator::TransverseMercator;

const SQUARE_METRES: u32 = 100_000;

/// Resolves GB references through OSGB36 and the National Grid projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsGridTransform;

impl OsGridTransform {
    /// South-west corner of a 100 km square in National Grid metres.
    ///
    /// The first letter picks a 500 km block and the second a 100 km square
    /// within it, both from the 25-letter alphabet without `I`.
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "letter indices split into rows and columns of five"
    )]
    pub fn square_origin(square: &SquareId) -> Option<(u32, u32)> {
        let mut letters = square.letters();
        let major = grid_letter_index(letters.next()?)?;
        let minor = grid_letter_index(letters.next()?)?;
        // False origin sits at square SV, two blocks west and one south of
        // the alphabet's origin.
        let east = ((major + 3) % 5) * 5 + minor % 5;
        let north = 19_u32
            .checked_sub((major / 5) * 5)?
            .checked_sub(minor / 5)?;
        Some((east * SQUARE_METRES, north * SQUARE_METRES))
    }

    /// Full National Grid easting and northing of `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::SystemMismatch`] for non-GB references and
    /// [`TransformError::UnknownSquare`] when the letters cannot be placed.
    pub fn grid_position(&self, reference: &GridReference) -> Result<(u32, u32), TransformError> {
        self.check_system(reference)?;
        let (east, north) = Self::square_origin(reference.square())
            .ok_or_else(|| TransformError::UnknownSquare(reference.square().clone()))?;
        Ok((east + reference.easting(), north + reference.northing()))
    }
}

impl GridTransform for OsGridTransform {
    fn system(&self) -> GridSystem {
        GridSystem::Gb
    }

    fn resolve(&self, reference: &GridReference) -> Result<Coord<f64>, TransformError> {
        let (easting, northing) = self.grid_position(reference)?;
        project_to_wgs84(
            &TransverseMercator::NATIONAL_GRID,
            &Datum::OSGB36,
            easting,
            northing,
            reference,
        )
    }
}
