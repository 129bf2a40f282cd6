//! Channel Islands squares on UTM zone 30.
//!
//! WAB uses two-letter UTM 100 km square identifiers here (`WA`, `WV`).
//! Coordinates are already WGS84, so no datum shift is applied.

use geo::Coord;
use wab_core::grid::{ci_column_index, ci_row_index};
use wab_core::{GridReference, GridSystem, GridTransform, SquareId, TransformError};

use crate::helmert::Datum;
use crate::project_to_wgs84;
use crate::transverse_mercator::TransverseMercator;

const SQUARE_METRES: u32 = 100_000;
/// Row letters repeat every 2000 km of northing.
const ROW_CYCLE_METRES: u32 = 2_000_000;
/// Lowest northing of latitude band U, which holds the islands.
const BAND_U_MIN_NORTHING: u32 = 5_300_000;

/// Resolves Channel Islands references through UTM zone 30N.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelIslandsTransform;

impl ChannelIslandsTransform {
    /// South-west corner of a UTM 100 km square in zone 30 metres.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "row letters cycle every twenty squares"
    )]
    pub fn square_origin(square: &SquareId) -> Option<(u32, u32)> {
        let mut letters = square.letters();
        let column = ci_column_index(letters.next()?)?;
        let row = ci_row_index(letters.next()?)?;
        let east = (column + 1) * SQUARE_METRES;
        // Even zones offset the row letters by five.
        let mut north = ((row + 15) % 20) * SQUARE_METRES;
        while north < BAND_U_MIN_NORTHING {
            north += ROW_CYCLE_METRES;
        }
        Some((east, north))
    }

    /// Full zone 30 easting and northing of `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::SystemMismatch`] for non-CI references and
    /// [`TransformError::UnknownSquare`] when the letters cannot be placed.
    pub fn grid_position(&self, reference: &GridReference) -> Result<(u32, u32), TransformError> {
        self.check_system(reference)?;
        let (east, north) = Self::square_origin(reference.square())
            .ok_or_else(|| TransformError::UnknownSquare(reference.square().clone()))?;
        Ok((east + reference.easting(), north + reference.northing()))
    }
}

impl GridTransform for ChannelIslandsTransform {
    fn system(&self) -> GridSystem {
        GridSystem::Ci
    }

    fn resolve(&self, reference: &GridReference) -> Result<Coord<f64>, TransformError> {
        let (easting, northing) = self.grid_position(reference)?;
        project_to_wgs84(
            &TransverseMercator::UTM_30N,
            &Datum::WGS84,
            easting,
            northing,
            reference,
        )
    }
}
