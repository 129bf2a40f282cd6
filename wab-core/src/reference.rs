//! Lettered grid references within a single top-level square.
//!
//! References are built transiently for every corner and centre query and
//! never persisted. The canonical text form is `"<square> <eeeee> <nnnnn>"`,
//! five digits per offset, which is what the transform providers accept.

use std::fmt;

use thiserror::Error;

use crate::grid::{GridSystem, SquareId, SquareIdError};

/// Largest easting or northing offset within a 100 km square, in metres.
pub const MAX_OFFSET: u32 = 99_999;

/// Errors raised while building or parsing a [`GridReference`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridReferenceError {
    /// The square letters were rejected.
    #[error(transparent)]
    Square(#[from] SquareIdError),
    /// An offset exceeded [`MAX_OFFSET`].
    #[error("offset ({easting}, {northing}) exceeds {MAX_OFFSET}")]
    OutOfRange {
        /// Requested easting offset.
        easting: u32,
        /// Requested northing offset.
        northing: u32,
    },
    /// The text did not have the `<square> <easting> <northing>` shape.
    #[error("malformed grid reference '{0}'")]
    Malformed(String),
}

/// A square identifier plus easting/northing offsets in metres.
///
/// # Examples
/// ```
/// use wab_core::{GridReference, GridSystem, SquareId};
///
/// let square = SquareId::parse(GridSystem::Gb, "SU")?;
/// let reference = GridReference::new(square, 3_000, 45_000)?;
/// assert_eq!(reference.to_string(), "SU 03000 45000");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridReference {
    square: SquareId,
    easting: u32,
    northing: u32,
}

impl GridReference {
    /// Build a reference, rejecting offsets beyond [`MAX_OFFSET`].
    ///
    /// # Errors
    /// Returns [`GridReferenceError::OutOfRange`] for either offset
    /// above [`MAX_OFFSET`].
    pub fn new(square: SquareId, easting: u32, northing: u32) -> Result<Self, GridReferenceError> {
        if easting > MAX_OFFSET || northing > MAX_OFFSET {
            return Err(GridReferenceError::OutOfRange { easting, northing });
        }
        Ok(Self {
            square,
            easting,
            northing,
        })
    }

    /// Parse the textual form for `system`.
    ///
    /// Accepts `"<square> <digits> <digits>"` with both digit groups the same
    /// length (1 to 5). Shorter groups are scaled to metres, so `"SU 12 34"`
    /// means 12 km east and 34 km north of the square origin.
    ///
    /// # Errors
    /// Returns [`GridReferenceError`] when the text is malformed or names an
    /// invalid square.
    pub fn parse(system: GridSystem, text: &str) -> Result<Self, GridReferenceError> {
        let malformed = || GridReferenceError::Malformed(text.to_owned());
        let mut parts = text.split_whitespace();
        let (Some(square), Some(easting), Some(northing), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if easting.len() != northing.len() || easting.is_empty() || easting.len() > 5 {
            return Err(malformed());
        }
        let scale = 10_u32.pow(5 - u32::try_from(easting.len()).map_err(|_| malformed())?);
        let easting_m = parse_digits(easting).ok_or_else(malformed)? * scale;
        let northing_m = parse_digits(northing).ok_or_else(malformed)? * scale;
        Self::new(SquareId::parse(system, square)?, easting_m, northing_m)
    }

    /// Square the offsets are relative to.
    #[must_use]
    pub const fn square(&self) -> &SquareId {
        &self.square
    }

    /// Grid system of the square.
    #[must_use]
    pub const fn system(&self) -> GridSystem {
        self.square.system()
    }

    /// Easting offset in metres from the square's south-west corner.
    #[must_use]
    pub const fn easting(&self) -> u32 {
        self.easting
    }

    /// Northing offset in metres from the square's south-west corner.
    #[must_use]
    pub const fn northing(&self) -> u32 {
        self.northing
    }
}

fn parse_digits(text: &str) -> Option<u32> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:05} {:05}",
            self.square, self.easting, self.northing
        )
    }
}
