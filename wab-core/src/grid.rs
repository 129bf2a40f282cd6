//! Grid systems, top-level square identifiers and sub-cell indices.
//!
//! Three national grids carry WAB squares: the Ordnance Survey National Grid
//! for Great Britain, the Irish Grid, and the UTM zone 30 lettering used for
//! the Channel Islands. A [`SquareId`] is always scoped to exactly one of
//! them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Letters used by the OS and Irish lettered grids. `I` is never used.
const GRID_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Leading letters of the 500 km squares covered by the GB National Grid.
const GB_LEADING_LETTERS: &str = "HJNOST";

/// UTM 100 km column letters for zone 30.
const CI_COLUMN_LETTERS: &str = "STUVWXYZ";

/// UTM 100 km row letters. `I` and `O` are never used.
const CI_ROW_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUV";

/// A national grid-reference system carrying WAB squares.
///
/// # Examples
/// ```
/// use wab_core::GridSystem;
///
/// assert_eq!(GridSystem::Ie.as_str(), "IE");
/// assert_eq!("ci".parse::<GridSystem>(), Ok(GridSystem::Ci));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridSystem {
    /// Ordnance Survey National Grid (Great Britain).
    #[cfg_attr(feature = "serde", serde(rename = "GB"))]
    Gb,
    /// Irish Grid (Ireland and Northern Ireland).
    #[cfg_attr(feature = "serde", serde(rename = "IE"))]
    Ie,
    /// UTM zone 30 lettered squares (Channel Islands).
    #[cfg_attr(feature = "serde", serde(rename = "CI"))]
    Ci,
}

impl GridSystem {
    /// Every grid system in rendering order.
    pub const ALL: [Self; 3] = [Self::Gb, Self::Ie, Self::Ci];

    /// Return the short upper-case tag for the system.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gb => "GB",
            Self::Ie => "IE",
            Self::Ci => "CI",
        }
    }

    /// Position of the system in [`GridSystem::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Gb => 0,
            Self::Ie => 1,
            Self::Ci => 2,
        }
    }
}

impl fmt::Display for GridSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GB" => Ok(Self::Gb),
            "IE" | "NI" => Ok(Self::Ie),
            "CI" => Ok(Self::Ci),
            _ => Err(format!("unknown grid system '{s}'")),
        }
    }
}

/// Errors returned by [`SquareId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareIdError {
    /// The identifier was empty or whitespace.
    #[error("square identifier must not be empty")]
    Empty,
    /// The identifier had the wrong number of letters for its system.
    #[error("{system} square identifiers have {expected} letter(s), found '{found}'")]
    WrongLength {
        /// System the identifier was parsed for.
        system: GridSystem,
        /// Number of letters the system uses.
        expected: usize,
        /// Rejected input.
        found: String,
    },
    /// A letter is not used by the system's lettering scheme.
    #[error("letter '{letter}' is not valid in a {system} square identifier")]
    InvalidLetter {
        /// System the identifier was parsed for.
        system: GridSystem,
        /// Offending character.
        letter: char,
    },
}

/// A named top-level grid square, such as `HP` (GB) or `D` (IE).
///
/// # Examples
/// ```
/// use wab_core::{GridSystem, SquareId};
///
/// let square = SquareId::parse(GridSystem::Gb, "tq")?;
/// assert_eq!(square.as_str(), "TQ");
/// assert_eq!(square.system(), GridSystem::Gb);
/// # Ok::<(), wab_core::SquareIdError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSquareId"))]
pub struct SquareId {
    system: GridSystem,
    code: String,
}

impl SquareId {
    /// Validate `raw` against the lettering scheme of `system`.
    ///
    /// Input is trimmed and upper-cased before validation.
    ///
    /// # Errors
    /// Returns [`SquareIdError`] when `raw` is empty, has the wrong number of
    /// letters for `system`, or uses a letter outside its scheme.
    pub fn parse(system: GridSystem, raw: &str) -> Result<Self, SquareIdError> {
        let code = raw.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(SquareIdError::Empty);
        }
        let letters: Vec<char> = code.chars().collect();
        let expected = match system {
            GridSystem::Ie => 1,
            GridSystem::Gb | GridSystem::Ci => 2,
        };
        if letters.len() != expected {
            return Err(SquareIdError::WrongLength {
                system,
                expected,
                found: code,
            });
        }
        let allowed: [&str; 2] = match system {
            GridSystem::Gb => [GB_LEADING_LETTERS, GRID_LETTERS],
            GridSystem::Ie => [GRID_LETTERS, GRID_LETTERS],
            GridSystem::Ci => [CI_COLUMN_LETTERS, CI_ROW_LETTERS],
        };
        for (letter, set) in letters.iter().zip(allowed) {
            if !set.contains(*letter) {
                return Err(SquareIdError::InvalidLetter {
                    system,
                    letter: *letter,
                });
            }
        }
        Ok(Self { system, code })
    }

    /// Grid system the square belongs to.
    #[must_use]
    pub const fn system(&self) -> GridSystem {
        self.system
    }

    /// Upper-case letters naming the square.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Iterate the letters of the identifier.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.code.chars()
    }
}

/// Unvalidated wire form of [`SquareId`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSquareId {
    system: GridSystem,
    code: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSquareId> for SquareId {
    type Error = SquareIdError;

    fn try_from(raw: RawSquareId) -> Result<Self, Self::Error> {
        Self::parse(raw.system, &raw.code)
    }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Index of a lettered-grid letter with `I` removed (`A` = 0, `Z` = 24).
#[must_use]
pub fn grid_letter_index(letter: char) -> Option<u32> {
    GRID_LETTERS
        .find(letter)
        .and_then(|idx| u32::try_from(idx).ok())
}

/// Index of a UTM column letter within the zone 30 column set.
#[must_use]
pub fn ci_column_index(letter: char) -> Option<u32> {
    CI_COLUMN_LETTERS
        .find(letter)
        .and_then(|idx| u32::try_from(idx).ok())
}

/// Index of a UTM row letter within the 20-letter row cycle.
#[must_use]
pub fn ci_row_index(letter: char) -> Option<u32> {
    CI_ROW_LETTERS
        .find(letter)
        .and_then(|idx| u32::try_from(idx).ok())
}

/// Error returned when a sub-cell index leaves the `0..=9` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sub-cell index ({i}, {j}) is outside 0..=9")]
pub struct SubCellError {
    /// Rejected easting index.
    pub i: u8,
    /// Rejected northing index.
    pub j: u8,
}

/// One of the 100 equal subdivisions of a top-level square.
///
/// `i` counts 10 km columns eastwards and `j` counts 10 km rows northwards
/// from the square's south-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSubCell"))]
pub struct SubCell {
    i: u8,
    j: u8,
}

impl SubCell {
    /// Number of sub-cells along each axis.
    pub const PER_AXIS: u8 = 10;

    /// Construct a sub-cell, rejecting indices outside `0..=9`.
    ///
    /// # Errors
    /// Returns [`SubCellError`] when either index is 10 or more.
    pub const fn new(i: u8, j: u8) -> Result<Self, SubCellError> {
        if i >= Self::PER_AXIS || j >= Self::PER_AXIS {
            return Err(SubCellError { i, j });
        }
        Ok(Self { i, j })
    }

    /// Easting index.
    #[must_use]
    pub const fn i(self) -> u8 {
        self.i
    }

    /// Northing index.
    #[must_use]
    pub const fn j(self) -> u8 {
        self.j
    }

    /// All 100 sub-cells, `i` ascending then `j` ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::PER_AXIS).flat_map(|i| (0..Self::PER_AXIS).map(move |j| Self { i, j }))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSubCell {
    i: u8,
    j: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSubCell> for SubCell {
    type Error = SubCellError;

    fn try_from(raw: RawSubCell) -> Result<Self, Self::Error> {
        Self::new(raw.i, raw.j)
    }
}
