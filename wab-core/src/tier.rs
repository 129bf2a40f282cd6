//! Zoom-driven level of detail.
//!
//! # Examples
//! ```
//! use wab_core::DetailTier;
//!
//! assert_eq!(DetailTier::for_zoom(4.0), DetailTier::Outline);
//! assert_eq!(DetailTier::for_zoom(6.5), DetailTier::Labelled);
//! assert_eq!(DetailTier::for_zoom(12.0), DetailTier::SubGrid);
//! ```

/// Highest zoom that still renders bare square outlines.
pub const OUTLINE_MAX_ZOOM: f64 = 4.0;

/// Highest zoom that renders one labelled square per grid square.
pub const LABELLED_MAX_ZOOM: f64 = 8.0;

/// How much of a square's structure is drawn.
///
/// Variants are ordered by increasing precision and rendering cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetailTier {
    /// Outer boundary of each square, no label.
    Outline = 0,
    /// Outer boundary of each square, labelled at its centre.
    Labelled = 1,
    /// Full 10x10 sub-grid with one label per visible sub-cell.
    SubGrid = 2,
}

impl DetailTier {
    /// Pick the tier for a map zoom level.
    ///
    /// Total over `f64`: anything that is not above a threshold (including
    /// `NaN`) falls to the coarser tier.
    #[must_use]
    pub const fn for_zoom(zoom: f64) -> Self {
        if zoom > LABELLED_MAX_ZOOM {
            Self::SubGrid
        } else if zoom > OUTLINE_MAX_ZOOM {
            Self::Labelled
        } else {
            Self::Outline
        }
    }

    /// Numeric tier, `0` to `2`.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}
