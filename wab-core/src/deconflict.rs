//! Trim sub-cells that fall in a neighbouring grid's territory.
//!
//! Adjacent grids overlap around the Irish Sea, the Channel and the outer
//! isles. The table below is an empirical correction per square; it cannot be
//! derived from the grid geometry.

use crate::grid::SubCell;

/// Return whether sub-cell `(i, j)` of `square` should be drawn.
///
/// Squares without a rule are always valid.
///
/// # Examples
/// ```
/// use wab_core::is_valid_sub_cell;
///
/// assert!(is_valid_sub_cell("WA", 3, 1));
/// assert!(!is_valid_sub_cell("WA", 3, 2));
/// assert!(is_valid_sub_cell("ZZ", 5, 5));
/// ```
#[must_use]
pub fn is_valid_sub_cell(square: &str, i: u8, j: u8) -> bool {
    let excluded = match square {
        "WA" => j > 1,
        "TR" => i > 4 && j < 5,
        "SM" => i < 4,
        "TV" => i == 9 && j == 0,
        "NW" => i < 9,
        "NR" => i < 5 && j < 3,
        "C" => j > 6,
        "D" => i > 5 || j > 5 || (i > 2 && j > 3),
        "J" => i > 6,
        _ => false,
    };
    !excluded
}

/// [`is_valid_sub_cell`] for a typed [`SubCell`].
#[must_use]
pub fn is_valid_cell(square: &str, cell: SubCell) -> bool {
    is_valid_sub_cell(square, cell.i(), cell.j())
}
