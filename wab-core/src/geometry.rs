//! Renderable output of the overlay engine.
//!
//! Geometries are plain values owned by the caller once emitted. They hold
//! no reference back to the engine.

use geo::{Coord, LineString, Polygon};

/// Which label style a host should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LabelKind {
    /// Whole-square label such as `HP`.
    Square,
    /// Sub-cell label such as `HP37`.
    SubSquare,
}

impl LabelKind {
    /// CSS class conventionally used for this label style.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Square => "wabSquareLabel",
            Self::SubSquare => "wabSquareLabelLong",
        }
    }
}

/// A square outline or a text label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum RenderableGeometry {
    /// Closed four-corner outline.
    Square {
        /// Polygon whose exterior ring repeats the first corner.
        polygon: Polygon<f64>,
    },
    /// Text anchored at a coordinate.
    Label {
        /// Label position, usually the square or cell centre.
        anchor: Coord<f64>,
        /// Display text.
        text: String,
        /// Style hint for the host.
        kind: LabelKind,
    },
}

impl RenderableGeometry {
    /// Build a closed outline from four corners in drawing order.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use wab_core::RenderableGeometry;
    ///
    /// let square = RenderableGeometry::square([
    ///     Coord { x: 0.0, y: 0.0 },
    ///     Coord { x: 1.0, y: 0.0 },
    ///     Coord { x: 1.0, y: 1.0 },
    ///     Coord { x: 0.0, y: 1.0 },
    /// ]);
    /// assert!(square.is_square());
    /// ```
    #[must_use]
    pub fn square(corners: [Coord<f64>; 4]) -> Self {
        // `Polygon::new` closes the ring.
        let ring = LineString::from(corners.to_vec());
        Self::Square {
            polygon: Polygon::new(ring, Vec::new()),
        }
    }

    /// Build a label.
    #[must_use]
    pub fn label(anchor: Coord<f64>, text: impl Into<String>, kind: LabelKind) -> Self {
        Self::Label {
            anchor,
            text: text.into(),
            kind,
        }
    }

    /// Whether this is an outline.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        matches!(self, Self::Square { .. })
    }

    /// Whether this is a label.
    #[must_use]
    pub const fn is_label(&self) -> bool {
        matches!(self, Self::Label { .. })
    }

    /// Label text, if this is a label.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        match self {
            Self::Label { text, .. } => Some(text),
            Self::Square { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn square_ring_is_closed() {
        let corners = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
        ];
        let RenderableGeometry::Square { polygon } = RenderableGeometry::square(corners) else {
            panic!("expected a square");
        };
        let ring: Vec<Coord<f64>> = polygon.exterior().coords().copied().collect();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
    }

    #[rstest]
    fn label_exposes_text() {
        let label = RenderableGeometry::label(Coord { x: 0.0, y: 0.0 }, "HP37", LabelKind::SubSquare);
        assert!(label.is_label());
        assert_eq!(label.label_text(), Some("HP37"));
    }

    #[rstest]
    fn label_kinds_map_to_css_classes() {
        assert_eq!(LabelKind::Square.css_class(), "wabSquareLabel");
        assert_eq!(LabelKind::SubSquare.css_class(), "wabSquareLabelLong");
    }
}
