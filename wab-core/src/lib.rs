//! Core geometry for the Worked All Britain square overlay.
//!
//! The crate turns the configured WAB squares of three national grids
//! (Great Britain, Ireland and the Channel Islands) into square outlines and
//! labels for a map view. Detail depends on zoom: bare outlines, labelled
//! outlines, or the full 10x10 sub-grid of each square, trimmed where grids
//! overlap and culled to the viewport.
//!
//! Projection maths lives behind the [`GridTransform`] trait so hosts can
//! plug in whichever geodesy they have, as soon as it is loaded.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cull;
pub mod deconflict;
pub mod engine;
pub mod geometry;
pub mod grid;
pub mod layer;
pub mod options;
pub mod overlay;
pub mod reference;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod tier;
pub mod transform;

pub use cull::{CornerCuller, GeographicBounds, ViewportCuller, corners_intersect};
pub use deconflict::{is_valid_cell, is_valid_sub_cell};
pub use engine::{GridOverlayEngine, RenderOutcome, SkippedCell};
pub use geometry::{LabelKind, RenderableGeometry};
pub use grid::{GridSystem, SquareId, SquareIdError, SubCell, SubCellError};
pub use layer::{DisplaySurface, OverlayLayer, SurfaceHandle};
pub use options::{ConfigIssue, ConfiguredSquares, OverlayOptions};
pub use overlay::{Frame, WabOverlay};
pub use reference::{GridReference, GridReferenceError, MAX_OFFSET};
pub use tier::DetailTier;
pub use transform::{GridTransform, Readiness, TransformError, TransformRegistry};
