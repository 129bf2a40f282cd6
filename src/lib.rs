//! Facade crate for the Worked All Britain square overlay.
//!
//! This crate re-exports the overlay engine and, behind the `geodesy`
//! feature, the GB, Irish and Channel Islands grid transforms.

#![forbid(unsafe_code)]

pub use wab_core::{
    ConfigIssue, DetailTier, DisplaySurface, Frame, GeographicBounds, GridOverlayEngine,
    GridReference, GridReferenceError, GridSystem, GridTransform, LabelKind, OverlayLayer,
    OverlayOptions, Readiness, RenderOutcome, RenderableGeometry, SkippedCell, SquareId,
    SubCell, SurfaceHandle, TransformError, TransformRegistry, ViewportCuller, WabOverlay,
};

#[cfg(feature = "geodesy")]
pub use wab_geodesy::{
    ChannelIslandsTransform, IrishGridTransform, OsGridTransform, default_registry,
};
