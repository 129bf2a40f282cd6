//! Grid transform providers for the WAB overlay.
//!
//! Each provider implements [`wab_core::GridTransform`] for one grid:
//!
//! - [`OsGridTransform`]: Ordnance Survey National Grid on OSGB36.
//! - [`IrishGridTransform`]: Irish Grid on Ireland 1975.
//! - [`ChannelIslandsTransform`]: UTM zone 30 on WGS84.
//!
//! Grid metres are inverse projected onto the grid's own ellipsoid, then
//! shifted to WGS84 with a seven-parameter Helmert transform. Expect a few
//! metres of error from the Helmert shift; that is well below a sub-square.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod channel_islands;
pub mod ellipsoid;
pub mod helmert;
pub mod irish;
pub mod osgb;
pub mod transverse_mercator;

use geo::Coord;
use wab_core::{GridReference, TransformError, TransformRegistry};

pub use channel_islands::ChannelIslandsTransform;
pub use ellipsoid::{Cartesian, Ellipsoid, Geodetic};
pub use helmert::{Datum, Helmert};
pub use irish::IrishGridTransform;
pub use osgb::OsGridTransform;
pub use transverse_mercator::{ProjectionError, TransverseMercator};

/// Registry with all three providers installed.
///
/// # Examples
/// ```
/// use wab_core::GridSystem;
///
/// let registry = wab_geodesy::default_registry();
/// assert!(registry.all_ready());
/// let centre = registry.resolve_str(GridSystem::Gb, "TQ 30000 80000")?;
/// assert!((centre.y - 51.504).abs() < 0.001);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn default_registry() -> TransformRegistry {
    let mut registry = TransformRegistry::new();
    registry.install(OsGridTransform);
    registry.install(IrishGridTransform);
    registry.install(ChannelIslandsTransform);
    registry
}

/// Inverse project grid metres and express the result on WGS84.
pub(crate) fn project_to_wgs84(
    grid: &TransverseMercator,
    datum: &Datum,
    easting: u32,
    northing: u32,
    reference: &GridReference,
) -> Result<Coord<f64>, TransformError> {
    let local = grid
        .inverse(f64::from(easting), f64::from(northing))
        .map_err(|err| {
            log::debug!("{reference}: {err}");
            TransformError::NonConvergent(reference.to_string())
        })?;
    Ok(datum.convert_to_wgs84(local).to_degrees())
}
