//! Inverse transverse Mercator projection (Ordnance Survey series).

use thiserror::Error;

use crate::ellipsoid::{Ellipsoid, Geodetic};

/// Meridional arc tolerance in metres.
const ARC_TOLERANCE: f64 = 0.000_01;
const MAX_ITERATIONS: u32 = 64;

/// Failure to invert a projected coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectionError {
    /// Latitude iteration did not settle within the tolerance.
    #[error("latitude iteration did not converge for E {easting} N {northing}")]
    NonConvergent {
        /// Projected easting in metres.
        easting: f64,
        /// Projected northing in metres.
        northing: f64,
    },
}

/// Parameters of a transverse Mercator grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransverseMercator {
    /// Ellipsoid the grid is projected from.
    pub ellipsoid: Ellipsoid,
    /// Scale factor on the central meridian.
    pub scale: f64,
    /// Latitude of true origin in degrees.
    pub origin_lat: f64,
    /// Longitude of true origin (central meridian) in degrees.
    pub origin_lon: f64,
    /// Easting of true origin in metres.
    pub false_easting: f64,
    /// Northing of true origin in metres.
    pub false_northing: f64,
}

impl TransverseMercator {
    /// Ordnance Survey National Grid.
    pub const NATIONAL_GRID: Self = Self {
        ellipsoid: Ellipsoid::AIRY_1830,
        scale: 0.999_601_271_7,
        origin_lat: 49.0,
        origin_lon: -2.0,
        false_easting: 400_000.0,
        false_northing: -100_000.0,
    };

    /// Irish Grid (TM75 origin, Ireland 1975 datum).
    pub const IRISH_GRID: Self = Self {
        ellipsoid: Ellipsoid::AIRY_MODIFIED,
        scale: 1.000_035,
        origin_lat: 53.5,
        origin_lon: -8.0,
        false_easting: 200_000.0,
        false_northing: 250_000.0,
    };

    /// UTM zone 30 north on WGS84.
    pub const UTM_30N: Self = Self {
        ellipsoid: Ellipsoid::WGS84,
        scale: 0.9996,
        origin_lat: 0.0,
        origin_lon: -3.0,
        false_easting: 500_000.0,
        false_northing: 0.0,
    };

    /// Developed meridional arc from the origin latitude to `lat`.
    #[expect(clippy::float_arithmetic, reason = "series expansion of the meridional arc")]
    fn meridional_arc(&self, lat: f64) -> f64 {
        let n = self.ellipsoid.n();
        let (n2, n3) = (n * n, n * n * n);
        let lat0 = self.origin_lat.to_radians();
        let (dlat, slat) = (lat - lat0, lat + lat0);
        self.ellipsoid.b
            * self.scale
            * ((1.0 + n + 1.25 * n2 + 1.25 * n3) * dlat
                - (3.0 * n + 3.0 * n2 + 2.625 * n3) * dlat.sin() * slat.cos()
                + (1.875 * n2 + 1.875 * n3) * (2.0 * dlat).sin() * (2.0 * slat).cos()
                - (35.0 / 24.0) * n3 * (3.0 * dlat).sin() * (3.0 * slat).cos())
    }

    /// Latitude and longitude on [`Self::ellipsoid`] for a projected point.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::NonConvergent`] when the footpoint latitude
    /// does not settle, which only happens for non-finite input.
    #[expect(clippy::float_arithmetic, reason = "inverse projection series")]
    pub fn inverse(&self, easting: f64, northing: f64) -> Result<Geodetic, ProjectionError> {
        let a_f0 = self.ellipsoid.a * self.scale;
        let e2 = self.ellipsoid.e2();
        let offset = northing - self.false_northing;

        let mut lat = offset / a_f0 + self.origin_lat.to_radians();
        let mut converged = false;
        for _ in 0..MAX_ITERATIONS {
            let residual = offset - self.meridional_arc(lat);
            if residual.abs() < ARC_TOLERANCE {
                converged = true;
                break;
            }
            lat += residual / a_f0;
        }
        if !converged {
            return Err(ProjectionError::NonConvergent { easting, northing });
        }

        let (sin_lat, cos_lat) = lat.sin_cos();
        let tan_lat = sin_lat / cos_lat;
        let sec_lat = cos_lat.recip();
        let t2 = tan_lat * tan_lat;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        let denom = 1.0 - e2 * sin_lat * sin_lat;
        let nu = a_f0 / denom.sqrt();
        let rho = a_f0 * (1.0 - e2) / denom.powf(1.5);
        let eta2 = nu / rho - 1.0;
        let (nu3, nu5, nu7) = (nu.powi(3), nu.powi(5), nu.powi(7));

        let vii = tan_lat / (2.0 * rho * nu);
        let viii = tan_lat / (24.0 * rho * nu3) * (5.0 + 3.0 * t2 + eta2 - 9.0 * t2 * eta2);
        let ix = tan_lat / (720.0 * rho * nu5) * (61.0 + 90.0 * t2 + 45.0 * t4);
        let x = sec_lat / nu;
        let xi = sec_lat / (6.0 * nu3) * (nu / rho + 2.0 * t2);
        let xii = sec_lat / (120.0 * nu5) * (5.0 + 28.0 * t2 + 24.0 * t4);
        let xiia = sec_lat / (5040.0 * nu7) * (61.0 + 662.0 * t2 + 1320.0 * t4 + 720.0 * t6);

        let de = easting - self.false_easting;
        let (de2, de3) = (de * de, de * de * de);
        Ok(Geodetic {
            lat: lat - vii * de2 + viii * de2 * de2 - ix * de3 * de3,
            lon: self.origin_lon.to_radians() + x * de - xi * de3 + xii * de3 * de2
                - xiia * de3 * de2 * de2,
        })
    }
}
