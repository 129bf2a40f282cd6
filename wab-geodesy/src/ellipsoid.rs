//! Reference ellipsoids and geodetic/geocentric conversion.

/// Earth-centred, earth-fixed cartesian position in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian {
    /// Towards the prime meridian on the equator.
    pub x: f64,
    /// Towards 90°E on the equator.
    pub y: f64,
    /// Towards the north pole.
    pub z: f64,
}

/// Geodetic position in radians on a particular ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Latitude in radians.
    pub lat: f64,
    /// Longitude in radians.
    pub lon: f64,
}

impl Geodetic {
    /// Convert to a `geo` coordinate in degrees, `x = longitude`.
    #[must_use]
    pub const fn to_degrees(self) -> geo::Coord<f64> {
        geo::Coord {
            x: self.lon.to_degrees(),
            y: self.lat.to_degrees(),
        }
    }
}

/// An oblate ellipsoid given by its semi-axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in metres.
    pub a: f64,
    /// Semi-minor axis in metres.
    pub b: f64,
}

impl Ellipsoid {
    /// Airy 1830, used by OSGB36.
    pub const AIRY_1830: Self = Self {
        a: 6_377_563.396,
        b: 6_356_256.909,
    };

    /// Airy Modified, used by the Ireland 1975 datum.
    pub const AIRY_MODIFIED: Self = Self {
        a: 6_377_340.189,
        b: 6_356_034.448,
    };

    /// WGS84.
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        b: 6_356_752.314_245,
    };

    /// First eccentricity squared.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "eccentricity is defined by the semi-axes")]
    pub const fn e2(&self) -> f64 {
        1.0 - (self.b * self.b) / (self.a * self.a)
    }

    /// Second eccentricity squared.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "eccentricity is defined by the semi-axes")]
    pub const fn second_e2(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.b * self.b)
    }

    /// Third flattening, `(a - b) / (a + b)`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "flattening is defined by the semi-axes")]
    pub const fn n(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }

    /// Geocentric position of a point on the ellipsoid surface.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "geocentric conversion is closed-form float maths")]
    pub fn to_cartesian(&self, point: Geodetic) -> Cartesian {
        let (sin_lat, cos_lat) = point.lat.sin_cos();
        let (sin_lon, cos_lon) = point.lon.sin_cos();
        let e2 = self.e2();
        let nu = self.a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        Cartesian {
            x: nu * cos_lat * cos_lon,
            y: nu * cos_lat * sin_lon,
            z: nu * (1.0 - e2) * sin_lat,
        }
    }

    /// Geodetic position of a geocentric point (Bowring's method).
    ///
    /// Height above the ellipsoid is discarded.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "Bowring's method is closed-form float maths")]
    pub fn to_geodetic(&self, point: Cartesian) -> Geodetic {
        let Cartesian { x, y, z } = point;
        let e2 = self.e2();
        let eps2 = self.second_e2();
        let p = x.hypot(y);
        let r = p.hypot(z);
        let tan_beta = (self.b * z) / (self.a * p) * (1.0 + eps2 * self.b / r);
        let cos_beta = 1.0 / (1.0 + tan_beta * tan_beta).sqrt();
        let sin_beta = tan_beta * cos_beta;
        let lat = (z + eps2 * self.b * sin_beta.powi(3)).atan2(p - e2 * self.a * cos_beta.powi(3));
        Geodetic {
            lat,
            lon: y.atan2(x),
        }
    }
}
