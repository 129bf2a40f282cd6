//! Seven-parameter Helmert datum shifts.

use crate::ellipsoid::{Cartesian, Ellipsoid, Geodetic};

/// Small-angle Helmert transform between two geocentric frames.
///
/// Translations are in metres, scale in parts per million and rotations in
/// arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helmert {
    /// X translation.
    pub tx: f64,
    /// Y translation.
    pub ty: f64,
    /// Z translation.
    pub tz: f64,
    /// Scale change in ppm.
    pub s_ppm: f64,
    /// Rotation about X in arc-seconds.
    pub rx: f64,
    /// Rotation about Y in arc-seconds.
    pub ry: f64,
    /// Rotation about Z in arc-seconds.
    pub rz: f64,
}

impl Helmert {
    /// OSGB36 to WGS84.
    pub const OSGB36_TO_WGS84: Self = Self {
        tx: 446.448,
        ty: -125.157,
        tz: 542.060,
        s_ppm: -20.4894,
        rx: 0.1502,
        ry: 0.2470,
        rz: 0.8421,
    };

    /// Ireland 1975 to WGS84.
    pub const IRL1975_TO_WGS84: Self = Self {
        tx: 482.530,
        ty: -130.596,
        tz: 564.557,
        s_ppm: 8.150,
        rx: -1.042,
        ry: -0.214,
        rz: -0.631,
    };

    /// The reverse transform.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "inverting a small-angle shift negates every parameter"
    )]
    pub const fn inverse(&self) -> Self {
        Self {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            s_ppm: -self.s_ppm,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
        }
    }

    /// Apply the transform to a geocentric point.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "the shift is a scaled rotation plus translation")]
    pub const fn apply(&self, point: Cartesian) -> Cartesian {
        let scale = 1.0 + self.s_ppm / 1e6;
        let rx = arc_seconds_to_radians(self.rx);
        let ry = arc_seconds_to_radians(self.ry);
        let rz = arc_seconds_to_radians(self.rz);
        let Cartesian { x, y, z } = point;
        Cartesian {
            x: self.tx + x * scale - y * rz + z * ry,
            y: self.ty + x * rz + y * scale - z * rx,
            z: self.tz - x * ry + y * rx + z * scale,
        }
    }
}

#[expect(clippy::float_arithmetic, reason = "unit conversion")]
const fn arc_seconds_to_radians(seconds: f64) -> f64 {
    (seconds / 3600.0).to_radians()
}

/// A geodetic datum: an ellipsoid plus its shift to WGS84.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    /// Ellipsoid the datum's coordinates are expressed on.
    pub ellipsoid: Ellipsoid,
    /// Shift to WGS84, or `None` when the datum is WGS84.
    pub to_wgs84: Option<Helmert>,
}

impl Datum {
    /// OSGB36 on Airy 1830.
    pub const OSGB36: Self = Self {
        ellipsoid: Ellipsoid::AIRY_1830,
        to_wgs84: Some(Helmert::OSGB36_TO_WGS84),
    };

    /// Ireland 1975 on Airy Modified.
    pub const IRL1975: Self = Self {
        ellipsoid: Ellipsoid::AIRY_MODIFIED,
        to_wgs84: Some(Helmert::IRL1975_TO_WGS84),
    };

    /// WGS84 itself.
    pub const WGS84: Self = Self {
        ellipsoid: Ellipsoid::WGS84,
        to_wgs84: None,
    };

    /// Re-express `point` from this datum on WGS84.
    #[must_use]
    pub fn convert_to_wgs84(&self, point: Geodetic) -> Geodetic {
        let Some(shift) = self.to_wgs84 else {
            return point;
        };
        let cartesian = shift.apply(self.ellipsoid.to_cartesian(point));
        Ellipsoid::WGS84.to_geodetic(cartesian)
    }
}
