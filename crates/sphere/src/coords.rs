//! Conversion between geographic coordinates (degrees) and unit vectors.
//!
//! The frame is Earth-centred: `x` points at (0°, 0°), `y` at (0°, 90°E) and
//! `z` at the north pole.

use apw_core::units::{deg_to_rad, rad_to_deg};
use apw_core::vector::{self, Vector3};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPoint {
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Unit vector pointing at this location.
    pub fn to_unit_vector(&self) -> Vector3 {
        spherical_to_cartesian(self.lat_deg, self.lon_deg)
    }

    /// Location a (nominally unit) vector points at.
    pub fn from_unit_vector(v: &Vector3) -> Self {
        let (lat_deg, lon_deg) = cartesian_to_spherical(v);
        Self { lat_deg, lon_deg }
    }

    pub fn is_finite(&self) -> bool {
        self.lat_deg.is_finite() && self.lon_deg.is_finite()
    }
}

/// Convert latitude/longitude in degrees to a Cartesian unit vector.
///
/// Any finite input is accepted. Longitudes outside [-180, 180] wrap through
/// the trigonometry; latitudes outside [-90, 90] give a valid unit vector
/// that no longer matches the nominal latitude.
pub fn spherical_to_cartesian(lat_deg: f64, lon_deg: f64) -> Vector3 {
    let lat = deg_to_rad(lat_deg);
    let lon = deg_to_rad(lon_deg);
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

/// Convert a Cartesian vector to `(lat_deg, lon_deg)`.
///
/// `z` is clamped to [-1, 1] before `asin` so that rounding past unit length
/// cannot produce NaN. Longitude lies in (-180, 180]; at the poles it is
/// whatever `atan2(0, 0)` gives, i.e. 0 (or ±180 for signed zeros).
pub fn cartesian_to_spherical(v: &Vector3) -> (f64, f64) {
    let [x, y, z] = *v;
    let lat = rad_to_deg(z.clamp(-1.0, 1.0).asin());
    let lon = rad_to_deg(y.atan2(x));
    (lat, lon)
}

/// Great-circle separation between two locations, in degrees.
pub fn angular_distance_deg(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let va = a.to_unit_vector();
    let vb = b.to_unit_vector();
    // atan2(|a×b|, a·b) stays accurate for nearly coincident points.
    let s = vector::norm(&vector::cross(&va, &vb));
    let c = vector::dot(&va, &vb).clamp(-1.0, 1.0);
    rad_to_deg(s.atan2(c))
}
