//! Geometry on the unit sphere: geographic/Cartesian conversion and
//! axis-angle rotation matrices.

pub mod coords;
pub mod rotation;

pub use coords::{GeoPoint, angular_distance_deg, cartesian_to_spherical, spherical_to_cartesian};
pub use rotation::{RotationError, rotate, rotate_inverse, rotation_matrix};
