//! Axis-angle rotation matrices (Rodrigues' formula).

use apw_core::matrix::{self, IDENTITY, Matrix3};
use apw_core::vector::{self, Vector3};
use thiserror::Error;

/// Errors surfaced while building a rotation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RotationError {
    #[error("rotation axis must have non-zero finite length (norm = {norm})")]
    InvalidAxis { norm: f64 },
}

/// Build the matrix rotating vectors by `angle_rad` about `axis` (right-hand rule).
///
/// The axis is normalised internally, so any non-zero length is accepted.
/// The result is orthogonal: its transpose is the inverse rotation.
pub fn rotation_matrix(axis: &Vector3, angle_rad: f64) -> Result<Matrix3, RotationError> {
    let norm = vector::norm(axis);
    if !norm.is_finite() || norm == 0.0 {
        return Err(RotationError::InvalidAxis { norm });
    }
    let k = vector::scale(axis, 1.0 / norm);
    let c = angle_rad.cos();
    let s = angle_rad.sin();
    let one_minus_c = 1.0 - c;

    // R = c·I + s·[k]ₓ + (1 - c)·k kᵀ
    let cross = [
        [0.0, -k[2], k[1]],
        [k[2], 0.0, -k[0]],
        [-k[1], k[0], 0.0],
    ];
    let outer = matrix::outer(&k, &k);
    let mut r = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            r[i][j] = c * IDENTITY[i][j] + s * cross[i][j] + one_minus_c * outer[i][j];
        }
    }
    Ok(r)
}

/// Apply a rotation to a vector.
#[inline]
pub fn rotate(rotation: &Matrix3, v: &Vector3) -> Vector3 {
    matrix::mul_vec(rotation, v)
}

/// Apply the inverse of an orthogonal rotation (its transpose) to a vector.
#[inline]
pub fn rotate_inverse(rotation: &Matrix3, v: &Vector3) -> Vector3 {
    matrix::mul_vec(&matrix::transpose(rotation), v)
}
