//! Core units, constants, and shared primitives for the polar wander workspace.

/// Geometric constants shared across crates.
pub mod constants {
    use super::vector::Vector3;

    /// Present-day spin axis; the geomagnetic pole is assumed to sit on it.
    pub const SPIN_AXIS: Vector3 = [0.0, 0.0, 1.0];
}

/// Angle conversion helpers.
pub mod units {
    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v.to_degrees()
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D Cartesian vector (dimensionless on the unit sphere).
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Cross product of two vectors.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
        norm(&sub(a, b))
    }
}

/// Row-major 3x3 matrices acting on column vectors.
pub mod matrix {
    use super::vector::{Vector3, dot};

    pub type Matrix3 = [[f64; 3]; 3];

    pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    /// Matrix-vector product `m * v`.
    #[inline]
    pub fn mul_vec(m: &Matrix3, v: &Vector3) -> Vector3 {
        [dot(&m[0], v), dot(&m[1], v), dot(&m[2], v)]
    }

    /// Transpose of `m`.
    #[inline]
    pub fn transpose(m: &Matrix3) -> Matrix3 {
        [
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ]
    }

    /// Matrix product `a * b`.
    pub fn mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        out
    }

    /// Outer product `a * bᵀ`.
    #[inline]
    pub fn outer(a: &Vector3, b: &Vector3) -> Matrix3 {
        [
            [a[0] * b[0], a[0] * b[1], a[0] * b[2]],
            [a[1] * b[0], a[1] * b[1], a[1] * b[2]],
            [a[2] * b[0], a[2] * b[1], a[2] * b[2]],
        ]
    }

    /// Largest absolute element-wise difference between two matrices.
    pub fn max_abs_diff(a: &Matrix3, b: &Matrix3) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..3 {
            for j in 0..3 {
                max = max.max((a[i][j] - b[i][j]).abs());
            }
        }
        max
    }
}
