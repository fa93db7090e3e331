//! Small dense matrices for 2D/3D affine and perspective transforms
//!
//! Row-major storage, row-vector convention: `mul_vec2` computes
//! `[x, y, 1] * M`, so the rotation factories put `sin` in row 0 and
//! `-sin` in row 1 and still rotate counterclockwise.
//!
//! Fixed-size constructors are infallible; `try_from_rows` exists for
//! data arriving as nested slices and validates exact dimensions.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

use crate::error::Error;
use crate::vec::{Vec2, Vec3};

/// A 3×3 matrix for 2D homogeneous transforms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3 {
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };
    pub const ZERO: Self = Self { rows: [[0.0; 3]; 3] };

    #[inline]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Build from nested rows, validating that the input is exactly 3×3
    /// and finite
    pub fn try_from_rows(rows: &[Vec<f64>]) -> Result<Self, Error> {
        let mut out = [[0.0; 3]; 3];
        if rows.len() != 3 {
            return Err(Error::Shape(format!("expected 3 rows, got {}", rows.len())));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 3 {
                return Err(Error::Shape(format!(
                    "row {r} has {} columns, expected 3",
                    row.len()
                )));
            }
            for (c, &v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(Error::Shape(format!("element ({r}, {c}) is not finite")));
                }
                out[r][c] = v;
            }
        }
        Ok(Self::new(out))
    }

    /// 2D counterclockwise rotation about the origin
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Scalar multiplication
    pub fn scale(&self, s: f64) -> Self {
        let mut rows = self.rows;
        for row in &mut rows {
            for v in row {
                *v *= s;
            }
        }
        Self::new(rows)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Cofactor expansion along the first row
    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        let a = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]);
        let b = m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0]);
        let c = m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
        a - b + c
    }

    /// Transform a point: `[x, y, 1] * M`, dropping the homogeneous
    /// component (affine transforms keep it at 1)
    pub fn mul_vec2(&self, v: Vec2) -> Vec2 {
        let m = &self.rows;
        let h = [v.x, v.y, 1.0];
        let mut out = [0.0; 3];
        for (c, slot) in out.iter_mut().enumerate() {
            *slot = (0..3).map(|r| h[r] * m[r][c]).sum();
        }
        Vec2::new(out[0], out[1])
    }
}

impl Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut rows = self.rows;
        for r in 0..3 {
            for c in 0..3 {
                rows[r][c] += rhs.rows[r][c];
            }
        }
        Self::new(rows)
    }
}

impl Sub for Mat3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut rows = self.rows;
        for r in 0..3 {
            for c in 0..3 {
                rows[r][c] -= rhs.rows[r][c];
            }
        }
        Self::new(rows)
    }
}

impl Mul<f64> for Mat3 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}

/// A 4×4 matrix for 3D transforms and perspective projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub rows: [[f64; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
    pub const ZERO: Self = Self { rows: [[0.0; 4]; 4] };

    #[inline]
    pub const fn new(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Build from nested rows, validating that the input is exactly 4×4
    /// and finite
    pub fn try_from_rows(rows: &[Vec<f64>]) -> Result<Self, Error> {
        let mut out = [[0.0; 4]; 4];
        if rows.len() != 4 {
            return Err(Error::Shape(format!("expected 4 rows, got {}", rows.len())));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 4 {
                return Err(Error::Shape(format!(
                    "row {r} has {} columns, expected 4",
                    row.len()
                )));
            }
            for (c, &v) in row.iter().enumerate() {
                if !v.is_finite() {
                    return Err(Error::Shape(format!("element ({r}, {c}) is not finite")));
                }
                out[r][c] = v;
            }
        }
        Ok(Self::new(out))
    }

    /// Roll rotation (about the x axis)
    pub fn rotation_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, sin, 0.0],
            [0.0, -sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Yaw rotation (about the y axis)
    pub fn rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Pitch rotation (about the z axis)
    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([
            [cos, sin, 0.0, 0.0],
            [-sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Perspective projection. `fov_scale` is the field-of-view scale
    /// (cotangent of half the vertical FOV); `aspect` the width/height
    /// ratio of the target surface.
    pub fn perspective(aspect: f64, fov_scale: f64, z_near: f64, z_far: f64) -> Self {
        let q = z_far / (z_far - z_near);
        Self::new([
            [aspect * fov_scale, 0.0, 0.0, 0.0],
            [0.0, fov_scale, 0.0, 0.0],
            [0.0, 0.0, q, 1.0],
            [0.0, 0.0, -z_near * q, 0.0],
        ])
    }

    pub fn scale(&self, s: f64) -> Self {
        let mut rows = self.rows;
        for row in &mut rows {
            for v in row {
                *v *= s;
            }
        }
        Self::new(rows)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = m[c][r];
            }
        }
        Self::new(rows)
    }

    /// Laplace expansion along the first row
    pub fn determinant(&self) -> f64 {
        let mut det = 0.0;
        let mut sign = 1.0;
        for c in 0..4 {
            det += sign * self.rows[0][c] * self.minor(0, c);
            sign = -sign;
        }
        det
    }

    /// Determinant of the 3×3 submatrix left after deleting `row`/`col`
    fn minor(&self, row: usize, col: usize) -> f64 {
        let mut sub = [[0.0; 3]; 3];
        let mut sr = 0;
        for r in 0..4 {
            if r == row {
                continue;
            }
            let mut sc = 0;
            for c in 0..4 {
                if c == col {
                    continue;
                }
                sub[sr][sc] = self.rows[r][c];
                sc += 1;
            }
            sr += 1;
        }
        Mat3::new(sub).determinant()
    }

    /// Transform `[x, y, z, 1] * M`, then perform the perspective divide:
    /// x, y, z are divided by the resulting w when `w != 0`; w itself is
    /// returned untouched. This is the contract the projection-matrix use
    /// case relies on.
    pub fn mul_vec3(&self, v: Vec3) -> (Vec3, f64) {
        let m = &self.rows;
        let h = [v.x, v.y, v.z, 1.0];
        let mut out = [0.0; 4];
        for (c, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|r| h[r] * m[r][c]).sum();
        }
        let w = out[3];
        if w != 0.0 {
            out[0] /= w;
            out[1] /= w;
            out[2] /= w;
        }
        (Vec3::new(out[0], out[1], out[2]), w)
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut rows = self.rows;
        for r in 0..4 {
            for c in 0..4 {
                rows[r][c] += rhs.rows[r][c];
            }
        }
        Self::new(rows)
    }
}

impl Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut rows = self.rows;
        for r in 0..4 {
            for c in 0..4 {
                rows[r][c] -= rhs.rows[r][c];
            }
        }
        Self::new(rows)
    }
}

impl Mul<f64> for Mat4 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        self.scale(s)
    }
}
