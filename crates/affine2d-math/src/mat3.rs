//! 3x3 matrix type for 2D affine transforms.
//!
//! [`Mat3`] holds a 2D affine transform in homogeneous coordinates.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **row vectors**.
//! The upper-left 2x2 block is the linear basis (scale/rotation),
//! row 2 is the translation, and column 2 is the homogeneous padding:
//!
//! ```text
//!               | m00 m01 0 |
//! [x  y  1]  *  | m10 m11 0 |  =  [x' y' 1]
//!               | m20 m21 1 |
//! ```
//!
//! Under this convention `a * b` applies `a` first, then `b`.
//!
//! # Usage
//!
//! ```rust
//! use affine2d_math::{Mat3, Vec2};
//!
//! let m = Mat3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 2.0, 0.0],
//!     [3.0, 4.0, 1.0],
//! ]);
//!
//! assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(5.0, 6.0));
//! ```

use crate::Vec2;
use std::ops::{Index, IndexMut, Mul};

/// A 3x3 matrix holding a 2D affine transform.
///
/// Stored in row-major order with the translation in row 2. Use
/// [`Mat3::from_rows`] or [`Mat3::from_cols`] to construct from
/// component arrays.
///
/// # Example
///
/// ```rust
/// use affine2d_math::{Mat3, Vec2};
///
/// let identity = Mat3::IDENTITY;
/// let p = Vec2::new(1.0, 2.0);
/// assert_eq!(identity.transform_point(p), p);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        m: [[0.0; 3]; 3],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affine2d_math::Mat3;
    ///
    /// let m = Mat3::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, Mat3::IDENTITY);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([
            [d0, 0.0, 0.0],
            [0.0, d1, 0.0],
            [0.0, 0.0, d2],
        ])
    }

    /// Returns a row as an array.
    #[inline]
    pub const fn row(&self, i: usize) -> [f32; 3] {
        self.m[i]
    }

    /// Returns a column as an array.
    #[inline]
    pub const fn col(&self, i: usize) -> [f32; 3] {
        [self.m[0][i], self.m[1][i], self.m[2][i]]
    }

    /// Returns the translation component (row 2, columns 0 and 1).
    #[inline]
    pub const fn translation(&self) -> Vec2 {
        Vec2::new(self.m[2][0], self.m[2][1])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m[0][0], self.m[1][0], self.m[2][0]],
            [self.m[0][1], self.m[1][1], self.m[2][1]],
            [self.m[0][2], self.m[1][2], self.m[2][2]],
        ])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant is zero).
    ///
    /// # Example
    ///
    /// ```rust
    /// use affine2d_math::Mat3;
    ///
    /// let m = Mat3::diagonal(2.0, 2.0, 1.0);
    /// let inv = m.inverse().unwrap();
    /// let result = m * inv;
    /// // result is approximately identity
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }

        let m = &self.m;
        let inv_det = 1.0 / det;

        // Cofactor matrix, transposed and scaled by 1/det
        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Transforms a point, applying the translation row.
    ///
    /// Computes `[x y 1] * M` and drops the homogeneous component.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * self.m[0][0] + p.y * self.m[1][0] + self.m[2][0],
            p.x * self.m[0][1] + p.y * self.m[1][1] + self.m[2][1],
        )
    }

    /// Transforms a direction, ignoring the translation row.
    ///
    /// Computes `[x y 0] * M` and drops the homogeneous component.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            v.x * self.m[0][0] + v.y * self.m[1][0],
            v.x * self.m[0][1] + v.y * self.m[1][1],
        )
    }

    /// Multiplies two matrices.
    ///
    /// Under the row-vector convention, `a.mul_mat(&b)` applies `a`
    /// first, then `b`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m
            .iter()
            .flatten()
            .all(|x| x.is_finite())
    }

    /// Converts to glam Mat3 (column-major, column vectors).
    ///
    /// glam multiplies column vectors on the right, so the matrix is
    /// transposed on the way out; `to_glam(m) * p == m.transform_point(p)`.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&self.m)
    }

    /// Creates from glam Mat3, transposing back to row-vector form.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        let cols = m.to_cols_array_2d();
        Self::from_rows(cols)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat3 * f32
impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_rows([
            [self.m[0][0] * rhs, self.m[0][1] * rhs, self.m[0][2] * rhs],
            [self.m[1][0] * rhs, self.m[1][1] * rhs, self.m[1][2] * rhs],
            [self.m[2][0] * rhs, self.m[2][1] * rhs, self.m[2][2] * rhs],
        ])
    }
}

impl Index<usize> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 3] {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [f32; 3] {
        &mut self.m[i]
    }
}
