//! Translation of 2D affine transforms.
//!
//! The offset is expressed in the transform's local axes: the new
//! translation row is `row0 * v.x + row1 * v.y + row2`, so a rotated
//! transform translates along its rotated basis vectors. Only row 2 of
//! the matrix changes; the linear basis in rows 0 and 1 is left
//! bit-identical.
//!
//! # Example
//!
//! ```rust
//! use affine2d::{translate, translate_make};
//! use affine2d_math::{Mat3, Vec2};
//!
//! let mut m = Mat3::IDENTITY;
//! translate_make(&mut m, Vec2::new(3.0, 4.0));
//! assert_eq!(m.translation(), Vec2::new(3.0, 4.0));
//!
//! translate(&mut m, Vec2::new(1.0, 0.0));
//! assert_eq!(m.translation(), Vec2::new(4.0, 4.0));
//! ```

use affine2d_math::{Mat3, Vec2};

/// Translates an existing 2D transform by `v`, in place.
///
/// The new translation row is `row0 * v.x + row1 * v.y + row2`, so the
/// offset is measured along `m`'s basis vectors. Rows 0 and 1 are
/// untouched.
///
/// # Example
///
/// ```rust
/// use affine2d::translate;
/// use affine2d_math::{Mat3, Vec2};
///
/// let mut m = Mat3::IDENTITY;
/// translate(&mut m, Vec2::new(3.0, 4.0));
/// assert_eq!(m.translation(), Vec2::new(3.0, 4.0));
/// ```
#[inline]
pub fn translate(m: &mut Mat3, v: Vec2) {
    m.m[2][0] = m.m[0][0] * v.x + m.m[1][0] * v.y + m.m[2][0];
    m.m[2][1] = m.m[0][1] * v.x + m.m[1][1] * v.y + m.m[2][1];
    m.m[2][2] = m.m[0][2] * v.x + m.m[1][2] * v.y + m.m[2][2];
}

/// Translates an existing 2D transform by `v` into `dest`.
///
/// `m` is unmodified. The borrow checker keeps `dest` disjoint from
/// `m`, so the aliasing hazard of the in-place variants cannot arise.
#[inline]
pub fn translate_to(m: &Mat3, v: Vec2, dest: &mut Mat3) {
    *dest = *m;
    translate(dest, v);
}

/// Translates an existing 2D transform along X only, in place.
///
/// Equivalent to `translate(m, Vec2::new(x, 0.0))` without the
/// multiply-by-zero work.
#[inline]
pub fn translate_x(m: &mut Mat3, x: f32) {
    m.m[2][0] = m.m[0][0] * x + m.m[2][0];
    m.m[2][1] = m.m[0][1] * x + m.m[2][1];
    m.m[2][2] = m.m[0][2] * x + m.m[2][2];
}

/// Translates an existing 2D transform along Y only, in place.
///
/// Equivalent to `translate(m, Vec2::new(0.0, y))` without the
/// multiply-by-zero work.
#[inline]
pub fn translate_y(m: &mut Mat3, y: f32) {
    m.m[2][0] = m.m[1][0] * y + m.m[2][0];
    m.m[2][1] = m.m[1][1] * y + m.m[2][1];
    m.m[2][2] = m.m[1][2] * y + m.m[2][2];
}

/// Builds a fresh translation transform in `m`.
///
/// Any prior content of `m` is discarded: `m` becomes identity with
/// row 2 set to `[v.x, v.y, 1]`.
///
/// # Example
///
/// ```rust
/// use affine2d::translate_make;
/// use affine2d_math::{Mat3, Vec2};
///
/// let mut m = Mat3::ZERO;
/// translate_make(&mut m, Vec2::new(3.0, 4.0));
/// assert_eq!(m, Mat3::from_rows([
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
///     [3.0, 4.0, 1.0],
/// ]));
/// ```
#[inline]
pub fn translate_make(m: &mut Mat3, v: Vec2) {
    *m = Mat3::IDENTITY;
    m.m[2][0] = v.x;
    m.m[2][1] = v.y;
}
