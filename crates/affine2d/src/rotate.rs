//! Rotation of 2D affine transforms.
//!
//! Rotating turns the basis vectors in rows 0 and 1 counter-clockwise
//! by an angle in radians. The in-place variant leaves the translation
//! row untouched, so a placed object spins around its own origin.
//!
//! Every function here stages the pre-call rows 0 and 1 into locals
//! before writing: the new row 1 depends on the *original* row 0, and
//! writing row 0 first without a staging copy would corrupt it.
//!
//! # Example
//!
//! ```rust
//! use affine2d::rotate_make;
//! use affine2d_math::{Mat3, Vec2};
//!
//! let mut m = Mat3::IDENTITY;
//! rotate_make(&mut m, std::f32::consts::FRAC_PI_2);
//!
//! let p = m.transform_point(Vec2::X);
//! assert!((p.x - 0.0).abs() < 1e-6);
//! assert!((p.y - 1.0).abs() < 1e-6);
//! ```

use affine2d_math::Mat3;

/// Builds a rotation transform in `m` from its current basis.
///
/// Rotates `m`'s rows 0 and 1 by `angle` radians (counter-clockwise)
/// and forces row 2 to `[0, 0, 1]`, so the result is a pure linear
/// transform. Called on [`Mat3::IDENTITY`] this yields the plain
/// rotation matrix; called on anything else it rotates the existing
/// basis.
///
/// # Example
///
/// ```rust
/// use affine2d::rotate_make;
/// use affine2d_math::Mat3;
///
/// let mut m = Mat3::IDENTITY;
/// rotate_make(&mut m, 0.0);
/// assert_eq!(m, Mat3::IDENTITY);
/// ```
#[inline]
pub fn rotate_make(m: &mut Mat3, angle: f32) {
    let (s, c) = angle.sin_cos();

    let [m00, m01, m02] = m.m[0];
    let [m10, m11, m12] = m.m[1];

    m.m[0] = [m00 * c + m10 * s, m01 * c + m11 * s, m02 * c + m12 * s];
    m.m[1] = [m00 * -s + m10 * c, m01 * -s + m11 * c, m02 * -s + m12 * c];
    m.m[2] = [0.0, 0.0, 1.0];
}

/// Rotates an existing 2D transform by `angle` radians, in place.
///
/// Rows 0 and 1 are rotated counter-clockwise; row 2 (the translation)
/// is untouched. `rotate(m, a)` followed by `rotate(m, -a)` restores
/// the basis within floating-point tolerance.
#[inline]
pub fn rotate(m: &mut Mat3, angle: f32) {
    let (s, c) = angle.sin_cos();

    let [m00, m01, m02] = m.m[0];
    let [m10, m11, m12] = m.m[1];

    m.m[0] = [m00 * c + m10 * s, m01 * c + m11 * s, m02 * c + m12 * s];
    m.m[1] = [m00 * -s + m10 * c, m01 * -s + m11 * c, m02 * -s + m12 * c];
}

/// Rotates an existing 2D transform by `angle` radians into `dest`.
///
/// Rows 0 and 1 of `dest` receive the rotated basis; `m` is
/// unmodified.
///
/// Note: unlike [`translate_to`](crate::translate_to) and
/// [`scale_to`](crate::scale_to), row 2 of `dest` is not copied from
/// `m`'s row 2 — it is written from `m`'s original row 0. This is a
/// long-standing compatibility contract. Callers that want the
/// translation carried over should copy `m` and call [`rotate`] on the
/// copy instead.
#[inline]
pub fn rotate_to(m: &Mat3, angle: f32, dest: &mut Mat3) {
    let (s, c) = angle.sin_cos();

    let [m00, m01, m02] = m.m[0];
    let [m10, m11, m12] = m.m[1];

    dest.m[0] = [m00 * c + m10 * s, m01 * c + m11 * s, m02 * c + m12 * s];
    dest.m[1] = [m00 * -s + m10 * c, m01 * -s + m11 * c, m02 * -s + m12 * c];
    dest.m[2] = [m00, m01, m02];
}
