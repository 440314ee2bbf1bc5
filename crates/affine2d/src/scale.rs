//! Scaling of 2D affine transforms.
//!
//! Scaling multiplies the basis vectors in rows 0 and 1 by the per-axis
//! factors. Row 2 (the translation) is never touched, so a placed
//! object scales around its own origin rather than the world origin.
//!
//! # Example
//!
//! ```rust
//! use affine2d::{scale, scale_make};
//! use affine2d_math::{Mat3, Vec2};
//!
//! let mut m = Mat3::IDENTITY;
//! scale_make(&mut m, Vec2::new(2.0, 3.0));
//! assert_eq!(m.row(0), [2.0, 0.0, 0.0]);
//! assert_eq!(m.row(1), [0.0, 3.0, 0.0]);
//! ```

use affine2d_math::{Mat3, Vec2};

/// Scales an existing 2D transform by `v`, in place.
///
/// Row 0 is multiplied by `v.x` and row 1 by `v.y`, all three columns.
/// Row 2 (the translation) is untouched.
///
/// # Example
///
/// ```rust
/// use affine2d::scale;
/// use affine2d_math::{Mat3, Vec2};
///
/// let mut m = Mat3::IDENTITY;
/// scale(&mut m, Vec2::new(2.0, 3.0));
/// assert_eq!(m.row(0), [2.0, 0.0, 0.0]);
/// assert_eq!(m.row(1), [0.0, 3.0, 0.0]);
/// ```
#[inline]
pub fn scale(m: &mut Mat3, v: Vec2) {
    m.m[0][0] *= v.x;
    m.m[0][1] *= v.x;
    m.m[0][2] *= v.x;

    m.m[1][0] *= v.y;
    m.m[1][1] *= v.y;
    m.m[1][2] *= v.y;
}

/// Scales an existing 2D transform by `v` into `dest`.
///
/// Rows 0 and 1 of `dest` receive the scaled basis, row 2 is copied
/// verbatim from `m`. `m` is unmodified.
#[inline]
pub fn scale_to(m: &Mat3, v: Vec2, dest: &mut Mat3) {
    dest.m[0][0] = m.m[0][0] * v.x;
    dest.m[0][1] = m.m[0][1] * v.x;
    dest.m[0][2] = m.m[0][2] * v.x;

    dest.m[1][0] = m.m[1][0] * v.y;
    dest.m[1][1] = m.m[1][1] * v.y;
    dest.m[1][2] = m.m[1][2] * v.y;

    dest.m[2][0] = m.m[2][0];
    dest.m[2][1] = m.m[2][1];
    dest.m[2][2] = m.m[2][2];
}

/// Scales an existing 2D transform uniformly by `s`, in place.
///
/// Bit-identical to `scale(m, Vec2::splat(s))`.
#[inline]
pub fn scale_uni(m: &mut Mat3, s: f32) {
    m.m[0][0] *= s;
    m.m[0][1] *= s;
    m.m[0][2] *= s;

    m.m[1][0] *= s;
    m.m[1][1] *= s;
    m.m[1][2] *= s;
}

/// Builds a fresh scale transform in `m`.
///
/// Any prior content of `m` is discarded: `m` becomes identity with
/// the diagonal set to `v.x`, `v.y`, 1.
///
/// # Example
///
/// ```rust
/// use affine2d::scale_make;
/// use affine2d_math::{Mat3, Vec2};
///
/// let mut m = Mat3::ZERO;
/// scale_make(&mut m, Vec2::new(2.0, 3.0));
/// assert_eq!(m, Mat3::diagonal(2.0, 3.0, 1.0));
/// ```
#[inline]
pub fn scale_make(m: &mut Mat3, v: Vec2) {
    *m = Mat3::IDENTITY;
    m.m[0][0] = v.x;
    m.m[1][1] = v.y;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_make_one_is_identity() {
        let mut m = Mat3::ZERO;
        scale_make(&mut m, Vec2::ONE);
        assert_eq!(m, Mat3::IDENTITY);
    }

    #[test]
    fn test_scale_leaves_translation_bit_identical() {
        let mut m = Mat3::from_rows([
            [1.0, 0.5, 0.0],
            [-0.5, 1.0, 0.0],
            [3.0, 4.0, 1.0],
        ]);
        let before = m;

        scale(&mut m, Vec2::new(2.0, 0.5));

        for j in 0..3 {
            assert_eq!(m.m[2][j].to_bits(), before.m[2][j].to_bits());
        }
        assert_eq!(m.row(0), [2.0, 1.0, 0.0]);
        assert_eq!(m.row(1), [-0.25, 0.5, 0.0]);
    }

    #[test]
    fn test_scale_to_matches_in_place() {
        let m = Mat3::from_rows([
            [1.0, 2.0, 0.0],
            [3.0, 4.0, 0.0],
            [5.0, 6.0, 1.0],
        ]);
        let v = Vec2::new(-2.0, 3.0);

        let mut dest = Mat3::ZERO;
        scale_to(&m, v, &mut dest);

        let mut copy = m;
        scale(&mut copy, v);
        assert_eq!(dest, copy);
        // Source untouched
        assert_eq!(m.row(0), [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_scale_uni_bit_identical_to_splat() {
        let base = Mat3::from_rows([
            [0.1, 0.2, 0.0],
            [0.3, 0.7, 0.0],
            [9.0, -9.0, 1.0],
        ]);
        for s in [0.0, 1.0, -3.5, 0.3333, f32::MAX] {
            let mut a = base;
            scale_uni(&mut a, s);
            let mut b = base;
            scale(&mut b, Vec2::splat(s));
            for i in 0..3 {
                for j in 0..3 {
                    assert_eq!(a.m[i][j].to_bits(), b.m[i][j].to_bits());
                }
            }
        }
    }

    #[test]
    fn test_scale_after_translate_make() {
        let mut m = Mat3::ZERO;
        crate::translate_make(&mut m, Vec2::new(3.0, 4.0));
        scale(&mut m, Vec2::splat(2.0));
        assert_eq!(m, Mat3::from_rows([
            [2.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [3.0, 4.0, 1.0],
        ]));
    }
}
