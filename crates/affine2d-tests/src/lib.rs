//! Integration tests for affine2d-rs crates.
//!
//! This crate holds end-to-end tests that drive the `affine2d`
//! operations through multi-step transform compositions and check the
//! cross-operation contracts: identity preservation, inverse
//! round-trips, in-place vs out-of-place equivalence, and row
//! isolation.

#[cfg(test)]
mod tests {
    use affine2d::{
        rotate, rotate_make, rotate_to, scale, scale_make, scale_to, scale_uni, translate,
        translate_make, translate_to, translate_x, translate_y,
    };
    use affine2d_math::{Mat3, Vec2};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(a: &Mat3, b: &Mat3) {
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(a.m[i][j], b.m[i][j], epsilon = EPS);
            }
        }
    }

    /// A representative non-trivial transform: scaled, rotated, placed.
    fn sample_transform() -> Mat3 {
        let mut m = Mat3::IDENTITY;
        rotate_make(&mut m, 0.4);
        scale(&mut m, Vec2::new(2.0, 0.5));
        translate(&mut m, Vec2::new(-3.0, 7.0));
        m
    }

    #[test]
    fn test_make_constructors_with_neutral_inputs_give_identity() {
        let mut m = Mat3::ZERO;
        translate_make(&mut m, Vec2::ZERO);
        assert_eq!(m, Mat3::IDENTITY);

        let mut m = Mat3::ZERO;
        scale_make(&mut m, Vec2::ONE);
        assert_eq!(m, Mat3::IDENTITY);

        let mut m = Mat3::IDENTITY;
        rotate_make(&mut m, 0.0);
        assert_eq!(m, Mat3::IDENTITY);
    }

    #[test]
    fn test_translate_inverse_roundtrip() {
        let orig = sample_transform();
        let v = Vec2::new(11.5, -0.25);

        let mut m = orig;
        translate(&mut m, v);
        translate(&mut m, -v);
        assert_mat_eq(&m, &orig);
    }

    #[test]
    fn test_rotate_inverse_roundtrip_keeps_translation() {
        let orig = sample_transform();
        let row2_before = orig.row(2);

        let mut m = orig;
        rotate(&mut m, 1.1);
        assert_eq!(m.row(2), row2_before);
        rotate(&mut m, -1.1);
        assert_eq!(m.row(2), row2_before);
        assert_mat_eq(&m, &orig);
    }

    #[test]
    fn test_out_of_place_variants_match_in_place() {
        let m = sample_transform();
        let v = Vec2::new(1.25, -2.0);
        let angle = 0.9;

        let mut dest = Mat3::ZERO;
        translate_to(&m, v, &mut dest);
        let mut copy = m;
        translate(&mut copy, v);
        assert_eq!(dest, copy);

        let mut dest = Mat3::ZERO;
        scale_to(&m, v, &mut dest);
        let mut copy = m;
        scale(&mut copy, v);
        assert_eq!(dest, copy);

        // rotate_to matches on the basis rows; its row 2 carries the
        // source's row 0 rather than the translation.
        let mut dest = Mat3::ZERO;
        rotate_to(&m, angle, &mut dest);
        let mut copy = m;
        rotate(&mut copy, angle);
        for i in 0..2 {
            for j in 0..3 {
                assert_relative_eq!(dest.m[i][j], copy.m[i][j], epsilon = EPS);
            }
        }
        assert_eq!(dest.row(2), m.row(0));
    }

    #[test]
    fn test_out_of_place_variants_leave_source_untouched() {
        let m = sample_transform();
        let before = m;
        let mut dest = Mat3::ZERO;

        translate_to(&m, Vec2::new(5.0, 5.0), &mut dest);
        scale_to(&m, Vec2::splat(3.0), &mut dest);
        rotate_to(&m, 2.0, &mut dest);

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.m[i][j].to_bits(), before.m[i][j].to_bits());
            }
        }
    }

    #[test]
    fn test_row_isolation() {
        // scale leaves row 2 bit-identical
        let mut m = sample_transform();
        let row2: Vec<u32> = m.row(2).iter().map(|x| x.to_bits()).collect();
        scale(&mut m, Vec2::new(0.7, -1.3));
        let row2_after: Vec<u32> = m.row(2).iter().map(|x| x.to_bits()).collect();
        assert_eq!(row2, row2_after);

        // translate leaves rows 0 and 1 bit-identical
        let mut m = sample_transform();
        let basis: Vec<u32> = m.row(0).iter().chain(m.row(1).iter()).map(|x| x.to_bits()).collect();
        translate(&mut m, Vec2::new(0.7, -1.3));
        translate_x(&mut m, 2.0);
        translate_y(&mut m, -3.0);
        let basis_after: Vec<u32> =
            m.row(0).iter().chain(m.row(1).iter()).map(|x| x.to_bits()).collect();
        assert_eq!(basis, basis_after);
    }

    /// Position, then scale, then spin: the standard per-frame object
    /// transform build-up.
    #[test]
    fn test_place_scale_spin_scenario() {
        let mut m = Mat3::ZERO;

        translate_make(&mut m, Vec2::new(3.0, 4.0));
        assert_eq!(
            m,
            Mat3::from_rows([
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [3.0, 4.0, 1.0],
            ])
        );

        scale(&mut m, Vec2::splat(2.0));
        assert_eq!(
            m,
            Mat3::from_rows([
                [2.0, 0.0, 0.0],
                [0.0, 2.0, 0.0],
                [3.0, 4.0, 1.0],
            ])
        );

        rotate(&mut m, FRAC_PI_2);
        let expected = Mat3::from_rows([
            [0.0, 2.0, 0.0],
            [-2.0, 0.0, 0.0],
            [3.0, 4.0, 1.0],
        ]);
        assert_mat_eq(&m, &expected);
    }

    #[test]
    fn test_scale_uni_bit_identical_to_splat() {
        let base = sample_transform();
        for s in [0.0, -1.0, 0.5, 123.456] {
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

    /// NaN inputs propagate through the arithmetic instead of being
    /// rejected.
    #[test]
    fn test_nan_propagates() {
        let mut m = sample_transform();
        translate(&mut m, Vec2::new(f32::NAN, 0.0));
        assert!(m.m[2][0].is_nan());
        // Rows 0 and 1 stay finite
        assert!(m.row(0).iter().all(|x| x.is_finite()));
        assert!(m.row(1).iter().all(|x| x.is_finite()));
    }

    /// Transform composition agrees with pointwise application.
    ///
    /// Each operation composes closest to the point: the transform
    /// built by `scale_make`, then `rotate`, then `translate` applies
    /// the translation first, the rotation second, and the scale last.
    #[test]
    fn test_composed_matrix_matches_pointwise_steps() {
        let mut m = Mat3::IDENTITY;
        scale_make(&mut m, Vec2::new(2.0, 3.0));
        rotate(&mut m, 0.6);
        translate(&mut m, Vec2::new(-1.0, 4.0));

        let p = Vec2::new(0.25, -1.5);
        let composed = m.transform_point(p);

        let (s, c) = 0.6f32.sin_cos();
        let moved = p + Vec2::new(-1.0, 4.0);
        let rotated = Vec2::new(moved.x * c - moved.y * s, moved.x * s + moved.y * c);
        let stepped = Vec2::new(rotated.x * 2.0, rotated.y * 3.0);

        assert_relative_eq!(composed.x, stepped.x, epsilon = EPS);
        assert_relative_eq!(composed.y, stepped.y, epsilon = EPS);
    }
}
