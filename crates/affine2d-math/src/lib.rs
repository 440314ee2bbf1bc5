//! # affine2d-math
//!
//! Linear-algebra primitives for 2D affine transforms.
//!
//! This crate provides the value types consumed by the `affine2d`
//! operations crate:
//!
//! - [`Vec2`] - 2D vectors for translation offsets and scale factors
//! - [`Mat3`] - 3x3 matrices holding a 2D affine transform in
//!   homogeneous coordinates
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **row vectors**.
//! Row 2 holds the translation component, rows 0 and 1 the linear
//! (scale/rotation) basis:
//!
//! ```text
//!               | m00 m01 0 |
//! [x  y  1]  *  | m10 m11 0 |  =  [x' y' 1]
//!               | m20 m21 1 |
//! ```
//!
//! Composition therefore reads left to right: `a * b` applies `a`
//! first, then `b`.
//!
//! # Usage
//!
//! ```rust
//! use affine2d_math::{Mat3, Vec2};
//!
//! let m = Mat3::from_rows([
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [3.0, 4.0, 1.0],
//! ]);
//!
//! let p = m.transform_point(Vec2::new(1.0, 2.0));
//! assert_eq!(p, Vec2::new(4.0, 6.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - conversions to/from `glam::Vec2` and `glam::Mat3`
//!
//! # Used By
//!
//! - `affine2d` - translate/scale/rotate operations over [`Mat3`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec2;

pub use mat3::*;
pub use vec2::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Vec2 as GlamVec2};
}
