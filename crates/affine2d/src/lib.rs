//! # affine2d
//!
//! 2D affine transform operations over 3x3 homogeneous matrices.
//!
//! This crate provides translation, scaling, and rotation of
//! [`Mat3`] transforms, each in three shapes:
//!
//! - an **in-place** mutation (`translate`, `scale`, `rotate`),
//! - an **explicit-destination** variant leaving the source untouched
//!   (`translate_to`, `scale_to`, `rotate_to`),
//! - a **make** constructor that builds a fresh transform
//!   (`translate_make`, `scale_make`, `rotate_make`).
//!
//! All operations are allocation-free, total, and run in constant time.
//! They are intended for per-frame transform composition in real-time
//! graphics and game code.
//!
//! # Convention
//!
//! Matrices are row-major with row vectors: row 2 holds the
//! translation, rows 0 and 1 the linear basis (see [`Mat3`]). Angles
//! are radians.
//!
//! # Example
//!
//! ```rust
//! use affine2d::{translate_make, scale, rotate};
//! use affine2d_math::{Mat3, Vec2};
//!
//! let mut m = Mat3::IDENTITY;
//! translate_make(&mut m, Vec2::new(3.0, 4.0));
//! scale(&mut m, Vec2::splat(2.0));
//! rotate(&mut m, std::f32::consts::FRAC_PI_2);
//!
//! // Translation survives scale and rotate untouched
//! assert_eq!(m.translation(), Vec2::new(3.0, 4.0));
//! ```
//!
//! # Operations
//!
//! - `translate` family - offset the transform along its local axes
//! - `scale` family - scale the linear basis
//! - `rotate` family - rotate the linear basis
//!
//! # Thread safety
//!
//! There is no shared state; every call is a pure function of its
//! arguments. Concurrent use is safe whenever the borrows themselves
//! are, which the borrow checker enforces.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod rotate;
mod scale;
mod translate;

pub use rotate::*;
pub use scale::*;
pub use translate::*;

pub use affine2d_math::{Mat3, Vec2};
