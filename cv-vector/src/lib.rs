//! # Rust CV Vector
//!
//! A small kernel for three-component `f32` vectors: the usual algebra (addition,
//! scaling, dot and cross products, normalization), reflection of a ray about a
//! surface normal, and axis-aligned rotations with a snap-to-zero cleanup step.
//!
//! The crate is designed to work with `#![no_std]`, even without an allocator. `libm` is used
//! (indirectly through [`num-traits`]) for the square roots and trigonometry that aren't
//! present in `core`.
//!
//! Nothing here performs I/O or returns errors. Degenerate inputs, such as normalizing a
//! zero vector or dividing by zero, follow IEEE floating point rules and produce `NaN`
//! or infinite components. It is up to the caller to check for them when it matters.
//!
//! ## Reflection
//!
//! Given an incoming direction `v` and a surface normal `n`, [`Vector3D::reflect`] computes
//! the outgoing direction `r = v - 2(v·n̂)n̂`, where `n̂` is `n` normalized:
//!
//! ```text
//!            n
//!            ^
//!     v      |      r
//!      \     |     ^
//!       \    |    /
//!        v   |   /
//!   ----------------- surface
//! ```
//!
//! ## Rotation
//!
//! Single-axis rotations are provided by [`Vector3D::rotate_yaw`] (Z), [`Vector3D::rotate_pitch`] (Y)
//! and [`Vector3D::rotate_roll`] (X). [`EulerAngles`] composes them in roll, pitch, yaw order.
//!
//! ```
//! use cv_vector::{EulerAngles, Vector3D};
//!
//! let heading = Vector3D::new(1.0, 0.0, 0.0);
//! let turned = heading.rotate_euler(EulerAngles::from_degrees(0.0, 0.0, 90.0));
//! assert_eq!(turned.x, 0.0);
//! assert!((turned.y - 1.0).abs() < 1e-6);
//! ```
//!
//! [`num-traits`]: num_traits

#![no_std]

mod euler;
pub mod rotation;
mod vector;

pub use approx;
pub use euler::*;
pub use rotation::{snap_to_zero, SNAP_EPSILON};
pub use vector::*;

#[cfg(feature = "nalgebra")]
pub use nalgebra;
