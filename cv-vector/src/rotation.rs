//! Axis-aligned rotations of a [`Vector3D`].
//!
//! The names map to axes as follows:
//!
//! * yaw rotates about Z
//! * pitch rotates about Y
//! * roll rotates about X
//!
//! Note that roll is about X here, not Z as in the usual aviation convention.
//!
//! All angles are in radians and rotations are counter-clockwise when looking
//! down the positive axis towards the origin. After rotating, any component with
//! a magnitude below [`SNAP_EPSILON`] is set to exactly `0.0` so that rounding
//! noise (such as `cos(π/2) ≈ -4.4e-8`) does not accumulate through chained rotations.

use crate::Vector3D;
// Supplies `sqrt`, `sin_cos` and friends on `no_std`. Toolchains with inherent
// `f32` math in `core` resolve those instead and leave this import unused.
#[allow(unused_imports)]
use num_traits::Float;

/// Components with a magnitude below this are snapped to zero after a rotation.
///
/// The composite rotation in [`EulerAngles`](crate::EulerAngles) also uses it to
/// decide whether an axis rotation is applied at all.
pub const SNAP_EPSILON: f32 = 1e-7;

/// Replaces `value` with `0.0` if its magnitude is below [`SNAP_EPSILON`].
///
/// `NaN` is passed through unchanged.
#[inline(always)]
pub fn snap_to_zero(value: f32) -> f32 {
    if value.abs() < SNAP_EPSILON {
        0.0
    } else {
        value
    }
}

impl Vector3D {
    /// Snaps each component to zero independently. See [`snap_to_zero`].
    #[must_use]
    #[inline(always)]
    pub fn snapped(self) -> Self {
        Self::new(snap_to_zero(self.x), snap_to_zero(self.y), snap_to_zero(self.z))
    }

    /// Rotates about the Z axis by `theta` radians.
    ///
    /// ```text
    /// [ cos(t), -sin(t), 0 ] [ x ]
    /// [ sin(t),  cos(t), 0 ] [ y ]
    /// [ 0,       0,      1 ] [ z ]
    /// ```
    #[must_use]
    pub fn rotate_yaw(self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
        .snapped()
    }

    /// Rotates about the Y axis by `theta` radians.
    ///
    /// ```text
    /// [  cos(t), 0, sin(t) ] [ x ]
    /// [  0,      1, 0      ] [ y ]
    /// [ -sin(t), 0, cos(t) ] [ z ]
    /// ```
    #[must_use]
    pub fn rotate_pitch(self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            -self.x * sin + self.z * cos,
        )
        .snapped()
    }

    /// Rotates about the X axis by `theta` radians.
    ///
    /// ```text
    /// [ 1, 0,       0      ] [ x ]
    /// [ 0, cos(t), -sin(t) ] [ y ]
    /// [ 0, sin(t),  cos(t) ] [ z ]
    /// ```
    #[must_use]
    pub fn rotate_roll(self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
        .snapped()
    }
}
