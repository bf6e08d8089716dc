use crate::{Vector3D, SNAP_EPSILON};
use log::trace;
// Supplies `sqrt`, `sin_cos` and friends on `no_std`. Toolchains with inherent
// `f32` math in `core` resolve those instead and leave this import unused.
#[allow(unused_imports)]
use num_traits::Float;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A general orientation change expressed as three single-axis rotations, in radians.
///
/// Applying it rotates by roll (X), then pitch (Y), then yaw (Z). An axis whose angle
/// magnitude does not exceed [`SNAP_EPSILON`] is skipped entirely rather than being
/// applied as a near-identity rotation. Each applied rotation snaps its own output
/// as described in [`crate::rotation`].
///
/// If you need a different composition order, chain [`Vector3D::rotate_roll`],
/// [`Vector3D::rotate_pitch`] and [`Vector3D::rotate_yaw`] yourself.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EulerAngles {
    /// Rotation about X.
    pub roll: f32,
    /// Rotation about Y.
    pub pitch: f32,
    /// Rotation about Z.
    pub yaw: f32,
}

impl EulerAngles {
    pub const fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Converts angles given in degrees.
    pub fn from_degrees(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::new(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
    }

    /// Rotates `v` by roll, then pitch, then yaw.
    #[must_use]
    pub fn rotate(self, v: Vector3D) -> Vector3D {
        let mut rotated = v;
        if self.roll.abs() > SNAP_EPSILON {
            rotated = rotated.rotate_roll(self.roll);
        } else {
            trace!("skipping roll of {} rad", self.roll);
        }
        if self.pitch.abs() > SNAP_EPSILON {
            rotated = rotated.rotate_pitch(self.pitch);
        } else {
            trace!("skipping pitch of {} rad", self.pitch);
        }
        if self.yaw.abs() > SNAP_EPSILON {
            rotated = rotated.rotate_yaw(self.yaw);
        } else {
            trace!("skipping yaw of {} rad", self.yaw);
        }
        rotated
    }
}

/// Angles are read as `(roll, pitch, yaw)` from `(x, y, z)`.
impl From<Vector3D> for EulerAngles {
    fn from(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Vector3D {
    /// See [`EulerAngles::rotate`].
    #[must_use]
    #[inline]
    pub fn rotate_euler(self, angles: EulerAngles) -> Self {
        angles.rotate(self)
    }
}
