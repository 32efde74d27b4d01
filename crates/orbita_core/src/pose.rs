//! The derived per-frame transform of an animated object

use crate::math::{lerp, Vec3};
use serde::{Deserialize, Serialize};

/// A snapshot of an object's transform at one instant.
///
/// Poses are derived fresh every frame from the current scroll progress and
/// clock; nothing retains them across frames. Rotations are radians, scale is
/// uniform.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation_y: f32,
    pub rotation_x: f32,
    pub scale: f32,
}

impl Pose {
    /// The resting transform: origin, no rotation, unit scale.
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation_y: 0.0,
        rotation_x: 0.0,
        scale: 1.0,
    };

    /// Interpolate every channel toward `other` by `t`.
    pub fn lerp(self, other: Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, t),
            rotation_y: lerp(self.rotation_y, other.rotation_y, t),
            rotation_x: lerp(self.rotation_x, other.rotation_x, t),
            scale: lerp(self.scale, other.scale, t),
        }
    }

    /// True when every channel is a finite number.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation_y.is_finite()
            && self.rotation_x.is_finite()
            && self.scale.is_finite()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_finite() {
        assert!(Pose::IDENTITY.is_finite());
    }

    #[test]
    fn lerp_covers_every_channel() {
        let a = Pose::IDENTITY;
        let b = Pose {
            position: Vec3::new(4.0, 2.0, 0.0),
            rotation_y: 1.0,
            rotation_x: -1.0,
            scale: 0.5,
        };
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.position, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(mid.rotation_y, 0.5);
        assert_eq!(mid.rotation_x, -0.5);
        assert_eq!(mid.scale, 0.75);
    }
}
