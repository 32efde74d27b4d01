//! Timeline segments and their pose keys

use crate::easing::Easing;
use orbita_core::{Vec3, ViewportMetrics};
use serde::{Deserialize, Serialize};

/// One position component of a pose key.
///
/// Offsets are either absolute object-space units or a fraction of a
/// viewport dimension, resolved against the current surface size each frame
/// so the choreography stays responsive to resizes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Offset {
    Units(f32),
    ViewportWidth(f32),
    ViewportHeight(f32),
}

impl Offset {
    pub const ZERO: Offset = Offset::Units(0.0);

    /// Resolve to object-space units against a (pre-clamped) viewport.
    pub fn resolve(self, viewport: ViewportMetrics) -> f32 {
        match self {
            Offset::Units(v) => v,
            Offset::ViewportWidth(f) => viewport.width * f,
            Offset::ViewportHeight(f) => viewport.height * f,
        }
    }
}

/// A 3-component position expressed as resolvable offsets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OffsetVec3 {
    pub x: Offset,
    pub y: Offset,
    pub z: Offset,
}

impl OffsetVec3 {
    pub const ZERO: OffsetVec3 = OffsetVec3 {
        x: Offset::ZERO,
        y: Offset::ZERO,
        z: Offset::ZERO,
    };

    pub fn resolve(self, viewport: ViewportMetrics) -> Vec3 {
        Vec3::new(
            self.x.resolve(viewport),
            self.y.resolve(viewport),
            self.z.resolve(viewport),
        )
    }
}

impl Default for OffsetVec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

/// The interpolated channels of a segment endpoint: position, pitch
/// (rotation-X, radians), and uniform scale factor.
///
/// Yaw lives on the segment's [`YawTrack`] instead, because segment 1 drives
/// it from the clock rather than from progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseKey {
    pub position: OffsetVec3,
    pub pitch: f32,
    pub scale: f32,
}

impl PoseKey {
    /// The resting key: origin, level, unit scale factor.
    pub const REST: PoseKey = PoseKey {
        position: OffsetVec3::ZERO,
        pitch: 0.0,
        scale: 1.0,
    };
}

impl Default for PoseKey {
    fn default() -> Self {
        Self::REST
    }
}

/// Where a progress-driven yaw sweep starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YawStart {
    /// A fixed angle in radians.
    Fixed(f32),
    /// The yaw the idle spin had at the moment progress left the spin
    /// segment. Resolved from the recorded handoff when available, otherwise
    /// from the clock and the preceding spin velocity, which keeps the
    /// boundary continuous either way.
    SpinHandoff,
}

/// How a segment produces yaw (rotation-Y, radians).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YawTrack {
    /// Time-driven idle spin: `yaw = elapsed * angular_velocity`,
    /// independent of progress.
    Spin { angular_velocity: f32 },
    /// Progress-driven sweep from a start angle to a target angle, eased
    /// like every other interpolated channel.
    Sweep { from: YawStart, to: f32 },
}

/// A contiguous sub-range of global progress with its own endpoint keys,
/// yaw track, and easing rule.
///
/// Segments are addressed by their exclusive upper boundary `until` rather
/// than by span, so boundaries compare exactly and spans sum to 1.0 by
/// construction. Progress exactly at a boundary belongs to the following
/// segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Upper boundary of this segment's progress range, in (0, 1]. The last
    /// segment's boundary must be exactly 1.0.
    pub until: f32,
    pub easing: Easing,
    pub start: PoseKey,
    pub end: PoseKey,
    pub yaw: YawTrack,
}

impl Segment {
    /// The spin velocity if this segment is an idle-spin segment.
    pub fn spin_velocity(&self) -> Option<f32> {
        match self.yaw {
            YawTrack::Spin { angular_velocity } => Some(angular_velocity),
            YawTrack::Sweep { .. } => None,
        }
    }
}
