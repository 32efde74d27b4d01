//! Built-in choreography presets

use crate::easing::Easing;
use crate::segment::{Offset, OffsetVec3, PoseKey, Segment, YawStart, YawTrack};
use crate::timeline::Timeline;
use std::f32::consts::{FRAC_PI_2, PI};

/// Idle spin rate of the hero logo, radians per second.
pub const IDLE_SPIN_VELOCITY: f32 = 0.5;

/// Pre-built timelines for common choreography patterns.
pub struct TimelinePreset;

impl TimelinePreset {
    /// The landing-page hero logo choreography.
    ///
    /// Three segments over global progress:
    ///
    /// 1. `[0, 0.33)` — idle spin at the origin, unit scale factor.
    /// 2. `[0.33, 0.66)` — glide right to 30% of viewport width, yaw sweeps
    ///    from the spin handoff to 90°, scale factor eases down to 0.6.
    /// 3. `[0.66, 1.0]` — drift to the lower-left target, yaw on to 135°,
    ///    pitch tips to −27°, scale factor settles at 0.4.
    ///
    /// The third span is 0.34 rather than 0.33; the tuned boundaries are
    /// kept as-is. Segment 3 starts exactly where segment 2 ends on every
    /// interpolated channel.
    pub fn hero_logo() -> Timeline {
        let rest = PoseKey::REST;

        let glide_target = PoseKey {
            position: OffsetVec3 {
                x: Offset::ViewportWidth(0.3),
                y: Offset::ZERO,
                z: Offset::ZERO,
            },
            pitch: 0.0,
            scale: 0.6,
        };

        let settle_target = PoseKey {
            position: OffsetVec3 {
                x: Offset::ViewportWidth(-0.3),
                y: Offset::ViewportHeight(0.15),
                z: Offset::ZERO,
            },
            pitch: -PI * 0.15,
            scale: 0.4,
        };

        let segments = [
            Segment {
                until: 0.33,
                easing: Easing::Linear,
                start: rest,
                end: rest,
                yaw: YawTrack::Spin {
                    angular_velocity: IDLE_SPIN_VELOCITY,
                },
            },
            Segment {
                until: 0.66,
                easing: Easing::EaseInOutQuad,
                start: rest,
                end: glide_target,
                yaw: YawTrack::Sweep {
                    from: YawStart::SpinHandoff,
                    to: FRAC_PI_2,
                },
            },
            Segment {
                until: 1.0,
                easing: Easing::EaseInOutQuad,
                start: glide_target,
                end: settle_target,
                yaw: YawTrack::Sweep {
                    from: YawStart::Fixed(FRAC_PI_2),
                    to: PI * 0.75,
                },
            },
        ];

        Timeline::new(segments).expect("hero preset boundaries are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_logo_has_three_contiguous_segments() {
        let tl = TimelinePreset::hero_logo();
        let boundaries: Vec<f32> = tl.segments().iter().map(|s| s.until).collect();
        assert_eq!(boundaries, vec![0.33, 0.66, 1.0]);
    }

    #[test]
    fn hero_logo_segments_share_boundary_keys() {
        let tl = TimelinePreset::hero_logo();
        let segments = tl.segments();
        assert_eq!(segments[0].end, segments[1].start);
        assert_eq!(segments[1].end, segments[2].start);
    }

    #[test]
    fn hero_logo_scale_steps_down() {
        let tl = TimelinePreset::hero_logo();
        let scales: Vec<f32> = tl.segments().iter().map(|s| s.end.scale).collect();
        assert_eq!(scales, vec![1.0, 0.6, 0.4]);
    }
}
