//! Per-frame pose derivation
//!
//! [`sample`] is the pure core: a deterministic function from (progress,
//! clock, viewport, base scale, handoff) to a [`Pose`], with no side
//! effects. [`Choreographer`] wraps it with the one piece of cross-frame
//! state the design needs: the yaw captured when the idle spin hands off to
//! the first progress-driven segment.

use crate::segment::{YawStart, YawTrack};
use crate::timeline::Timeline;
use orbita_core::{lerp, Pose, ViewportMetrics};
use tracing::{debug, trace};

/// Everything one frame's sample depends on.
#[derive(Clone, Copy, Debug)]
pub struct SampleInput {
    /// Global scroll progress. Clamped to `[0, 1]` before use.
    pub progress: f32,
    /// Seconds since the animated object mounted. Drives idle spin only.
    pub elapsed: f32,
    /// Current render-surface size, floored against degenerate dimensions.
    pub viewport: ViewportMetrics,
    /// Externally computed fit-to-viewport scale applied to every segment
    /// scale factor.
    pub base_scale: f32,
    /// Yaw recorded at the spin-to-sweep crossing, if one has happened.
    /// When `None`, the handoff start falls back to the clock and the
    /// preceding spin velocity, which is the same value at the crossing
    /// instant.
    pub spin_handoff: Option<f32>,
}

/// Derive the pose for one frame.
///
/// Pure and idempotent: the same input always yields the same pose, and
/// every output channel is finite for finite input.
pub fn sample(timeline: &Timeline, input: &SampleInput) -> Pose {
    let viewport = input.viewport.clamped();
    let (index, t) = timeline.locate(input.progress);
    let segment = &timeline.segments()[index];
    let eased = segment.easing.apply(t);

    let start = segment.start.position.resolve(viewport);
    let end = segment.end.position.resolve(viewport);
    let position = start.lerp(end, eased);

    let rotation_x = lerp(segment.start.pitch, segment.end.pitch, eased);
    let scale = input.base_scale * lerp(segment.start.scale, segment.end.scale, eased);

    let rotation_y = match segment.yaw {
        YawTrack::Spin { angular_velocity } => input.elapsed * angular_velocity,
        YawTrack::Sweep { from, to } => {
            let from = match from {
                YawStart::Fixed(angle) => angle,
                YawStart::SpinHandoff => input.spin_handoff.unwrap_or_else(|| {
                    let velocity = timeline.spin_velocity_before(index).unwrap_or(0.0);
                    input.elapsed * velocity
                }),
            };
            lerp(from, to, eased)
        }
    };

    Pose {
        position,
        rotation_y,
        rotation_x,
        scale,
    }
}

/// A timeline plus the spin-handoff state for one animated object.
///
/// Each object gets its own choreographer so its idle-spin phase is
/// independent of every other object's; there is no cross-object
/// coordination. Backward scrolling is symmetric: re-entering the spin
/// segment clears the recorded handoff so the next crossing samples a fresh
/// one.
#[derive(Clone, Debug)]
pub struct Choreographer {
    timeline: Timeline,
    base_scale: f32,
    spin_handoff: Option<f32>,
    last_index: Option<usize>,
}

impl Choreographer {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            base_scale: 1.0,
            spin_handoff: None,
            last_index: None,
        }
    }

    /// Builder: set the fit-to-viewport base scale computed at mount.
    pub fn with_base_scale(mut self, base_scale: f32) -> Self {
        self.base_scale = base_scale;
        self
    }

    pub fn set_base_scale(&mut self, base_scale: f32) {
        self.base_scale = base_scale;
    }

    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Derive this frame's pose, tracking segment crossings.
    ///
    /// The first frame observed outside the spin segment records the current
    /// spin yaw as the handoff start; the value then stays frozen until
    /// progress re-enters the spin segment.
    pub fn pose(&mut self, progress: f32, elapsed: f32, viewport: ViewportMetrics) -> Pose {
        let (index, _) = self.timeline.locate(progress);

        let in_spin = self.timeline.segments()[index].spin_velocity().is_some();
        if in_spin {
            if self.spin_handoff.take().is_some() {
                trace!(segment = index, "re-entered spin segment, handoff cleared");
            }
        } else if self.spin_handoff.is_none() {
            if let Some(velocity) = self.timeline.spin_velocity_before(index) {
                let yaw = elapsed * velocity;
                self.spin_handoff = Some(yaw);
                debug!(yaw, segment = index, "captured spin handoff yaw");
            }
        }

        if self.last_index != Some(index) {
            trace!(from = ?self.last_index, to = index, "segment crossing");
            self.last_index = Some(index);
        }

        sample(
            &self.timeline,
            &SampleInput {
                progress,
                elapsed,
                viewport,
                base_scale: self.base_scale,
                spin_handoff: self.spin_handoff,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::TimelinePreset;

    const VIEWPORT: ViewportMetrics = ViewportMetrics::new(10.0, 10.0);

    fn input(progress: f32, elapsed: f32) -> SampleInput {
        SampleInput {
            progress,
            elapsed,
            viewport: VIEWPORT,
            base_scale: 1.0,
            spin_handoff: None,
        }
    }

    #[test]
    fn sample_is_idempotent() {
        let tl = TimelinePreset::hero_logo();
        let i = input(0.42, 3.7);
        assert_eq!(sample(&tl, &i), sample(&tl, &i));
    }

    #[test]
    fn sample_output_is_finite_for_hostile_input() {
        let tl = TimelinePreset::hero_logo();
        let i = SampleInput {
            progress: f32::NAN,
            elapsed: 1.0e6,
            viewport: ViewportMetrics::new(0.0, -5.0),
            base_scale: 1.0,
            spin_handoff: None,
        };
        assert!(sample(&tl, &i).is_finite());
    }

    #[test]
    fn handoff_is_frozen_after_crossing() {
        let tl = TimelinePreset::hero_logo();
        let mut ch = Choreographer::new(tl.clone());

        // Spin until the crossing, then hold progress while time advances.
        ch.pose(0.1, 1.0, VIEWPORT);
        let at_crossing = ch.pose(0.4, 2.0, VIEWPORT);
        let later = ch.pose(0.4, 5.0, VIEWPORT);

        // With the handoff frozen, yaw no longer follows the clock.
        assert_eq!(at_crossing.rotation_y, later.rotation_y);

        // The stateless fallback would keep following the clock instead.
        let drifted = sample(&tl, &input(0.4, 5.0));
        assert_ne!(drifted.rotation_y, later.rotation_y);
    }

    #[test]
    fn scrolling_back_into_spin_clears_handoff() {
        let tl = TimelinePreset::hero_logo();
        let mut ch = Choreographer::new(tl);

        ch.pose(0.4, 2.0, VIEWPORT);
        let spin = ch.pose(0.1, 3.0, VIEWPORT);

        // Back in the spin segment, yaw is clock-driven again.
        assert_eq!(
            spin.rotation_y,
            3.0 * crate::presets::IDLE_SPIN_VELOCITY
        );

        // The next crossing samples a fresh handoff from the current clock,
        // and freezes it again.
        let recrossed = ch.pose(0.4, 6.0, VIEWPORT);
        let replay = ch.pose(0.4, 9.0, VIEWPORT);
        assert_eq!(recrossed.rotation_y, replay.rotation_y);
        // The recorded start reflects the later clock, not the first crossing.
        assert!(recrossed.rotation_y > 2.0 * crate::presets::IDLE_SPIN_VELOCITY);
    }

    #[test]
    fn base_scale_multiplies_segment_scale() {
        let tl = TimelinePreset::hero_logo();
        let mut ch = Choreographer::new(tl).with_base_scale(2.0);
        let pose = ch.pose(1.0, 0.0, VIEWPORT);
        assert!((pose.scale - 2.0 * 0.4).abs() < 1e-6);
    }
}
