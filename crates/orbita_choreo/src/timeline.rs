//! Validated segment timelines

use crate::error::TimelineError;
use crate::segment::Segment;
use smallvec::SmallVec;

/// Boundaries closer to zero than this are rejected outright.
const MIN_BOUNDARY: f32 = 1e-6;

/// An ordered list of segments covering `[0, 1]` of global progress.
///
/// Construction validates that boundaries ascend strictly and that the last
/// one is exactly 1.0, so the segments are contiguous and exhaustive and
/// their spans sum to 1.0 by construction. Timelines are built once when the
/// animated object mounts and are immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    segments: SmallVec<[Segment; 4]>,
}

impl Timeline {
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Result<Self, TimelineError> {
        let segments: SmallVec<[Segment; 4]> = segments.into_iter().collect();

        if segments.is_empty() {
            return Err(TimelineError::Empty);
        }

        let mut previous = 0.0_f32;
        for (index, segment) in segments.iter().enumerate() {
            let until = segment.until;
            if !until.is_finite() || until < MIN_BOUNDARY || until > 1.0 {
                return Err(TimelineError::BoundaryOutOfRange { index, until });
            }
            if until <= previous {
                return Err(TimelineError::BoundaryNotAscending {
                    index,
                    until,
                    previous,
                });
            }
            previous = until;
        }

        let last = segments.last().map(|s| s.until).unwrap_or(0.0);
        if last != 1.0 {
            return Err(TimelineError::Unterminated { last });
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Select the segment for a global progress value and re-normalize
    /// progress within it.
    ///
    /// Progress is clamped to `[0, 1]` first. A value exactly on a boundary
    /// belongs to the following segment; 1.0 lands on the final segment at
    /// local t exactly 1.0.
    pub fn locate(&self, progress: f32) -> (usize, f32) {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let last = self.segments.len() - 1;
        let mut start = 0.0_f32;
        for (index, segment) in self.segments.iter().enumerate() {
            if p < segment.until || index == last {
                let span = segment.until - start;
                let t = ((p - start) / span).clamp(0.0, 1.0);
                return (index, t);
            }
            start = segment.until;
        }
        unreachable!("timeline is never empty");
    }

    /// The idle-spin velocity in effect before `index`, scanning from the
    /// nearest earlier segment. Used to resolve a spin handoff when no
    /// crossing has been recorded yet.
    pub fn spin_velocity_before(&self, index: usize) -> Option<f32> {
        self.segments[..index]
            .iter()
            .rev()
            .find_map(Segment::spin_velocity)
    }
}
