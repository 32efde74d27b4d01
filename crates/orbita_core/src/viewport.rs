//! Render-surface dimensions

use serde::{Deserialize, Serialize};

/// Smallest extent a viewport dimension is allowed to resolve against.
///
/// Zero or negative surface sizes show up transiently during window setup;
/// flooring them keeps viewport-relative offsets finite.
pub const MIN_VIEWPORT_EXTENT: f32 = 1.0;

/// Width and height of the rendering surface, in the same units the
/// choreography uses for position offsets.
///
/// Owned by the rendering surface; the choreography engine only reads it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
}

impl ViewportMetrics {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions floored at [`MIN_VIEWPORT_EXTENT`].
    ///
    /// NaN dimensions also collapse to the floor, since `max` on a NaN
    /// operand returns the other operand.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_VIEWPORT_EXTENT),
            height: self.height.max(MIN_VIEWPORT_EXTENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_floors_degenerate_dimensions() {
        let v = ViewportMetrics::new(0.0, -200.0).clamped();
        assert_eq!(v.width, MIN_VIEWPORT_EXTENT);
        assert_eq!(v.height, MIN_VIEWPORT_EXTENT);
    }

    #[test]
    fn clamped_leaves_sane_dimensions_alone() {
        let v = ViewportMetrics::new(1280.0, 720.0).clamped();
        assert_eq!(v.width, 1280.0);
        assert_eq!(v.height, 720.0);
    }

    #[test]
    fn clamped_collapses_nan() {
        let v = ViewportMetrics::new(f32::NAN, 720.0).clamped();
        assert_eq!(v.width, MIN_VIEWPORT_EXTENT);
        assert_eq!(v.height, 720.0);
    }
}
