//! Choreography config file handling
//!
//! Timelines are data: a `choreography.toml` declares the segment list and
//! is validated into a [`Timeline`] at load time. Example:
//!
//! ```toml
//! [[segment]]
//! until = 0.33
//! easing = "linear"
//! yaw = { spin = { angular-velocity = 0.5 } }
//!
//! [[segment]]
//! until = 0.66
//! easing = "ease-in-out-quad"
//! end = { x = { viewport-width = 0.3 }, scale = 0.6 }
//!
//! [segment.yaw.sweep]
//! from = "spin-handoff"
//! to = 1.5707964
//!
//! [[segment]]
//! until = 1.0
//! easing = "ease-in-out-quad"
//! start = { x = { viewport-width = 0.3 }, scale = 0.6 }
//! end = { x = { viewport-width = -0.3 }, y = { viewport-height = 0.15 }, pitch = -0.47123894, scale = 0.4 }
//!
//! [segment.yaw.sweep]
//! from = 1.5707964
//! to = 2.3561945
//! ```

use crate::easing::Easing;
use crate::error::ConfigError;
use crate::segment::{Offset, OffsetVec3, PoseKey, Segment, YawStart, YawTrack};
use crate::timeline::Timeline;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level choreography config (`choreography.toml`).
#[derive(Debug, Deserialize)]
struct ChoreographyConfig {
    #[serde(rename = "segment")]
    segments: Vec<SegmentConfig>,
}

#[derive(Debug, Deserialize)]
struct SegmentConfig {
    until: f32,
    #[serde(default)]
    easing: Easing,
    #[serde(default)]
    start: KeyConfig,
    #[serde(default)]
    end: KeyConfig,
    yaw: YawConfig,
}

/// A pose key with every channel optional; omitted channels rest.
#[derive(Debug, Deserialize)]
struct KeyConfig {
    #[serde(default)]
    x: OffsetConfig,
    #[serde(default)]
    y: OffsetConfig,
    #[serde(default)]
    z: OffsetConfig,
    #[serde(default)]
    pitch: f32,
    #[serde(default = "default_scale")]
    scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            x: OffsetConfig::default(),
            y: OffsetConfig::default(),
            z: OffsetConfig::default(),
            pitch: 0.0,
            scale: default_scale(),
        }
    }
}

/// `x = 1.5` for absolute units, `x = { viewport-width = 0.3 }` or
/// `x = { viewport-height = 0.15 }` for viewport-relative fractions.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
enum OffsetConfig {
    Units(f32),
    ViewportWidth {
        #[serde(rename = "viewport-width")]
        fraction: f32,
    },
    ViewportHeight {
        #[serde(rename = "viewport-height")]
        fraction: f32,
    },
}

impl Default for OffsetConfig {
    fn default() -> Self {
        OffsetConfig::Units(0.0)
    }
}

impl From<OffsetConfig> for Offset {
    fn from(value: OffsetConfig) -> Self {
        match value {
            OffsetConfig::Units(v) => Offset::Units(v),
            OffsetConfig::ViewportWidth { fraction } => Offset::ViewportWidth(fraction),
            OffsetConfig::ViewportHeight { fraction } => Offset::ViewportHeight(fraction),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum YawConfig {
    Spin {
        #[serde(rename = "angular-velocity")]
        angular_velocity: f32,
    },
    Sweep {
        #[serde(default)]
        from: YawFromConfig,
        to: f32,
    },
}

/// `from = 1.5708` for a fixed angle, `from = "spin-handoff"` to continue
/// from the idle spin. Omitting it defaults to the handoff.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
enum YawFromConfig {
    Handoff(HandoffTag),
    Fixed(f32),
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum HandoffTag {
    SpinHandoff,
}

impl Default for YawFromConfig {
    fn default() -> Self {
        YawFromConfig::Handoff(HandoffTag::SpinHandoff)
    }
}

impl From<YawFromConfig> for YawStart {
    fn from(value: YawFromConfig) -> Self {
        match value {
            YawFromConfig::Handoff(_) => YawStart::SpinHandoff,
            YawFromConfig::Fixed(angle) => YawStart::Fixed(angle),
        }
    }
}

impl From<YawConfig> for YawTrack {
    fn from(value: YawConfig) -> Self {
        match value {
            YawConfig::Spin { angular_velocity } => YawTrack::Spin { angular_velocity },
            YawConfig::Sweep { from, to } => YawTrack::Sweep {
                from: from.into(),
                to,
            },
        }
    }
}

impl From<KeyConfig> for PoseKey {
    fn from(value: KeyConfig) -> Self {
        PoseKey {
            position: OffsetVec3 {
                x: value.x.into(),
                y: value.y.into(),
                z: value.z.into(),
            },
            pitch: value.pitch,
            scale: value.scale,
        }
    }
}

impl From<SegmentConfig> for Segment {
    fn from(value: SegmentConfig) -> Self {
        Segment {
            until: value.until,
            easing: value.easing,
            start: value.start.into(),
            end: value.end.into(),
            yaw: value.yaw.into(),
        }
    }
}

/// Parse a choreography config from TOML text.
pub fn parse_timeline(text: &str) -> Result<Timeline, ConfigError> {
    let config: ChoreographyConfig = toml::from_str(text)?;
    let timeline = Timeline::new(config.segments.into_iter().map(Segment::from))?;
    debug!(
        segments = timeline.segments().len(),
        "parsed choreography config"
    );
    Ok(timeline)
}

/// Load and validate a choreography config file.
pub fn load_timeline(path: impl AsRef<Path>) -> Result<Timeline, ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_timeline(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, TimelineError};

    const HERO_TOML: &str = r#"
        [[segment]]
        until = 0.33
        easing = "linear"
        yaw = { spin = { angular-velocity = 0.5 } }

        [[segment]]
        until = 0.66
        easing = "ease-in-out-quad"
        end = { x = { viewport-width = 0.3 }, scale = 0.6 }

        [segment.yaw.sweep]
        from = "spin-handoff"
        to = 1.5707964

        [[segment]]
        until = 1.0
        easing = "ease-in-out-quad"
        start = { x = { viewport-width = 0.3 }, scale = 0.6 }
        end = { x = { viewport-width = -0.3 }, y = { viewport-height = 0.15 }, pitch = -0.47123894, scale = 0.4 }

        [segment.yaw.sweep]
        from = 1.5707964
        to = 2.3561945
    "#;

    #[test]
    fn hero_config_round_trips_to_segments() {
        let tl = parse_timeline(HERO_TOML).unwrap();
        let segments = tl.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].easing, Easing::Linear);
        assert_eq!(
            segments[0].yaw,
            YawTrack::Spin {
                angular_velocity: 0.5
            }
        );
        assert_eq!(
            segments[1].yaw,
            YawTrack::Sweep {
                from: YawStart::SpinHandoff,
                to: 1.5707964
            }
        );
        assert_eq!(segments[1].end.position.x, Offset::ViewportWidth(0.3));
        assert_eq!(segments[1].end.scale, 0.6);
        assert_eq!(segments[2].start, segments[1].end);
        assert_eq!(segments[2].end.position.y, Offset::ViewportHeight(0.15));
    }

    #[test]
    fn omitted_channels_rest() {
        let tl = parse_timeline(
            r#"
            [[segment]]
            until = 1.0
            yaw = { sweep = { to = 1.0 } }
            "#,
        )
        .unwrap();
        let segment = &tl.segments()[0];
        assert_eq!(segment.easing, Easing::Linear);
        assert_eq!(segment.start, PoseKey::REST);
        assert_eq!(segment.end, PoseKey::REST);
        assert_eq!(
            segment.yaw,
            YawTrack::Sweep {
                from: YawStart::SpinHandoff,
                to: 1.0
            }
        );
    }

    #[test]
    fn invalid_boundaries_surface_timeline_errors() {
        let result = parse_timeline(
            r#"
            [[segment]]
            until = 0.9
            yaw = { sweep = { to = 1.0 } }
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(TimelineError::Unterminated { .. }))
        ));
    }

    #[test]
    fn malformed_toml_surfaces_parse_errors() {
        assert!(matches!(
            parse_timeline("segment = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
