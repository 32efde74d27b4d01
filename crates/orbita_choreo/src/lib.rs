//! Orbita Choreography Engine
//!
//! Scroll-driven pose choreography: maps a normalized scroll progress in
//! `[0, 1]` through an ordered list of timeline segments and derives a
//! [`Pose`](orbita_core::Pose) for the current frame.
//!
//! # Features
//!
//! - **Segment timelines**: contiguous progress spans with per-segment
//!   easing, validated at construction
//! - **Pure sampling**: `sample()` is a deterministic function of its
//!   inputs, with no side effects on the rendered object
//! - **Spin handoff**: idle time-driven spin hands its exit yaw to the
//!   first progress-driven segment without a visible pop
//! - **Multi-actor stages**: independently-phased actors ticked together
//! - **TOML config**: timelines are data, loadable from `choreography.toml`

pub mod choreographer;
pub mod config;
pub mod easing;
pub mod error;
pub mod presets;
pub mod segment;
pub mod stage;
pub mod timeline;

pub use choreographer::{sample, Choreographer, SampleInput};
pub use config::{load_timeline, parse_timeline};
pub use easing::Easing;
pub use error::{ConfigError, TimelineError};
pub use presets::TimelinePreset;
pub use segment::{Offset, OffsetVec3, PoseKey, Segment, YawStart, YawTrack};
pub use stage::{Actor, ActorId, Stage};
pub use timeline::Timeline;
