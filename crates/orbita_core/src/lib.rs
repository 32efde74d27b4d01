//! Orbita Core Types
//!
//! Foundational value types shared across the Orbita workspace:
//!
//! - **Vectors**: a minimal `Vec3` with the interpolation helpers the
//!   choreography engine needs
//! - **Poses**: the complete transform of an animated object at an instant
//! - **Viewport metrics**: render-surface dimensions used to resolve
//!   viewport-relative offsets

pub mod math;
pub mod pose;
pub mod viewport;

pub use math::{lerp, Vec3};
pub use pose::Pose;
pub use viewport::ViewportMetrics;
