//! Hysteresis Core — a dual-handle range control without a toolkit.
//!
//! This crate holds everything about the control that does not depend on
//! how it is painted:
//! - Domain types (range, value bounds, handles)
//! - The unified TOML configuration schema and its diagnostics
//! - Layout calculator mapping values onto canvas coordinates and back
//! - Gesture state machine for dragging the two handles
//! - Scene builder producing an ordered display list

pub mod config;
pub mod control;
pub mod domain;
pub mod error;
pub mod layout;
pub mod scene;
pub mod style;

pub use config::{ControlConfig, ConfigWarning, Orientation, TickLabels, YAxisMode};
pub use control::{DragState, HysteresisControl};
pub use domain::{Bounds, Handle, Point, Range};
pub use error::ConfigError;
pub use layout::{Geometry, TextMetrics, TextSize, Viewport};
pub use scene::{Primitive, Scene};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the control and its geometry can move to another
    /// thread with the rest of the host's UI state.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<ControlConfig>();
        require_sync::<ControlConfig>();
        require_send::<HysteresisControl>();
        require_sync::<HysteresisControl>();
        require_send::<Geometry>();
        require_sync::<Geometry>();
        require_send::<Scene>();
        require_sync::<Scene>();
    }
}
