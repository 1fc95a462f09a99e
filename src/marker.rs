//! Arrowhead marker geometry.
//!
//! A filled triangle pointing along the end of the connector, sized
//! relative to a 12 px reference.

use std::sync::atomic::{AtomicU32, Ordering};

/// Reference arrowhead size in pixels.
pub const DEFAULT_HEAD_SIZE: f32 = 12.0;

static NEXT_MARKER_ID: AtomicU32 = AtomicU32::new(0);

/// Unique id for a marker definition, e.g. `"arrow-head-3"`.
pub fn unique_marker_id() -> String {
    format!("arrow-head-{}", NEXT_MARKER_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGeometry {
    pub width: f32,
    pub height: f32,
    /// Point of the triangle that sits on the connector's end anchor.
    pub ref_x: f32,
    pub ref_y: f32,
    scale: f32,
}

impl Default for MarkerGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_HEAD_SIZE)
    }
}

impl MarkerGeometry {
    pub fn new(size: f32) -> Self {
        let scale = size / DEFAULT_HEAD_SIZE;
        Self {
            width: 12.0 * scale,
            height: 10.0 * scale,
            ref_x: 11.0 * scale,
            ref_y: 5.0 * scale,
            scale,
        }
    }

    /// Triangle outline in marker-local coordinates.
    pub fn path_commands(&self) -> String {
        format!(
            "M0,0 V{} L{},{} Z",
            10.0 * self.scale,
            12.0 * self.scale,
            5.0 * self.scale
        )
    }
}
