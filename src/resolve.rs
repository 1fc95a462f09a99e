//! Anchor resolution from element bounds.
//!
//! Connectors always leave from the right-center of the start element and
//! arrive at the left-center of the end element. Bounds are reported in the
//! same space as the container (typically window coordinates); anchors come
//! out in container-local, unscaled space.

use crate::point::{Anchors, Point};

/// Axis-aligned bounds: x, y, width, height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge, vertically centered.
    pub fn right_center(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height / 2.0)
    }

    /// Left edge, vertically centered.
    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }
}

impl From<(f32, f32, f32, f32)> for Rect {
    fn from((x, y, width, height): (f32, f32, f32, f32)) -> Self {
        Self { x, y, width, height }
    }
}

/// Trait for element geometry the resolver can attach connectors to
pub trait ElementGeometry {
    fn id(&self) -> i32;
    fn rect(&self) -> Rect;
}

/// Simple implementation of ElementGeometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleElementGeometry {
    pub id: i32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementGeometry for SimpleElementGeometry {
    fn id(&self) -> i32 { self.id }
    fn rect(&self) -> Rect { Rect::new(self.x, self.y, self.width, self.height) }
}

/// Pixel nudges applied to each anchor before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetConfig {
    pub start: Point,
    pub end: Point,
}

impl OffsetConfig {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Resolve the two anchors of a connector.
///
/// # Arguments
/// * `start`, `end` - Bounds of the connected elements
/// * `container` - Bounds of the canvas the connector is drawn in
/// * `offset` - Per-anchor nudge, added in container space before scaling
/// * `scale` - Canvas zoom; container-local coordinates are divided by it
/// * `snap_to_integer` - Floor both anchors on both axes
///
/// # Returns
/// `None` when any of the bounds is missing. That is the normal state while
/// elements are mounting or unmounting, callers skip the frame.
pub fn resolve_anchors(
    start: Option<Rect>,
    end: Option<Rect>,
    container: Option<Rect>,
    offset: &OffsetConfig,
    scale: f32,
    snap_to_integer: bool,
) -> Option<Anchors> {
    let (start, end, container) = (start?, end?, container?);

    let to_local = |p: Point, nudge: Point| {
        Point::new(
            (p.x + nudge.x - container.x) / scale,
            (p.y + nudge.y - container.y) / scale,
        )
    };

    let anchors = Anchors {
        start: to_local(start.right_center(), offset.start),
        end: to_local(end.left_center(), offset.end),
    };

    Some(if snap_to_integer { anchors.floor() } else { anchors })
}
