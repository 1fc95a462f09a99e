//! Change detection for connector rendering.
//!
//! Every drag tick or frame resolves anchors again; [`RenderCache::update`]
//! only recomputes the curve when they actually moved.

use crate::path::{compute_path, CurveDescriptor};
use crate::point::{Anchors, Point};

/// Last rendered anchors of one connector.
///
/// Either nothing has been rendered yet, or both anchors of the most recent
/// successful render are stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderCache {
    last: Option<Anchors>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_start(&self) -> Option<Point> {
        self.last.map(|a| a.start)
    }

    pub fn last_end(&self) -> Option<Point> {
        self.last.map(|a| a.end)
    }

    pub fn last_anchors(&self) -> Option<Anchors> {
        self.last
    }

    pub fn is_rendered(&self) -> bool {
        self.last.is_some()
    }

    /// Recompute the curve if the anchors changed.
    ///
    /// Returns `None` when `start` and `end` equal the cached anchors field
    /// by field. Otherwise computes a fresh curve, stores the anchors and
    /// returns it.
    pub fn update(&mut self, start: Point, end: Point, curviness: f32) -> Option<CurveDescriptor> {
        let anchors = Anchors { start, end };
        if self.last == Some(anchors) {
            log::trace!("anchors unchanged at {:?} -> {:?}", start, end);
            return None;
        }

        let curve = compute_path(start, end, curviness);
        self.last = Some(anchors);
        Some(curve)
    }

    /// Recompute the curve from the cached anchors, e.g. after a curviness
    /// change. `None` if nothing was rendered yet.
    pub fn rerender(&self, curviness: f32) -> Option<CurveDescriptor> {
        self.last.map(|a| compute_path(a.start, a.end, curviness))
    }

    /// Forget the cached anchors so the next [`update`](Self::update) recomputes.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
