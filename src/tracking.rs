//! Convenience helpers for geometry tracking setup.
//!
//! This module provides [`GeometryTracker`], a wrapper around [`GeometryCache`]
//! that simplifies wiring up Slint callbacks for element bounds reporting.
//!
//! # Example
//!
//! ```ignore
//! use slint_arrows::GeometryTracker;
//!
//! let tracker = GeometryTracker::new();
//!
//! // Wire up callbacks (one-time setup)
//! window.on_element_rect_changed(tracker.element_rect_callback());
//! window.on_container_rect_changed(tracker.container_rect_callback());
//!
//! // Get the cache for use elsewhere
//! let cache = tracker.cache();
//! ```

use crate::resolve::{ElementGeometry, SimpleElementGeometry};
use crate::state::GeometryCache;
use std::cell::RefCell;
use std::rc::Rc;

/// Convenience wrapper for [`GeometryCache`] that provides ready-to-use Slint callbacks.
///
/// # Type Parameter
///
/// - `N`: The element geometry type. Defaults to [`SimpleElementGeometry`].
///   For custom element data, implement [`ElementGeometry`] and use
///   `GeometryTracker::<MyElement>::new()` with [`element_rect_callback_with`](Self::element_rect_callback_with).
pub struct GeometryTracker<N = SimpleElementGeometry> {
    cache: Rc<RefCell<GeometryCache<N>>>,
}

impl<N> Default for GeometryTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> GeometryTracker<N> {
    /// Create a new geometry tracker with an empty cache.
    pub fn new() -> Self {
        Self {
            cache: Rc::new(RefCell::new(GeometryCache::new())),
        }
    }

    /// Create a tracker wrapping an existing cache.
    pub fn with_cache(cache: Rc<RefCell<GeometryCache<N>>>) -> Self {
        Self { cache }
    }

    /// Get a clone of the internal cache reference.
    pub fn cache(&self) -> Rc<RefCell<GeometryCache<N>>> {
        self.cache.clone()
    }

    /// Get a callback for container rectangle updates.
    ///
    /// The callback signature: `(x: f32, y: f32, width: f32, height: f32)`
    pub fn container_rect_callback(&self) -> impl Fn(f32, f32, f32, f32) + Clone {
        let cache = self.cache.clone();
        move |x, y, width, height| {
            cache
                .borrow_mut()
                .handle_container_rect_report(x, y, width, height);
        }
    }

    /// Get a callback for element removal (e.g. when a Slint item is destroyed).
    pub fn element_removed_callback(&self) -> impl Fn(i32) + Clone {
        let cache = self.cache.clone();
        move |id| {
            cache.borrow_mut().remove_element(id);
        }
    }
}

impl GeometryTracker<SimpleElementGeometry> {
    /// Get a callback for element rectangle updates.
    ///
    /// The callback signature: `(id: i32, x: f32, y: f32, width: f32, height: f32)`
    pub fn element_rect_callback(&self) -> impl Fn(i32, f32, f32, f32, f32) + Clone {
        let cache = self.cache.clone();
        move |id, x, y, width, height| {
            cache
                .borrow_mut()
                .handle_element_rect_report(id, x, y, width, height);
        }
    }
}

impl<N> GeometryTracker<N>
where
    N: ElementGeometry + Copy,
{
    /// Get a callback for element rectangle updates with a custom conversion function.
    pub fn element_rect_callback_with<F>(&self, convert: F) -> impl Fn(i32, f32, f32, f32, f32) + Clone
    where
        F: Fn(i32, f32, f32, f32, f32) -> N + Clone + 'static,
    {
        let cache = self.cache.clone();
        move |id, x, y, width, height| {
            let element = convert(id, x, y, width, height);
            cache.borrow_mut().element_rects.insert(id, element);
        }
    }
}
