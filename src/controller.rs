//! High-level controller for canvases with connector arrows.
//!
//! The [`ArrowsController`] reduces boilerplate by managing geometry tracking,
//! connector state and hit testing in one place.
//!
//! # Example
//!
//! ```ignore
//! use slint_arrows::{ArrowsController, SimpleConnector};
//!
//! slint::include_modules!();
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let window = MainWindow::new()?;
//!     let ctrl = ArrowsController::new();
//!
//!     // Geometry reports redraw whatever moved
//!     window.on_element_rect_changed(ctrl.element_rect_callback());
//!     window.on_container_rect_changed(ctrl.container_rect_callback());
//!     window.on_find_arrow_at(ctrl.find_connector_at_callback());
//!
//!     let arrows = Rc::new(VecModel::<Arrow>::default());
//!     ctrl.bind_model(arrows.clone(), |row| Arrow {
//!         id: row.id,
//!         commands: row.path_commands.clone(),
//!         hover_commands: row.hover_path_commands.clone(),
//!     });
//!     window.set_arrows(ModelRc::from(arrows));
//!
//!     ctrl.add_connector(SimpleConnector::new(1, 10, 20))?;
//!
//!     // Zoom
//!     window.on_zoom_changed({
//!         let ctrl = ctrl.clone();
//!         move |zoom| {
//!             if let Err(err) = ctrl.set_scale(zoom) {
//!                 log::warn!("{}", err);
//!             }
//!         }
//!     });
//!
//!     window.run()?;
//!     Ok(())
//! }
//! ```

use crate::config::ConnectorConfig;
use crate::connector::SimpleConnector;
use crate::error::Result;
use crate::hit_test::DEFAULT_HIT_SAMPLES;
use crate::manager::{ConnectorManager, ConnectorRow};
use crate::state::GeometryCache;
use slint::{SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Controller that manages canvas geometry and connectors and provides callback implementations.
///
/// Every geometry report is stored and immediately followed by a redraw of
/// the connectors whose anchors moved, so wiring the report callbacks is
/// enough to keep the arrows attached during drags, resizes and scrolls.
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct ArrowsController {
    cache: Rc<RefCell<GeometryCache>>,
    manager: Rc<RefCell<ConnectorManager<SimpleConnector>>>,
    hit_samples: Rc<RefCell<usize>>,
}

impl Default for ArrowsController {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrowsController {
    /// Create a new controller with default settings.
    pub fn new() -> Self {
        let cache = Rc::new(RefCell::new(GeometryCache::new()));
        let manager = ConnectorManager::new(cache.clone());
        Self::from_parts(cache, manager)
    }

    /// Create a controller with canvas-wide connector defaults.
    pub fn with_defaults(defaults: ConnectorConfig) -> Result<Self> {
        let cache = Rc::new(RefCell::new(GeometryCache::new()));
        let manager = ConnectorManager::with_defaults(cache.clone(), defaults)?;
        Ok(Self::from_parts(cache, manager))
    }

    fn from_parts(cache: Rc<RefCell<GeometryCache>>, manager: ConnectorManager<SimpleConnector>) -> Self {
        Self {
            cache,
            manager: Rc::new(RefCell::new(manager)),
            hit_samples: Rc::new(RefCell::new(DEFAULT_HIT_SAMPLES)),
        }
    }

    /// Get access to the geometry cache.
    pub fn cache(&self) -> Rc<RefCell<GeometryCache>> {
        self.cache.clone()
    }

    /// Get access to the connector manager.
    pub fn manager(&self) -> Rc<RefCell<ConnectorManager<SimpleConnector>>> {
        self.manager.clone()
    }

    /// Set the number of samples per curve used by hit testing (default: 20).
    pub fn set_hit_samples(&self, samples: usize) {
        *self.hit_samples.borrow_mut() = samples.max(1);
    }

    /// Bind a Slint model that mirrors the connector rows.
    pub fn bind_model<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&ConnectorRow) -> P + 'static,
    {
        self.manager.borrow_mut().bind_model(model, constructor);
    }

    // === Callback factories ===

    /// Returns a callback for `element-rect-changed`.
    pub fn element_rect_callback(&self) -> impl Fn(i32, f32, f32, f32, f32) + Clone {
        let ctrl = self.clone();
        move |id, x, y, width, height| ctrl.handle_element_rect(id, x, y, width, height)
    }

    /// Returns a callback for `container-rect-changed`.
    pub fn container_rect_callback(&self) -> impl Fn(f32, f32, f32, f32) + Clone {
        let ctrl = self.clone();
        move |x, y, width, height| ctrl.handle_container_rect(x, y, width, height)
    }

    /// Returns a callback for element teardown.
    pub fn element_removed_callback(&self) -> impl Fn(i32) + Clone {
        let ctrl = self.clone();
        move |id| ctrl.handle_element_removed(id)
    }

    /// Returns a hit-test callback: canvas-local position to connector ID, -1 for none.
    pub fn find_connector_at_callback(&self) -> impl Fn(f32, f32) -> i32 + Clone {
        let ctrl = self.clone();
        move |x, y| ctrl.find_connector_at(x, y)
    }

    /// Returns a callback computing a path between two elements with the defaults.
    ///
    /// Useful for previews, such as a connector being drawn by the user.
    pub fn compute_path_callback(&self) -> impl Fn(i32, i32) -> SharedString + Clone {
        let ctrl = self.clone();
        move |start_element, end_element| ctrl.compute_path(start_element, end_element)
    }

    // === Direct handlers ===

    /// Handle element-rect-changed: update cache and redraw moved connectors.
    pub fn handle_element_rect(&self, id: i32, x: f32, y: f32, width: f32, height: f32) {
        self.cache
            .borrow_mut()
            .handle_element_rect_report(id, x, y, width, height);
        self.refresh();
    }

    /// Handle container-rect-changed: update cache and redraw moved connectors.
    pub fn handle_container_rect(&self, x: f32, y: f32, width: f32, height: f32) {
        self.cache
            .borrow_mut()
            .handle_container_rect_report(x, y, width, height);
        self.refresh();
    }

    /// Forget an element. Its connectors are hidden and not ready until it is reported again.
    pub fn handle_element_removed(&self, id: i32) {
        self.cache.borrow_mut().remove_element(id);
        self.refresh();
    }

    /// Redraw connectors whose anchors moved. Returns how many were redrawn or hidden.
    pub fn refresh(&self) -> usize {
        self.manager.borrow_mut().update_paths()
    }

    pub fn add_connector(&self, connector: SimpleConnector) -> Result<()> {
        self.manager.borrow_mut().add(connector)?;
        self.refresh();
        Ok(())
    }

    pub fn remove_connector(&self, id: i32) -> Result<SimpleConnector> {
        self.manager.borrow_mut().remove(id)
    }

    pub fn clear_connectors(&self) {
        self.manager.borrow_mut().clear();
    }

    /// Set the canvas zoom and redraw every connector.
    pub fn set_scale(&self, scale: f32) -> Result<()> {
        self.update_defaults(|defaults| defaults.with_scale(scale))
    }

    /// Set the canvas-wide curviness and redraw every connector.
    pub fn set_curviness(&self, curviness: f32) -> Result<()> {
        self.update_defaults(|defaults| defaults.with_curviness(curviness))
    }

    /// Replace the canvas-wide defaults and redraw every connector.
    pub fn set_defaults(&self, defaults: ConnectorConfig) -> Result<()> {
        self.update_defaults(|_| defaults)
    }

    fn update_defaults(&self, f: impl FnOnce(ConnectorConfig) -> ConnectorConfig) -> Result<()> {
        let mut manager = self.manager.borrow_mut();
        let defaults = f(manager.defaults().clone());
        manager.set_defaults(defaults)?;
        manager.update_paths();
        Ok(())
    }

    /// Compute the path between two elements using the defaults, without change detection.
    ///
    /// Returns an empty string while either element is unknown.
    pub fn compute_path(&self, start_element: i32, end_element: i32) -> SharedString {
        let manager = self.manager.borrow();
        self.cache
            .borrow()
            .compute_connector_path(start_element, end_element, manager.defaults())
            .map(|curve| curve.path_commands())
            .unwrap_or_default()
            .into()
    }

    /// Find the interactive connector under a canvas-local position.
    ///
    /// Returns the connector ID, or -1 if none.
    pub fn find_connector_at(&self, x: f32, y: f32) -> i32 {
        self.manager
            .borrow()
            .find_connector_at(x, y, *self.hit_samples.borrow())
    }
}
