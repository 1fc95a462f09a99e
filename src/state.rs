use std::collections::HashMap;
use crate::config::ConnectorConfig;
use crate::path::{compute_path, CurveDescriptor};
use crate::point::Anchors;
use crate::resolve::{resolve_anchors, ElementGeometry, Rect, SimpleElementGeometry};

/// Helper struct to manage spatial state of the canvas (element rects and the container rect)
///
/// Generic over N to allow using specialized element types that implement ElementGeometry.
/// All rects are stored as reported, in the same space as the container rect.
pub struct GeometryCache<N = SimpleElementGeometry> {
    pub element_rects: HashMap<i32, N>,
    pub container: Option<Rect>,
}

impl<N> Default for GeometryCache<N> {
    fn default() -> Self {
        Self {
            element_rects: HashMap::new(),
            container: None,
        }
    }
}

impl<N> GeometryCache<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard handler for container rect reports from Slint
    pub fn handle_container_rect_report(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.container = Some(Rect::new(x, y, width, height));
    }

    /// Forget an element. Connectors attached to it stop resolving until it is reported again.
    pub fn remove_element(&mut self, id: i32) -> bool {
        self.element_rects.remove(&id).is_some()
    }
}

impl<N> GeometryCache<N>
where
    N: ElementGeometry + Copy,
{
    pub fn element_rect(&self, id: i32) -> Option<Rect> {
        self.element_rects.get(&id).map(|e| e.rect())
    }

    /// Resolve the anchors of a connector between two elements
    ///
    /// Returns `None` while either element or the container has not been reported.
    pub fn resolve_anchors(
        &self,
        start_element: i32,
        end_element: i32,
        config: &ConnectorConfig,
    ) -> Option<Anchors> {
        resolve_anchors(
            self.element_rect(start_element),
            self.element_rect(end_element),
            self.container,
            &config.offset,
            config.scale,
            config.only_integer_coords,
        )
    }

    /// Compute the curve of a connector without change detection
    ///
    /// Path coordinates are floored when the config asks for integer coordinates.
    pub fn compute_connector_path(
        &self,
        start_element: i32,
        end_element: i32,
        config: &ConnectorConfig,
    ) -> Option<CurveDescriptor> {
        let anchors = self.resolve_anchors(start_element, end_element, config)?;
        let curve = compute_path(anchors.start, anchors.end, config.curviness);
        Some(if config.only_integer_coords { curve.floored() } else { curve })
    }
}

/// Convenience implementation for the default SimpleElementGeometry
impl GeometryCache<SimpleElementGeometry> {
    /// Update an element's rectangle (shorthand for SimpleElementGeometry)
    pub fn update_element_rect(&mut self, id: i32, x: f32, y: f32, width: f32, height: f32) {
        self.element_rects.insert(
            id,
            SimpleElementGeometry {
                id,
                x,
                y,
                width,
                height,
            },
        );
    }

    /// Standard handler for element rect reports from Slint (for SimpleElementGeometry)
    pub fn handle_element_rect_report(&mut self, id: i32, x: f32, y: f32, w: f32, h: f32) {
        self.update_element_rect(id, x, y, w, h);
    }
}
