//! Connector management for Slint canvases.
//!
//! This module provides [`ConnectorManager`], which keeps one rendered
//! [`ConnectorRow`] per connector and only rewrites the rows whose anchors
//! moved since the previous tick.
//!
//! # Example
//!
//! ```ignore
//! use slint_arrows::{ConnectorManager, GeometryTracker, SimpleConnector};
//!
//! // Set up geometry tracking
//! let tracker = GeometryTracker::new();
//! window.on_element_rect_changed(tracker.element_rect_callback());
//! window.on_container_rect_changed(tracker.container_rect_callback());
//!
//! // Set up connectors
//! let mut arrows = ConnectorManager::new(tracker.cache());
//! arrows.add(SimpleConnector::new(1, task_a, task_b))?;
//!
//! // Bind once - bound rows are updated in place from now on
//! let model = Rc::new(VecModel::<Arrow>::default());
//! arrows.bind_model(model.clone(), |row| Arrow {
//!     id: row.id,
//!     commands: row.path_commands.clone(),
//!     label_x: row.label_x,
//!     label_y: row.label_y,
//! });
//! window.set_arrows(ModelRc::from(model));
//!
//! // On every drag tick / frame
//! arrows.update_paths();
//! ```

use crate::config::{ConfigOverrides, ConnectorConfig};
use crate::connector::{validate_connector, ConnectorModel};
use crate::error::{ConnectorError, Result};
use crate::hit_test::{find_connector_at, SimpleConnectorGeometry};
use crate::path::{to_path_commands, CurveDescriptor};
use crate::render::RenderCache;
use crate::resolve::{ElementGeometry, SimpleElementGeometry};
use crate::reverse::hover_outline;
use crate::state::GeometryCache;
use crate::marker::unique_marker_id;
use slint::{Color, Model, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Arrowhead data of a rendered connector.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorHead {
    pub marker_id: SharedString,
    pub path_commands: SharedString,
    pub width: f32,
    pub height: f32,
    pub ref_x: f32,
    pub ref_y: f32,
    pub color: Color,
}

/// Everything a view needs to draw one connector.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorRow {
    pub id: i32,
    /// False while either element is unknown; paths are empty then.
    pub ready: bool,
    pub path_commands: SharedString,
    /// `forward ++ reverse(forward)`; empty when the connector is not interactive.
    pub hover_path_commands: SharedString,
    pub label_x: f32,
    pub label_y: f32,
    pub color: Color,
    pub stroke_width: f32,
    pub hover_stroke_width: f32,
    pub head: Option<ConnectorHead>,
}

impl ConnectorRow {
    fn new(id: i32, config: &ConnectorConfig, marker_id: Option<&str>) -> Self {
        let mut row = Self {
            id,
            ready: false,
            path_commands: SharedString::default(),
            hover_path_commands: SharedString::default(),
            label_x: 0.0,
            label_y: 0.0,
            color: config.color,
            stroke_width: config.stroke_width,
            hover_stroke_width: 0.0,
            head: None,
        };
        row.restyle(config, marker_id);
        row
    }

    fn restyle(&mut self, config: &ConnectorConfig, marker_id: Option<&str>) {
        self.color = config.color;
        self.stroke_width = config.stroke_width;
        self.hover_stroke_width = if config.has_hover_outline() {
            config.hover_stroke_width()
        } else {
            0.0
        };
        self.head = config.marker().zip(marker_id).map(|(marker, id)| ConnectorHead {
            marker_id: id.into(),
            path_commands: marker.path_commands().into(),
            width: marker.width,
            height: marker.height,
            ref_x: marker.ref_x,
            ref_y: marker.ref_y,
            color: config.head_color(),
        });
    }
}

/// Internal trait for auto-syncing to Slint models.
trait ModelSyncer {
    fn set(&self, index: usize, row: &ConnectorRow);
    fn push(&self, row: &ConnectorRow);
    fn remove(&self, index: usize);
    fn reset(&self, rows: &mut dyn Iterator<Item = &ConnectorRow>);
}

/// Concrete implementation of ModelSyncer for a specific row type.
struct ConcreteModelSyncer<P, F> {
    model: Rc<VecModel<P>>,
    constructor: F,
}

impl<P, F> ModelSyncer for ConcreteModelSyncer<P, F>
where
    P: Clone + 'static,
    F: Fn(&ConnectorRow) -> P,
{
    fn set(&self, index: usize, row: &ConnectorRow) {
        if index < self.model.row_count() {
            self.model.set_row_data(index, (self.constructor)(row));
        }
    }

    fn push(&self, row: &ConnectorRow) {
        self.model.push((self.constructor)(row));
    }

    fn remove(&self, index: usize) {
        if index < self.model.row_count() {
            self.model.remove(index);
        }
    }

    fn reset(&self, rows: &mut dyn Iterator<Item = &ConnectorRow>) {
        let mut count = 0;
        // Update existing rows or add new ones
        for (i, row) in rows.enumerate() {
            let item = (self.constructor)(row);
            if i < self.model.row_count() {
                self.model.set_row_data(i, item);
            } else {
                self.model.push(item);
            }
            count += 1;
        }
        // Remove excess rows
        while self.model.row_count() > count {
            self.model.remove(self.model.row_count() - 1);
        }
    }
}

/// Per-connector state: the resolved config, the change detector and the
/// current output row. Created by [`ConnectorManager::add`], dropped by
/// [`ConnectorManager::remove`].
struct ConnectorEntry<L> {
    connector: L,
    /// The connector's own overrides plus any later per-connector changes.
    overrides: ConfigOverrides,
    config: ConnectorConfig,
    render: RenderCache,
    curve: Option<CurveDescriptor>,
    marker_id: Option<String>,
    row: ConnectorRow,
}

impl<L> ConnectorEntry<L> {
    fn apply(&mut self, curve: CurveDescriptor) {
        let curve = if self.config.only_integer_coords {
            curve.floored()
        } else {
            curve
        };

        self.row.path_commands = curve.path_commands().into();
        self.row.hover_path_commands = if self.config.has_hover_outline() {
            to_path_commands(&hover_outline(&curve.segments)).into()
        } else {
            SharedString::default()
        };
        self.row.label_x = curve.label_anchor.x;
        self.row.label_y = curve.label_anchor.y;
        self.row.ready = true;
        self.curve = Some(curve);
    }

    fn hide(&mut self) {
        self.row.path_commands = SharedString::default();
        self.row.hover_path_commands = SharedString::default();
        self.row.ready = false;
        self.curve = None;
        self.render.invalidate();
    }
}

/// Manages connectors and their rendered paths.
///
/// # Auto-Sync Mode
///
/// Use [`bind_model`](Self::bind_model) to mirror the rows into a Slint
/// `VecModel`. Adding or removing a connector pushes or removes its row;
/// [`update_paths`](Self::update_paths) only rewrites rows that changed.
///
/// # Type Parameters
///
/// - `L`: The connector data type, must implement [`ConnectorModel`]
/// - `N`: The element geometry type used by the cache (default: `SimpleElementGeometry`)
pub struct ConnectorManager<L, N = SimpleElementGeometry> {
    entries: Vec<ConnectorEntry<L>>,
    cache: Rc<RefCell<GeometryCache<N>>>,
    defaults: ConnectorConfig,
    syncer: Option<Box<dyn ModelSyncer>>,
}

impl<L, N> ConnectorManager<L, N>
where
    L: ConnectorModel,
    N: ElementGeometry + Copy,
{
    /// Create a new ConnectorManager with default configuration.
    pub fn new(cache: Rc<RefCell<GeometryCache<N>>>) -> Self {
        Self {
            entries: Vec::new(),
            cache,
            defaults: ConnectorConfig::default(),
            syncer: None,
        }
    }

    /// Create a new ConnectorManager with canvas-wide defaults.
    pub fn with_defaults(cache: Rc<RefCell<GeometryCache<N>>>, defaults: ConnectorConfig) -> Result<Self> {
        defaults.validate()?;
        Ok(Self {
            defaults,
            ..Self::new(cache)
        })
    }

    /// Bind to a Slint model for automatic synchronization.
    ///
    /// The model is filled with the current rows right away.
    pub fn bind_model<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&ConnectorRow) -> P + 'static,
    {
        let syncer = ConcreteModelSyncer { model, constructor };
        syncer.reset(&mut self.entries.iter().map(|e| &e.row));
        self.syncer = Some(Box::new(syncer));
    }

    /// Create a standalone Slint model of the current rows.
    pub fn create_model<P, F>(&self, constructor: F) -> ModelRc<P>
    where
        P: Clone + 'static,
        F: Fn(&ConnectorRow) -> P,
    {
        let items: Vec<P> = self.entries.iter().map(|e| constructor(&e.row)).collect();
        ModelRc::from(Rc::new(VecModel::from(items)))
    }

    /// Add a connector.
    ///
    /// Its configuration is resolved against the defaults now; the path is
    /// computed on the next call to [`update_paths`](Self::update_paths).
    pub fn add(&mut self, connector: L) -> Result<()> {
        validate_connector(&connector, self.entries.iter().map(|e| &e.connector))?;
        let overrides = connector.overrides();
        let config = self.defaults.merged(&overrides)?;

        let marker_id = config.head.map(|_| unique_marker_id());
        let row = ConnectorRow::new(connector.id(), &config, marker_id.as_deref());

        if let Some(syncer) = &self.syncer {
            syncer.push(&row);
        }
        self.entries.push(ConnectorEntry {
            connector,
            overrides,
            config,
            render: RenderCache::new(),
            curve: None,
            marker_id,
            row,
        });
        Ok(())
    }

    /// Remove a connector by ID and return it.
    pub fn remove(&mut self, id: i32) -> Result<L> {
        let index = self
            .index_of(id)
            .ok_or(ConnectorError::ConnectorNotFound(id))?;
        let entry = self.entries.remove(index);
        if let Some(syncer) = &self.syncer {
            syncer.remove(index);
        }
        Ok(entry.connector)
    }

    /// Remove all connectors.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Some(syncer) = &self.syncer {
            syncer.reset(&mut std::iter::empty::<&ConnectorRow>());
        }
    }

    /// Get the number of connectors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no connectors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn defaults(&self) -> &ConnectorConfig {
        &self.defaults
    }

    /// Replace the canvas-wide defaults.
    ///
    /// Every connector's configuration is merged again and its cached anchors
    /// are dropped, so the next [`update_paths`](Self::update_paths) redraws
    /// everything. Nothing changes if any merge fails.
    pub fn set_defaults(&mut self, defaults: ConnectorConfig) -> Result<()> {
        defaults.validate()?;
        let configs = self
            .entries
            .iter()
            .map(|e| defaults.merged(&e.overrides))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for (entry, config) in self.entries.iter_mut().zip(configs) {
            if config.head.is_some() && entry.marker_id.is_none() {
                entry.marker_id = Some(unique_marker_id());
            }
            entry.row.restyle(&config, entry.marker_id.as_deref());
            entry.config = config;
            entry.render.invalidate();
        }
        self.defaults = defaults;

        if let Some(syncer) = &self.syncer {
            syncer.reset(&mut self.entries.iter().map(|e| &e.row));
        }
        Ok(())
    }

    /// Change the curviness of one connector and redraw it from its cached anchors.
    ///
    /// The value is kept as an override, so later calls to
    /// [`set_defaults`](Self::set_defaults) do not reset it.
    pub fn set_curviness(&mut self, id: i32, curviness: f32) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or(ConnectorError::ConnectorNotFound(id))?;
        let entry = &mut self.entries[index];

        let config = entry.config.clone().with_curviness(curviness);
        config.validate()?;
        entry.config = config;
        entry.overrides.curviness = Some(curviness);

        if let Some(curve) = entry.render.rerender(curviness) {
            entry.apply(curve);
            if let Some(syncer) = &self.syncer {
                syncer.set(index, &entry.row);
            }
        }
        Ok(())
    }

    /// Update all connector paths based on current element bounds.
    ///
    /// Call this on every tick that may move an element: drag moves, resizes,
    /// scrolls, content changes. Connectors whose elements are not reported yet
    /// are skipped; connectors whose anchors did not move are left alone.
    /// A drawn connector that loses one of its elements is hidden and marked
    /// not ready until the element is reported again.
    ///
    /// # Returns
    ///
    /// Number of connectors that were redrawn or hidden.
    pub fn update_paths(&mut self) -> usize {
        let cache = self.cache.borrow();
        let mut changed = Vec::new();

        for (i, entry) in self.entries.iter_mut().enumerate() {
            let Some(anchors) = cache.resolve_anchors(
                entry.connector.start_element_id(),
                entry.connector.end_element_id(),
                &entry.config,
            ) else {
                if entry.row.ready {
                    log::debug!("connector {} lost an element", entry.row.id);
                    entry.hide();
                    changed.push(i);
                } else {
                    log::trace!("connector {} not ready", entry.row.id);
                }
                continue;
            };

            if let Some(curve) = entry
                .render
                .update(anchors.start, anchors.end, entry.config.curviness)
            {
                entry.apply(curve);
                changed.push(i);
            }
        }

        if !changed.is_empty() {
            log::debug!("redrew {} of {} connectors", changed.len(), self.entries.len());
        }

        // Auto-sync to bound model if present
        if let Some(syncer) = &self.syncer {
            for &i in &changed {
                syncer.set(i, &self.entries[i].row);
            }
        }

        changed.len()
    }

    /// Find the interactive connector under a canvas-local position.
    ///
    /// Returns the connector ID, or -1 if none is within half its hover width.
    pub fn find_connector_at(&self, x: f32, y: f32, hit_samples: usize) -> i32 {
        let candidates = self.entries.iter().filter_map(|e| {
            if !e.config.has_hover_outline() {
                return None;
            }
            let curve = e.curve.as_ref()?;
            Some(SimpleConnectorGeometry {
                id: e.row.id,
                segments: curve.segments.clone(),
                hover_width: e.row.hover_stroke_width,
            })
        });
        find_connector_at(x, y, candidates, hit_samples)
    }

    /// Get an iterator over connector IDs.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|e| e.connector.id())
    }

    /// Get an iterator over the connectors.
    pub fn connectors(&self) -> impl Iterator<Item = &L> + '_ {
        self.entries.iter().map(|e| &e.connector)
    }

    /// Find a connector by ID.
    pub fn find(&self, id: i32) -> Option<&L> {
        self.entries.iter().find(|e| e.connector.id() == id).map(|e| &e.connector)
    }

    /// Rendered rows, in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = &ConnectorRow> + '_ {
        self.entries.iter().map(|e| &e.row)
    }

    pub fn row(&self, id: i32) -> Option<&ConnectorRow> {
        self.index_of(id).map(|i| &self.entries[i].row)
    }

    /// Last computed curve of a connector (floored in integer mode).
    pub fn curve(&self, id: i32) -> Option<&CurveDescriptor> {
        self.index_of(id).and_then(|i| self.entries[i].curve.as_ref())
    }

    /// Resolved configuration of a connector.
    pub fn config(&self, id: i32) -> Option<&ConnectorConfig> {
        self.index_of(id).map(|i| &self.entries[i].config)
    }

    fn index_of(&self, id: i32) -> Option<usize> {
        self.entries.iter().position(|e| e.connector.id() == id)
    }
}
