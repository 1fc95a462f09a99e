//! # Slint Arrows Library
//!
//! Curved connector arrows between rectangular elements on a Slint canvas,
//! for dependency graphs, flow charts, Gantt charts and mind maps.
//!
//! ## Features
//!
//! - **Three curve regimes** - Forward S-curves, bowed loops for level
//!   backward links and a two-quadratic hook for steep backward links
//! - **Change detection** - Paths are only recomputed when an anchor moves
//! - **Hover outlines** - A reversed copy of the path gives a wide, closed hit target
//! - **Trait-Based Architecture** - Bring your own element and connector
//!   types via `ElementGeometry` and `ConnectorModel`
//! - **Callback-Based Computation** - Slint reports geometry, Rust computes paths
//!
//! ## Quick Start
//!
//! ```slint
//! export struct Arrow { id: int, commands: string }
//!
//! export component MainWindow inherits Window {
//!     in property <[Arrow]> arrows;
//!     callback element-rect-changed(int, length, length, length, length);
//!
//!     for arrow in arrows: Path {
//!         commands: arrow.commands;
//!         stroke: black;
//!         stroke-width: 1px;
//!     }
//! }
//! ```
//!
//! ## Rust Helpers
//!
//! - [`compute_path`] - Curve between two anchors
//! - [`resolve_anchors`] - Container-local anchors from element bounds
//! - [`RenderCache`] - Per-connector change detection
//! - [`reverse_path`] / [`hover_outline`] - Reverse-path transform
//! - [`find_connector_at`] - Hit-test connectors at canvas coordinates
//! - [`GeometryCache`] / [`GeometryTracker`] - Element bounds reported by Slint
//! - [`ConnectorManager`] - Connectors bound to a Slint model
//! - [`ArrowsController`] - All of the above behind ready-made callbacks

pub mod point;
pub mod path;
pub mod reverse;
pub mod resolve;
pub mod render;
pub mod error;
pub mod marker;
pub mod config;
pub mod hit_test;
pub mod state;
pub mod tracking;
pub mod connector;
pub mod manager;
pub mod controller;

pub use point::{Anchors, Point};
pub use path::{
    compute_path, to_path_commands, CurveDescriptor, PathCommand, PathSegment, Regime,
    DEFAULT_CURVINESS,
};
pub use reverse::{hover_outline, reverse_path};
pub use resolve::{resolve_anchors, ElementGeometry, OffsetConfig, Rect, SimpleElementGeometry};
pub use render::RenderCache;
pub use error::{ConfigError, ConnectorError, Result};
pub use marker::{unique_marker_id, MarkerGeometry, DEFAULT_HEAD_SIZE};
pub use config::{ConfigOverrides, ConnectorConfig, HeadConfig};
pub use hit_test::{
    compute_hover_stroke_width, find_connector_at, ConnectorGeometry, SimpleConnectorGeometry,
    DEFAULT_HIT_SAMPLES, DEFAULT_MAX_HOVER_SIZE,
};
pub use state::GeometryCache;
pub use tracking::GeometryTracker;
pub use connector::{validate_connector, ConnectorModel, SimpleConnector};
pub use manager::{ConnectorHead, ConnectorManager, ConnectorRow};
pub use controller::ArrowsController;
