//! Connector configuration.
//!
//! A [`ConnectorConfig`] is fully defaulted and treated as immutable once a
//! connector is registered. Canvas-wide defaults and per-connector
//! [`ConfigOverrides`] are merged exactly once, in [`ConnectorConfig::merged`].
//!
//! # Example
//!
//! ```
//! use slint_arrows::{ConfigOverrides, ConnectorConfig};
//!
//! let defaults = ConnectorConfig::default().with_curviness(0.8).with_scale(2.0);
//! let config = defaults
//!     .merged(&ConfigOverrides { stroke_width: Some(3.0), ..Default::default() })
//!     .unwrap();
//!
//! assert_eq!(config.curviness, 0.8);
//! assert_eq!(config.stroke_width, 3.0);
//! ```

use crate::error::ConfigError;
use crate::hit_test::{compute_hover_stroke_width, DEFAULT_MAX_HOVER_SIZE};
use crate::marker::{MarkerGeometry, DEFAULT_HEAD_SIZE};
use crate::path::DEFAULT_CURVINESS;
use crate::resolve::OffsetConfig;
use slint::Color;

/// Arrowhead settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadConfig {
    pub size: f32,
    /// Fill colour; the stroke colour when `None`.
    pub color: Option<Color>,
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_HEAD_SIZE,
            color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    pub curviness: f32,
    /// Canvas zoom the element bounds are reported at.
    pub scale: f32,
    pub offset: OffsetConfig,
    /// Floor anchors and emitted path coordinates.
    pub only_integer_coords: bool,
    pub stroke_width: f32,
    pub color: Color,
    pub head: Option<HeadConfig>,
    /// Hover outline width cap, see [`compute_hover_stroke_width`].
    pub max_hover_size: f32,
    /// Whether the connector reacts to hover and clicks.
    pub interactive: bool,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            curviness: DEFAULT_CURVINESS,
            scale: 1.0,
            offset: OffsetConfig::default(),
            only_integer_coords: false,
            stroke_width: 1.0,
            color: Color::from_rgb_u8(0, 0, 0),
            head: None,
            max_hover_size: DEFAULT_MAX_HOVER_SIZE,
            interactive: false,
        }
    }
}

impl ConnectorConfig {
    pub fn with_curviness(mut self, curviness: f32) -> Self {
        self.curviness = curviness;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, offset: OffsetConfig) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_only_integer_coords(mut self, enabled: bool) -> Self {
        self.only_integer_coords = enabled;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.color = color;
        self.stroke_width = width;
        self
    }

    pub fn with_head(mut self, head: HeadConfig) -> Self {
        self.head = Some(head);
        self
    }

    pub fn with_max_hover_size(mut self, size: f32) -> Self {
        self.max_hover_size = size;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Check that every numeric field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if !self.curviness.is_finite() {
            return Err(ConfigError::InvalidCurviness(self.curviness));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width));
        }
        if !self.max_hover_size.is_finite() || self.max_hover_size < 0.0 {
            return Err(ConfigError::InvalidHoverSize(self.max_hover_size));
        }
        if let Some(head) = &self.head {
            if !head.size.is_finite() || head.size <= 0.0 {
                return Err(ConfigError::InvalidHeadSize(head.size));
            }
        }
        Ok(())
    }

    /// Resolve per-connector overrides against these defaults.
    ///
    /// An arrowhead is drawn when `with_head` says so, or, if unset, when
    /// the defaults have one or any head setting is overridden.
    pub fn merged(&self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let o = overrides;
        let offset = OffsetConfig::new(
            (
                o.offset_start_x.unwrap_or(self.offset.start.x),
                o.offset_start_y.unwrap_or(self.offset.start.y),
            ),
            (
                o.offset_end_x.unwrap_or(self.offset.end.x),
                o.offset_end_y.unwrap_or(self.offset.end.y),
            ),
        );

        let with_head = o.with_head.unwrap_or(
            self.head.is_some() || o.head_size.is_some() || o.head_color.is_some(),
        );
        let head = with_head.then(|| {
            let base = self.head.unwrap_or_default();
            HeadConfig {
                size: o.head_size.unwrap_or(base.size),
                color: o.head_color.or(base.color),
            }
        });

        let config = Self {
            curviness: o.curviness.unwrap_or(self.curviness),
            scale: o.scale.unwrap_or(self.scale),
            offset,
            only_integer_coords: o.only_integer_coords.unwrap_or(self.only_integer_coords),
            stroke_width: o.stroke_width.unwrap_or(self.stroke_width),
            color: o.color.unwrap_or(self.color),
            head,
            max_hover_size: o.max_hover_size.unwrap_or(self.max_hover_size),
            interactive: o.interactive.unwrap_or(self.interactive),
        };

        if let Err(err) = config.validate() {
            log::warn!("rejecting connector configuration: {}", err);
            return Err(err);
        }
        Ok(config)
    }

    /// Width of the invisible hover outline.
    pub fn hover_stroke_width(&self) -> f32 {
        compute_hover_stroke_width(self.stroke_width, self.scale, self.max_hover_size)
    }

    /// Whether a hover outline should be drawn at all.
    pub fn has_hover_outline(&self) -> bool {
        self.interactive && self.hover_stroke_width() > 0.0
    }

    pub fn marker(&self) -> Option<MarkerGeometry> {
        self.head.map(|h| MarkerGeometry::new(h.size))
    }

    pub fn head_color(&self) -> Color {
        self.head.and_then(|h| h.color).unwrap_or(self.color)
    }
}

/// Optional per-connector settings; `None` falls back to the defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub curviness: Option<f32>,
    pub scale: Option<f32>,
    pub offset_start_x: Option<f32>,
    pub offset_start_y: Option<f32>,
    pub offset_end_x: Option<f32>,
    pub offset_end_y: Option<f32>,
    pub only_integer_coords: Option<bool>,
    pub stroke_width: Option<f32>,
    pub color: Option<Color>,
    pub with_head: Option<bool>,
    pub head_size: Option<f32>,
    pub head_color: Option<Color>,
    pub max_hover_size: Option<f32>,
    pub interactive: Option<bool>,
}
