//! Errors of the connector management surface.
//!
//! Geometry never fails; these only come out of registering connectors and
//! building their configuration.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f32),
    #[error("curviness must be finite, got {0}")]
    InvalidCurviness(f32),
    #[error("stroke width must be finite and non-negative, got {0}")]
    InvalidStrokeWidth(f32),
    #[error("hover size must be finite and non-negative, got {0}")]
    InvalidHoverSize(f32),
    #[error("arrowhead size must be finite and positive, got {0}")]
    InvalidHeadSize(f32),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectorError {
    #[error("connector {0} already exists")]
    DuplicateConnector(i32),
    #[error("connector {0} not found")]
    ConnectorNotFound(i32),
    #[error("connector {id} starts and ends on element {element}")]
    SameElement { id: i32, element: i32 },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
