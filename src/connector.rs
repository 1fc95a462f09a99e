use crate::config::ConfigOverrides;
use crate::error::{ConnectorError, Result};
use slint::Color;

/// Trait for connector data the manager can draw.
///
/// Implement this trait for your own connector type to use it with
/// [`ConnectorManager`](crate::ConnectorManager).
///
/// # Example
///
/// ```ignore
/// struct Dependency {
///     id: i32,
///     from_task: i32,
///     to_task: i32,
///     critical: bool,
/// }
///
/// impl ConnectorModel for Dependency {
///     fn id(&self) -> i32 { self.id }
///     fn start_element_id(&self) -> i32 { self.from_task }
///     fn end_element_id(&self) -> i32 { self.to_task }
///     fn overrides(&self) -> ConfigOverrides {
///         ConfigOverrides {
///             color: self.critical.then(|| Color::from_rgb_u8(220, 40, 40)),
///             ..Default::default()
///         }
///     }
/// }
/// ```
pub trait ConnectorModel {
    /// Unique identifier for the connector
    fn id(&self) -> i32;
    /// Element the connector leaves from (right edge)
    fn start_element_id(&self) -> i32;
    /// Element the connector points at (left edge)
    fn end_element_id(&self) -> i32;
    /// Per-connector settings on top of the manager defaults
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides::default()
    }
}

/// Simple connector data structure implementing [`ConnectorModel`].
#[derive(Clone, Debug, Default)]
pub struct SimpleConnector {
    pub id: i32,
    pub start_element_id: i32,
    pub end_element_id: i32,
    pub overrides: ConfigOverrides,
}

impl SimpleConnector {
    /// Create a connector that uses the manager defaults.
    pub fn new(id: i32, start_element_id: i32, end_element_id: i32) -> Self {
        Self {
            id,
            start_element_id,
            end_element_id,
            overrides: ConfigOverrides::default(),
        }
    }

    /// Create a connector with its own stroke colour.
    pub fn with_color(id: i32, start_element_id: i32, end_element_id: i32, color: Color) -> Self {
        Self {
            overrides: ConfigOverrides {
                color: Some(color),
                ..Default::default()
            },
            ..Self::new(id, start_element_id, end_element_id)
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

impl ConnectorModel for SimpleConnector {
    fn id(&self) -> i32 { self.id }
    fn start_element_id(&self) -> i32 { self.start_element_id }
    fn end_element_id(&self) -> i32 { self.end_element_id }
    fn overrides(&self) -> ConfigOverrides { self.overrides.clone() }
}

/// Check a new connector against the existing ones.
///
/// Rejects connectors whose id is already taken and connectors that start and
/// end on the same element (they have no meaningful left-to-right route).
/// Whether the elements exist is not checked: they may be reported later.
pub fn validate_connector<'a, L, I>(connector: &L, existing: I) -> Result<()>
where
    L: ConnectorModel,
    I: IntoIterator<Item = &'a L>,
    L: 'a,
{
    let id = connector.id();
    if connector.start_element_id() == connector.end_element_id() {
        return Err(ConnectorError::SameElement {
            id,
            element: connector.start_element_id(),
        });
    }
    if existing.into_iter().any(|c| c.id() == id) {
        return Err(ConnectorError::DuplicateConnector(id));
    }
    Ok(())
}
