//! Common test utilities for integration tests.

#![allow(dead_code)]

use slint::{Model, VecModel};
use slint_arrows::{ArrowsController, ConfigOverrides, ConnectorRow, SimpleConnector};
use std::cell::RefCell;
use std::rc::Rc;

/// Element size used by every board.
pub const ELEMENT_WIDTH: f32 = 100.0;
pub const ELEMENT_HEIGHT: f32 = 50.0;

/// Counts how often the bound model was handed a row, per connector ID.
#[derive(Default, Clone)]
pub struct RowWriteTracker {
    pub writes: Rc<RefCell<Vec<i32>>>,
}

impl RowWriteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn count_for(&self, id: i32) -> usize {
        self.writes.borrow().iter().filter(|&&w| w == id).count()
    }

    /// Clear all recorded writes.
    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }
}

/// A canvas with a controller, a bound row model and a write tracker.
///
/// The container sits at (20, 40) in window coordinates, the way a scrolled
/// or offset canvas would report itself.
pub struct Board {
    pub ctrl: ArrowsController,
    pub model: Rc<VecModel<ConnectorRow>>,
    pub writes: RowWriteTracker,
}

impl Board {
    pub const CONTAINER_X: f32 = 20.0;
    pub const CONTAINER_Y: f32 = 40.0;

    pub fn new() -> Self {
        Self::with_controller(ArrowsController::new())
    }

    pub fn with_controller(ctrl: ArrowsController) -> Self {
        let model = Rc::new(VecModel::<ConnectorRow>::default());
        let writes = RowWriteTracker::new();
        {
            let writes = writes.clone();
            ctrl.bind_model(model.clone(), move |row| {
                writes.writes.borrow_mut().push(row.id);
                row.clone()
            });
        }
        ctrl.handle_container_rect(Self::CONTAINER_X, Self::CONTAINER_Y, 1200.0, 800.0);
        Self { ctrl, model, writes }
    }

    /// Report an element at container-local (x, y).
    pub fn place(&self, id: i32, x: f32, y: f32) {
        self.ctrl.handle_element_rect(
            id,
            x + Self::CONTAINER_X,
            y + Self::CONTAINER_Y,
            ELEMENT_WIDTH,
            ELEMENT_HEIGHT,
        );
    }

    pub fn connect(&self, id: i32, start: i32, end: i32) {
        self.ctrl
            .add_connector(SimpleConnector::new(id, start, end))
            .expect("connector should be accepted");
    }

    pub fn connect_interactive(&self, id: i32, start: i32, end: i32) {
        let connector = SimpleConnector::new(id, start, end).with_overrides(ConfigOverrides {
            interactive: Some(true),
            ..Default::default()
        });
        self.ctrl
            .add_connector(connector)
            .expect("connector should be accepted");
    }

    /// Row of a connector as the view sees it.
    pub fn row(&self, id: i32) -> ConnectorRow {
        self.model
            .iter()
            .find(|r| r.id == id)
            .expect("row should be bound")
    }
}

/// Container-local anchor on the right edge of an element placed at (x, y).
pub fn start_anchor(x: f32, y: f32) -> (f32, f32) {
    (x + ELEMENT_WIDTH, y + ELEMENT_HEIGHT / 2.0)
}

/// Container-local anchor on the left edge of an element placed at (x, y).
pub fn end_anchor(x: f32, y: f32) -> (f32, f32) {
    (x, y + ELEMENT_HEIGHT / 2.0)
}
