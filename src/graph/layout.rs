use serde::{Deserialize, Serialize};

/// Grid coordinates of a node. Not physically simulated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal distance between a lane and its branch or loop lanes.
pub const LANE_OFFSET: f64 = 100.0;
/// Vertical nudge applied to nodes inside an `If` arm.
pub const BRANCH_NUDGE: f64 = 10.0;

/// A fixed horizontal lane. Nodes in a branch arm sit slightly lower than
/// their row so the fan-out edges stay readable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lane {
    pub x: f64,
    pub nudge: f64,
}

impl Lane {
    pub const fn new(x: f64) -> Self {
        Self { x, nudge: 0.0 }
    }

    pub fn then_arm(&self) -> Self {
        Self {
            x: self.x - LANE_OFFSET,
            nudge: BRANCH_NUDGE,
        }
    }

    pub fn else_arm(&self) -> Self {
        Self {
            x: self.x + LANE_OFFSET,
            nudge: BRANCH_NUDGE,
        }
    }

    pub fn loop_body(&self) -> Self {
        Self {
            x: self.x + LANE_OFFSET,
            nudge: self.nudge,
        }
    }
}

/// Running row counter mapping rows to vertical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    row: usize,
    origin_y: f64,
    pitch: f64,
}

impl LayoutCursor {
    pub fn new(origin_y: f64, pitch: f64) -> Self {
        Self {
            row: 0,
            origin_y,
            pitch,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn advance(&mut self) {
        self.row += 1;
    }

    /// Moves the cursor to an explicit row, e.g. back to the start of a
    /// sibling branch arm.
    pub fn seek(&mut self, row: usize) {
        self.row = row;
    }

    pub fn y_at(&self, row: usize) -> f64 {
        self.origin_y + self.pitch * row as f64
    }

    pub fn position(&self, lane: Lane) -> Position {
        Position::new(lane.x, self.y_at(self.row) + lane.nudge)
    }
}
