use serde::{Deserialize, Serialize};

use super::heading::Heading;
use crate::common::{DomainError, DomainResult};
use crate::domains::planning::PathStep;

/// The robot's displayed pose. The 3x3 footprint is centred on (x, y), so
/// both coordinates stay within [1, 18].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPose {
    pub x: u8,
    pub y: u8,
    pub heading: Heading,
    /// Marker id detected at the forward cell, if any.
    pub marker: Option<i32>,
}

impl Default for RobotPose {
    fn default() -> Self {
        Self {
            x: 1,
            y: 1,
            heading: Heading::North,
            marker: None,
        }
    }
}

impl RobotPose {
    /// Operator "set position" action. Clears any detected marker.
    pub fn set_pose(&mut self, x: u8, y: u8, heading: Heading) -> DomainResult<()> {
        if !heading.is_cardinal() {
            return Err(DomainError::InvalidCommand {
                reason: "robot heading must be one of the four cardinal directions".to_string(),
            });
        }
        if !(1..=18).contains(&x) || !(1..=18).contains(&y) {
            return Err(DomainError::InvalidCommand {
                reason: format!(
                    "robot centre ({}, {}) would push the 3x3 footprint off the grid",
                    x, y
                ),
            });
        }
        self.x = x;
        self.y = y;
        self.heading = heading;
        self.marker = None;
        Ok(())
    }

    /// Overwrite the displayed pose from a path step during playback.
    /// Called only when the playback index changes.
    pub fn project_from_step(&mut self, step: &PathStep) {
        self.x = step.x;
        self.y = step.y;
        self.heading = step.heading;
        self.marker = step.marker();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// World coordinates of the marker cell, one step forward of centre.
    pub fn marker_cell(&self) -> (i32, i32) {
        let (dx, dy) = self.heading.offset();
        (self.x as i32 + dx, self.y as i32 + dy)
    }

    /// All nine footprint cells in world coordinates.
    pub fn footprint(&self) -> Vec<(i32, i32)> {
        let mut cells = Vec::with_capacity(9);
        for dx in -1..=1 {
            for dy in -1..=1 {
                cells.push((self.x as i32 + dx, self.y as i32 + dy));
            }
        }
        cells
    }
}
