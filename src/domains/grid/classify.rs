use serde::{Deserialize, Serialize};

use super::heading::Heading;
use super::obstacles::Obstacle;
use super::robot::RobotPose;
use super::transform::{to_display, GRID_SIZE};
use crate::domains::planning::Path;

/// Semantic classification of one rendered cell. A renderer decides how
/// each variant looks; the layer precedence is already resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    /// Obstacle with its facing edge; Skip means no directional edge.
    Obstacle { facing: Heading },
    /// The robot's forward cell, carrying a detected marker id if any.
    RobotMarker {
        heading: Heading,
        marker: Option<i32>,
    },
    RobotBody,
    /// Path overlay. Step numbers are 1-based.
    PathCurrent { step: usize },
    PathVisited { step: usize, heading: Heading },
    PathFuture { step: usize },
}

/// The full 20x20 classification, indexed by rendered (row, col).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    cells: Vec<Vec<CellKind>>,
}

impl GridView {
    pub fn cell(&self, row: usize, col: usize) -> &CellKind {
        &self.cells[row][col]
    }

    pub fn rows(&self) -> &[Vec<CellKind>] {
        &self.cells
    }
}

/// Classify every cell of the grid. Precedence per cell is strict:
/// obstacles dominate the robot, and the robot dominates the path overlay.
/// Swapping these layers would silently change what the operator sees.
pub fn classify_grid(
    obstacles: &[Obstacle],
    robot: &RobotPose,
    path: Option<&Path>,
    current_index: usize,
    show_path: bool,
) -> GridView {
    let side = GRID_SIZE as usize;
    let mut cells = vec![vec![CellKind::Empty; side]; side];

    // Layers are painted bottom-up so each one simply overwrites the last.
    // Within a layer the earliest entry wins, hence the reversed iteration.
    if show_path {
        if let Some(path) = path {
            for (index, step) in path.steps().iter().enumerate().rev() {
                let display = to_display(step.x, step.y);
                let kind = if index == current_index {
                    CellKind::PathCurrent { step: index + 1 }
                } else if index < current_index {
                    CellKind::PathVisited {
                        step: index + 1,
                        heading: step.heading,
                    }
                } else {
                    CellKind::PathFuture { step: index + 1 }
                };
                cells[display.row as usize][display.col as usize] = kind;
            }
        }
    }

    let marker_cell = robot.marker_cell();
    for (cx, cy) in robot.footprint() {
        if !(0..GRID_SIZE as i32).contains(&cx) || !(0..GRID_SIZE as i32).contains(&cy) {
            continue;
        }
        let display = to_display(cx as u8, cy as u8);
        cells[display.row as usize][display.col as usize] = if (cx, cy) == marker_cell {
            CellKind::RobotMarker {
                heading: robot.heading,
                marker: robot.marker,
            }
        } else {
            CellKind::RobotBody
        };
    }

    for obstacle in obstacles.iter().rev() {
        let display = to_display(obstacle.x, obstacle.y);
        cells[display.row as usize][display.col as usize] = CellKind::Obstacle {
            facing: obstacle.facing,
        };
    }

    GridView { cells }
}
