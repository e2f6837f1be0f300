pub mod classify;
pub mod heading;
pub mod input;
pub mod obstacles;
pub mod robot;
pub mod transform;

pub use classify::{classify_grid, CellKind, GridView};
pub use heading::Heading;
pub use input::{parse_obstacle_coord, parse_robot_coord};
pub use obstacles::{Obstacle, ObstacleRegistry, MAX_OBSTACLES};
pub use robot::RobotPose;
pub use transform::{from_display, to_display, DisplayCell, GRID_SIZE};
