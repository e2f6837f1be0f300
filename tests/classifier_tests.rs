use gridbot_sim::domains::grid::{
    classify_grid, to_display, CellKind, GridView, Heading, Obstacle, RobotPose, GRID_SIZE,
};
use gridbot_sim::domains::planning::{Path, PathStep, NO_MARKER};

fn obstacle(id: u8, x: u8, y: u8, facing: Heading) -> Obstacle {
    Obstacle { id, x, y, facing }
}

fn step(x: u8, y: u8, heading: Heading) -> PathStep {
    PathStep {
        x,
        y,
        heading,
        marker_id: NO_MARKER,
    }
}

fn cell_at(view: &GridView, x: u8, y: u8) -> &CellKind {
    let display = to_display(x, y);
    view.cell(display.row as usize, display.col as usize)
}

fn robot_at(x: u8, y: u8, heading: Heading) -> RobotPose {
    let mut robot = RobotPose::default();
    robot.set_pose(x, y, heading).unwrap();
    robot
}

#[cfg(test)]
mod precedence_tests {
    use super::*;

    #[test]
    fn test_obstacle_dominates_robot() {
        // Obstacle directly on the robot's centre cell.
        let obstacles = vec![obstacle(1, 5, 5, Heading::South)];
        let robot = robot_at(5, 5, Heading::North);

        let view = classify_grid(&obstacles, &robot, None, 0, false);
        assert_eq!(
            cell_at(&view, 5, 5),
            &CellKind::Obstacle {
                facing: Heading::South
            }
        );
    }

    #[test]
    fn test_obstacle_dominates_marker_cell() {
        let obstacles = vec![obstacle(1, 5, 6, Heading::Skip)];
        let robot = robot_at(5, 5, Heading::North);

        let view = classify_grid(&obstacles, &robot, None, 0, false);
        assert_eq!(
            cell_at(&view, 5, 6),
            &CellKind::Obstacle {
                facing: Heading::Skip
            }
        );
    }

    #[test]
    fn test_robot_dominates_path_overlay() {
        let path = Path::new(vec![step(5, 5, Heading::North), step(5, 6, Heading::North)]).unwrap();
        let robot = robot_at(5, 5, Heading::North);

        let view = classify_grid(&[], &robot, Some(&path), 0, true);
        // Both steps land inside the footprint, so neither shows as path.
        assert_eq!(
            cell_at(&view, 5, 6),
            &CellKind::RobotMarker {
                heading: Heading::North,
                marker: None
            }
        );
        assert!(matches!(cell_at(&view, 5, 5), CellKind::RobotBody));
    }
}

#[cfg(test)]
mod robot_rendering_tests {
    use super::*;

    #[test]
    fn test_footprint_renders_marker_and_eight_body_cells() {
        let robot = robot_at(10, 10, Heading::East);
        let view = classify_grid(&[], &robot, None, 0, false);

        let mut markers = 0;
        let mut bodies = 0;
        for row in 0..GRID_SIZE as usize {
            for col in 0..GRID_SIZE as usize {
                match view.cell(row, col) {
                    CellKind::RobotMarker { heading, marker } => {
                        markers += 1;
                        assert_eq!(*heading, Heading::East);
                        assert!(marker.is_none());
                    }
                    CellKind::RobotBody => bodies += 1,
                    _ => {}
                }
            }
        }
        assert_eq!(markers, 1);
        assert_eq!(bodies, 8);

        // Marker cell is one step forward of centre.
        assert_eq!(
            cell_at(&view, 11, 10),
            &CellKind::RobotMarker {
                heading: Heading::East,
                marker: None
            }
        );
    }

    #[test]
    fn test_marker_cell_carries_detected_id() {
        let mut robot = robot_at(10, 10, Heading::North);
        robot.project_from_step(&PathStep {
            x: 10,
            y: 10,
            heading: Heading::North,
            marker_id: 4,
        });

        let view = classify_grid(&[], &robot, None, 0, false);
        assert_eq!(
            cell_at(&view, 10, 11),
            &CellKind::RobotMarker {
                heading: Heading::North,
                marker: Some(4)
            }
        );
    }
}

#[cfg(test)]
mod path_overlay_tests {
    use super::*;

    fn three_step_path() -> Path {
        Path::new(vec![
            step(10, 10, Heading::North),
            step(10, 11, Heading::North),
            step(10, 12, Heading::East),
        ])
        .unwrap()
    }

    #[test]
    fn test_visited_current_and_future_cells() {
        // Robot parked far away so it does not cover the path.
        let robot = robot_at(1, 1, Heading::North);
        let view = classify_grid(&[], &robot, Some(&three_step_path()), 1, true);

        assert_eq!(
            cell_at(&view, 10, 10),
            &CellKind::PathVisited {
                step: 1,
                heading: Heading::North
            }
        );
        assert_eq!(cell_at(&view, 10, 11), &CellKind::PathCurrent { step: 2 });
        assert_eq!(cell_at(&view, 10, 12), &CellKind::PathFuture { step: 3 });
    }

    #[test]
    fn test_overlay_hidden_when_disabled() {
        let robot = robot_at(1, 1, Heading::North);
        let view = classify_grid(&[], &robot, Some(&three_step_path()), 1, false);

        assert_eq!(cell_at(&view, 10, 10), &CellKind::Empty);
        assert_eq!(cell_at(&view, 10, 11), &CellKind::Empty);
        assert_eq!(cell_at(&view, 10, 12), &CellKind::Empty);
    }

    #[test]
    fn test_revisited_cell_shows_earliest_step() {
        // The path returns to (10, 10); the first visit wins the cell.
        let path = Path::new(vec![
            step(10, 10, Heading::North),
            step(10, 11, Heading::South),
            step(10, 10, Heading::South),
        ])
        .unwrap();
        let robot = robot_at(1, 1, Heading::North);

        let view = classify_grid(&[], &robot, Some(&path), 1, true);
        assert_eq!(
            cell_at(&view, 10, 10),
            &CellKind::PathVisited {
                step: 1,
                heading: Heading::North
            }
        );
    }

    #[test]
    fn test_everything_else_is_empty() {
        let robot = robot_at(1, 1, Heading::North);
        let view = classify_grid(&[], &robot, None, 0, false);

        let mut empty = 0;
        for row in 0..GRID_SIZE as usize {
            for col in 0..GRID_SIZE as usize {
                if view.cell(row, col) == &CellKind::Empty {
                    empty += 1;
                }
            }
        }
        // 400 cells minus the nine-cell footprint.
        assert_eq!(empty, 391);
    }
}
