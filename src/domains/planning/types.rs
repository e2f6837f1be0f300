use serde::{Deserialize, Serialize};

use crate::common::{DomainError, DomainResult};
use crate::domains::grid::{Heading, Obstacle, RobotPose};

/// Marker value the planner sends when a step carries no detection.
pub const NO_MARKER: i32 = -1;

/// One waypoint of a planned traversal, in the planner's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub x: u8,
    pub y: u8,
    #[serde(rename = "d")]
    pub heading: Heading,
    #[serde(rename = "s", default = "default_marker")]
    pub marker_id: i32,
}

fn default_marker() -> i32 {
    NO_MARKER
}

impl PathStep {
    pub fn marker(&self) -> Option<i32> {
        (self.marker_id != NO_MARKER).then_some(self.marker_id)
    }
}

/// Ordered, non-empty traversal received as a unit from the planning
/// service. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path(Vec<PathStep>);

impl Path {
    pub fn new(steps: Vec<PathStep>) -> DomainResult<Self> {
        if steps.is_empty() {
            return Err(DomainError::PlanUnavailable {
                reason: "planner returned an empty path".to_string(),
            });
        }
        Ok(Self(steps))
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    /// Indexing is safe for any index the playback controller holds; its
    /// invariant keeps the index within [0, len).
    pub fn step(&self, index: usize) -> &PathStep {
        &self.0[index]
    }
}

/// Obstacle in the shape the planning service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub x: u8,
    pub y: u8,
    pub direction: Heading,
}

/// Request payload for one plan round trip. `retrying` is always false:
/// there is no client-side retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub obstacles: Vec<ObstacleSpec>,
    pub robot_x: u8,
    pub robot_y: u8,
    pub robot_dir: Heading,
    pub retrying: bool,
}

impl PlanRequest {
    pub fn from_world(obstacles: &[Obstacle], robot: &RobotPose) -> Self {
        Self {
            obstacles: obstacles
                .iter()
                .map(|ob| ObstacleSpec {
                    x: ob.x,
                    y: ob.y,
                    direction: ob.facing,
                })
                .collect(),
            robot_x: robot.x,
            robot_y: robot.y,
            robot_dir: robot.heading,
            retrying: false,
        }
    }
}

/// Raw response shape as received from the planning service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanResponse {
    #[serde(default)]
    pub path: Option<Vec<PathStep>>,
    #[serde(default)]
    pub commands: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A validated plan: the path plus the motion commands with snapshot
/// markers filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    pub path: Path,
    pub commands: Vec<String>,
}

impl PlanResult {
    /// Validate a raw response. A missing or empty `path` invalidates the
    /// whole response. `SNAP*` command tags are diagnostic snapshot markers
    /// and are dropped from the command list, never from the path.
    pub fn from_response(response: PlanResponse) -> DomainResult<Self> {
        if let Some(error) = response.error {
            return Err(DomainError::PlanUnavailable { reason: error });
        }
        let steps = response.path.ok_or_else(|| DomainError::PlanUnavailable {
            reason: "planner response carried no path".to_string(),
        })?;
        let path = Path::new(steps)?;
        let commands = response
            .commands
            .unwrap_or_default()
            .into_iter()
            .filter(|command| !command.starts_with("SNAP"))
            .collect();
        Ok(Self { path, commands })
    }
}
