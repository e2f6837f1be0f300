use serde::{Deserialize, Serialize};

use crate::domains::planning::{Path, PlanResult};

/// Live playback material: the fetched path, the filtered command list and
/// the current step. Exists only between a successful plan and a reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSession {
    pub path: Path,
    pub commands: Vec<String>,
    pub current_index: usize,
}

impl PlaybackSession {
    pub fn new(plan: PlanResult) -> Self {
        Self {
            path: plan.path,
            commands: plan.commands,
            current_index: 0,
        }
    }

    pub fn at_last_step(&self) -> bool {
        self.current_index == self.path.last_index()
    }
}
