use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::common::DomainResult;
use crate::domains::grid::{
    classify_grid, GridView, Heading, Obstacle, ObstacleRegistry, RobotPose,
};
use crate::domains::logger::DynLogger;
use crate::domains::planning::{DynPlanService, PlanRequest};
use crate::domains::playback::{PlaybackController, PlaybackState, TickOutcome};

/// Everything the operator can mutate, behind one lock so the playback
/// timer task and direct calls never interleave mid-update.
struct WorldState {
    obstacles: ObstacleRegistry,
    robot: RobotPose,
    playback: PlaybackController,
    show_path: bool,
    plan_in_flight: bool,
    last_error: Option<String>,
    timer: Option<JoinHandle<()>>,
}

impl WorldState {
    fn new() -> Self {
        Self {
            obstacles: ObstacleRegistry::new(),
            robot: RobotPose::default(),
            playback: PlaybackController::new(),
            show_path: false,
            plan_in_flight: false,
            last_error: None,
            timer: None,
        }
    }
}

/// Serializable summary of the world for a presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
    pub robot: RobotPose,
    pub obstacles: Vec<Obstacle>,
    pub playback: PlaybackState,
    pub current_index: Option<usize>,
    pub path_len: Option<usize>,
    pub commands: Vec<String>,
    pub show_path: bool,
    pub last_error: Option<String>,
    pub taken_at: DateTime<Utc>,
}

/// Application service tying the world model, the playback state machine
/// and the planning port together. All mutation goes through here.
pub struct Simulator {
    state: Arc<Mutex<WorldState>>,
    planner: DynPlanService,
    logger: DynLogger,
}

impl Simulator {
    pub fn new(planner: DynPlanService, logger: DynLogger) -> Self {
        Self {
            state: Arc::new(Mutex::new(WorldState::new())),
            planner,
            logger,
        }
    }

    /// Place an obstacle. A (0, 0) input is skipped and a full registry is
    /// logged rather than failed; neither disturbs the world.
    pub async fn add_obstacle(&self, x: u8, y: u8, facing: Heading) -> Option<u8> {
        let mut state = self.state.lock().await;
        match state.obstacles.add(x, y, facing) {
            Ok(Some(id)) => {
                self.logger.info(&format!(
                    "placed obstacle {} at ({}, {}) facing {}",
                    id,
                    x,
                    y,
                    facing.label()
                ));
                Some(id)
            }
            Ok(None) => None,
            Err(err) => {
                self.logger.warn(&err.to_string());
                None
            }
        }
    }

    /// Remove an obstacle; a silent no-op while a path exists or a plan
    /// request is in flight.
    pub async fn remove_obstacle(&self, id: u8) {
        let mut state = self.state.lock().await;
        if state.playback.session().is_some() || state.plan_in_flight {
            self.logger
                .info(&format!("ignoring removal of obstacle {}: a path is active", id));
            return;
        }
        state.obstacles.remove(id);
    }

    pub async fn set_robot_pose(&self, x: u8, y: u8, heading: Heading) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        state.robot.set_pose(x, y, heading)
    }

    pub async fn set_show_path(&self, show: bool) {
        let mut state = self.state.lock().await;
        state.show_path = show;
    }

    pub async fn set_step_interval_ms(&self, interval_ms: u64) {
        let mut state = self.state.lock().await;
        state.playback.set_step_interval_ms(interval_ms);
    }

    /// One plan round trip. Guarded so two requests are never in flight at
    /// once; on success playback is seeded at step 0, on failure the
    /// message is kept for display and the world stays usable.
    pub async fn request_plan(&self) {
        let request_id = Uuid::new_v4();
        let request = {
            let mut state = self.state.lock().await;
            if state.plan_in_flight {
                self.logger
                    .warn("ignoring plan request: another request is in flight");
                return;
            }
            if state.obstacles.is_empty() {
                state.last_error =
                    Some("Please add at least one obstacle to run the simulation.".to_string());
                return;
            }
            state.plan_in_flight = true;
            PlanRequest::from_world(state.obstacles.list(), &state.robot)
        };

        self.logger.info(&format!(
            "requesting plan {} for {} obstacle(s)",
            request_id,
            request.obstacles.len()
        ));
        let outcome = self.planner.request_plan(&request).await;

        let mut state = self.state.lock().await;
        state.plan_in_flight = false;
        match outcome {
            Ok(plan) => {
                self.logger.info(&format!(
                    "plan {} ready: {} step(s), {} command(s)",
                    request_id,
                    plan.path.len(),
                    plan.commands.len()
                ));
                Self::stop_timer(&mut state);
                {
                    let WorldState {
                        robot, playback, ..
                    } = &mut *state;
                    playback.seed(plan, robot);
                }
                state.last_error = None;
            }
            Err(err) => {
                self.logger
                    .error(&format!("plan {} failed: {}", request_id, err));
                state.last_error = Some(err.to_string());
            }
        }
    }

    /// Start timed auto-advance. Spawns the single timer task; repeated
    /// calls while playing are no-ops, and a replaced timer is aborted so
    /// two can never stack.
    pub async fn play(&self) {
        let mut state = self.state.lock().await;
        let Some(epoch) = state.playback.play() else {
            return;
        };
        let interval = Duration::from_millis(state.playback.step_interval_ms());

        let shared = Arc::clone(&self.state);
        let logger = Arc::clone(&self.logger);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // the first tick completes immediately
            loop {
                ticker.tick().await;
                let mut state = shared.lock().await;
                let WorldState {
                    robot, playback, ..
                } = &mut *state;
                match playback.tick(epoch, robot) {
                    TickOutcome::Advanced => {}
                    TickOutcome::Finished => {
                        logger.info("playback reached the final step");
                        break;
                    }
                    TickOutcome::Stale => break,
                }
            }
        });
        if let Some(old) = state.timer.replace(handle) {
            old.abort();
        }
    }

    /// Stop auto-advance, keeping the current step.
    pub async fn pause(&self) {
        let mut state = self.state.lock().await;
        state.playback.pause();
        Self::stop_timer(&mut state);
    }

    pub async fn step_forward(&self) {
        let mut state = self.state.lock().await;
        let WorldState {
            robot, playback, ..
        } = &mut *state;
        playback.step_forward(robot);
    }

    pub async fn step_backward(&self) {
        let mut state = self.state.lock().await;
        let WorldState {
            robot, playback, ..
        } = &mut *state;
        playback.step_backward(robot);
    }

    pub async fn seek_start(&self) {
        let mut state = self.state.lock().await;
        Self::stop_timer(&mut state);
        let WorldState {
            robot, playback, ..
        } = &mut *state;
        playback.seek_start(robot);
    }

    pub async fn seek_end(&self) {
        let mut state = self.state.lock().await;
        Self::stop_timer(&mut state);
        let WorldState {
            robot, playback, ..
        } = &mut *state;
        playback.seek_end(robot);
    }

    /// Discard the path and put the robot back at the start, keeping the
    /// placed obstacles.
    pub async fn reset_path(&self) {
        let mut state = self.state.lock().await;
        Self::stop_timer(&mut state);
        state.playback.reset();
        state.robot.reset();
        state.last_error = None;
    }

    /// Reset everything, obstacles included.
    pub async fn reset_all(&self) {
        let mut state = self.state.lock().await;
        Self::stop_timer(&mut state);
        state.playback.reset();
        state.robot.reset();
        state.obstacles.clear();
        state.last_error = None;
    }

    /// Current semantic classification of all 400 cells.
    pub async fn render_grid(&self) -> GridView {
        let state = self.state.lock().await;
        classify_grid(
            state.obstacles.list(),
            &state.robot,
            state.playback.session().map(|s| &s.path),
            state.playback.current_index().unwrap_or(0),
            state.show_path,
        )
    }

    pub async fn snapshot(&self) -> WorldSnapshot {
        let state = self.state.lock().await;
        WorldSnapshot {
            robot: state.robot.clone(),
            obstacles: state.obstacles.list().to_vec(),
            playback: state.playback.state(),
            current_index: state.playback.current_index(),
            path_len: state.playback.session().map(|s| s.path.len()),
            commands: state
                .playback
                .session()
                .map(|s| s.commands.clone())
                .unwrap_or_default(),
            show_path: state.show_path,
            last_error: state.last_error.clone(),
            taken_at: Utc::now(),
        }
    }

    pub async fn playback_state(&self) -> PlaybackState {
        self.state.lock().await.playback.state()
    }

    pub async fn current_index(&self) -> Option<usize> {
        self.state.lock().await.playback.current_index()
    }

    pub async fn robot_pose(&self) -> RobotPose {
        self.state.lock().await.robot.clone()
    }

    pub async fn obstacles(&self) -> Vec<Obstacle> {
        self.state.lock().await.obstacles.list().to_vec()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.lock().await.last_error.clone()
    }

    fn stop_timer(state: &mut WorldState) {
        if let Some(handle) = state.timer.take() {
            handle.abort();
        }
    }
}
