use serde::{Deserialize, Serialize};

use super::session::PlaybackSession;
use crate::domains::grid::RobotPose;
use crate::domains::planning::PlanResult;

pub const MIN_STEP_INTERVAL_MS: u64 = 100;
pub const MAX_STEP_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Idle,
    Ready,
    Playing,
}

/// Outcome of one auto-advance tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Advanced one step; keep the timer running.
    Advanced,
    /// Advanced onto the last step; the timer must stop.
    Finished,
    /// The tick belonged to a cancelled timer; nothing happened.
    Stale,
}

/// Playback state machine. Pure state: the repeating timer lives in the
/// application service, which calls `tick` with the epoch it started under.
/// Bumping the epoch invalidates every outstanding tick, so a timer that
/// fires after cancellation cannot mutate anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackController {
    session: Option<PlaybackSession>,
    playing: bool,
    step_interval_ms: u64,
    epoch: u64,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    pub fn new() -> Self {
        Self {
            session: None,
            playing: false,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            epoch: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        match (&self.session, self.playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Ready,
        }
    }

    /// Ready with the index on the final step.
    pub fn is_complete(&self) -> bool {
        !self.playing && self.session.as_ref().is_some_and(|s| s.at_last_step())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.current_index)
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    pub fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms
    }

    /// Clamp and store the auto-play interval.
    pub fn set_step_interval_ms(&mut self, interval_ms: u64) {
        self.step_interval_ms = interval_ms.clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Seed a fresh session from a successful plan and project step 0 onto
    /// the robot immediately.
    pub fn seed(&mut self, plan: PlanResult, robot: &mut RobotPose) {
        self.cancel_timer();
        let session = PlaybackSession::new(plan);
        robot.project_from_step(session.path.step(0));
        self.session = Some(session);
    }

    /// Start auto-play. Returns the epoch the caller's timer must carry, or
    /// None when there is nothing to play (no session, already playing, or
    /// no step remaining after the current index).
    pub fn play(&mut self) -> Option<u64> {
        let session = self.session.as_ref()?;
        if self.playing || session.at_last_step() {
            return None;
        }
        self.playing = true;
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Stop auto-play, keeping the index where it is.
    pub fn pause(&mut self) {
        self.cancel_timer();
    }

    /// One timer tick under `epoch`. Stale ticks are no-ops.
    pub fn tick(&mut self, epoch: u64, robot: &mut RobotPose) -> TickOutcome {
        if epoch != self.epoch || !self.playing {
            return TickOutcome::Stale;
        }
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Stale;
        };
        session.current_index += 1;
        robot.project_from_step(session.path.step(session.current_index));
        if session.at_last_step() {
            self.cancel_timer();
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }

    /// Manual stepping; ignored while auto-playing.
    pub fn step_forward(&mut self, robot: &mut RobotPose) {
        if self.playing {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            if session.current_index < session.path.last_index() {
                session.current_index += 1;
                robot.project_from_step(session.path.step(session.current_index));
            }
        }
    }

    /// Manual stepping; ignored while auto-playing.
    pub fn step_backward(&mut self, robot: &mut RobotPose) {
        if self.playing {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            if session.current_index > 0 {
                session.current_index -= 1;
                robot.project_from_step(session.path.step(session.current_index));
            }
        }
    }

    /// Jump to step 0, stopping any running timer.
    pub fn seek_start(&mut self, robot: &mut RobotPose) {
        self.cancel_timer();
        if let Some(session) = self.session.as_mut() {
            session.current_index = 0;
            robot.project_from_step(session.path.step(0));
        }
    }

    /// Jump to the final step, stopping any running timer.
    pub fn seek_end(&mut self, robot: &mut RobotPose) {
        self.cancel_timer();
        if let Some(session) = self.session.as_mut() {
            session.current_index = session.path.last_index();
            robot.project_from_step(session.path.step(session.current_index));
        }
    }

    /// Discard the session entirely. Any outstanding tick becomes stale.
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.session = None;
    }

    fn cancel_timer(&mut self) {
        self.playing = false;
        self.epoch += 1;
    }
}
