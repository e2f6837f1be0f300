pub mod controller;
pub mod session;

pub use controller::{
    PlaybackController, PlaybackState, TickOutcome, DEFAULT_STEP_INTERVAL_MS,
    MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS,
};
pub use session::PlaybackSession;
