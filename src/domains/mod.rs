pub mod grid;
pub mod logger;
pub mod planning;
pub mod playback;

pub use logger::{DomainLogger, DynLogger};
