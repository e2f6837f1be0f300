pub mod simulator;

pub use simulator::{Simulator, WorldSnapshot};
