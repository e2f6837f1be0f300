pub mod ports;
pub mod types;

pub use ports::{DynPlanService, PlanService};
pub use types::{ObstacleSpec, Path, PathStep, PlanRequest, PlanResponse, PlanResult, NO_MARKER};
