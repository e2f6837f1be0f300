pub mod http_planner;
pub mod logging;

pub use http_planner::HttpPlanService;
pub use logging::{console_logger, file_logger, noop_logger, FileLogger};
