use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use gridbot_sim::adapters::outbound::{console_logger, file_logger, HttpPlanService};
use gridbot_sim::application::Simulator;
use gridbot_sim::domains::grid::Heading;
use gridbot_sim::domains::planning::DynPlanService;
use gridbot_sim::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Starting gridbot-sim");

    let config = match Config::from_file("config.toml").await {
        Ok(config) => config,
        Err(err) => {
            warn!("config.toml not loaded ({}), using defaults", err);
            Config::default()
        }
    };
    info!("Planner endpoint: {}", config.planner.base_url);

    let logger = match &config.log_file {
        Some(path) => file_logger(path)?,
        None => console_logger(),
    };

    let planner: DynPlanService = Arc::new(HttpPlanService::new(
        config.planner.base_url.as_str(),
        Duration::from_secs(config.planner.timeout_secs),
    )?);

    let simulator = Simulator::new(planner, logger);
    simulator
        .set_step_interval_ms(config.playback.step_interval_ms)
        .await;

    // Demo world: one obstacle ahead of the robot, then ask the planner
    // for a traversal (non-fatal if the service is down).
    simulator.add_obstacle(5, 5, Heading::North).await;
    if let Err(err) = simulator.set_robot_pose(1, 1, Heading::North).await {
        warn!("failed to place robot: {}", err);
    }
    simulator.request_plan().await;

    let snapshot = simulator.snapshot().await;
    match &snapshot.last_error {
        Some(message) => warn!("no plan: {}", message),
        None => info!(
            "plan ready: {} step(s), playback {:?}",
            snapshot.path_len.unwrap_or(0),
            snapshot.playback
        ),
    }

    Ok(())
}
