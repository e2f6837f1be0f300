use std::sync::Arc;

use chrono::Utc;
use log::{error as log_error, info as log_info, warn as log_warn};

use crate::domains::logger::{DomainLogger, DynLogger};

struct ConsoleLogger;

impl DomainLogger for ConsoleLogger {
    fn info(&self, msg: &str) {
        println!("{}", msg);
    }
    fn warn(&self, msg: &str) {
        println!("WARN: {}", msg);
    }
    fn error(&self, msg: &str) {
        eprintln!("ERROR: {}", msg);
    }
}

/// Console-backed logger; the fallback when no log file is configured.
pub fn console_logger() -> DynLogger {
    Arc::new(ConsoleLogger)
}

/// File-backed logger on top of `fast_log`'s rolling appender. `init` must
/// run once per process before the first log call.
pub struct FileLogger;

impl FileLogger {
    pub fn init(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fast_log::init(
            fast_log::config::Config::new()
                .console()
                .file(path)
                .level(log::LevelFilter::Info),
        )?;
        Ok(())
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        log_info!("{} - {}", Utc::now().to_rfc3339(), msg);
    }
    fn warn(&self, msg: &str) {
        log_warn!("{} - {}", Utc::now().to_rfc3339(), msg);
    }
    fn error(&self, msg: &str) {
        log_error!("{} - {}", Utc::now().to_rfc3339(), msg);
    }
}

pub fn file_logger(path: &str) -> Result<DynLogger, Box<dyn std::error::Error>> {
    FileLogger::init(path)?;
    Ok(Arc::new(FileLogger))
}

struct NoopLogger;

impl DomainLogger for NoopLogger {
    fn info(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

/// Silent logger, the default in unit tests.
pub fn noop_logger() -> DynLogger {
    Arc::new(NoopLogger)
}
