//! Logging utilities for debugging and error tracking
//!
//! Two sinks: an in-memory ring shared across the application (drives the
//! logs dialog in the UI) and an optional file logger installed through
//! `fern` behind the `log` facade when logging is enabled in the config.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;

static FILE_LOGGER: OnceCell<()> = OnceCell::new();

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Build a logger according to the `[logging]` config section.
    ///
    /// When enabled, also installs the global file logger so `log::info!`
    /// and friends end up in the log file.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            init_file_logging()?;
        }
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled,
        })
    }

    /// Whether file logging was requested for this logger
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
        if self.enabled {
            log::info!("{}", message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            // Reverse to show newest logs first (descending order by timestamp)
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Path of the log file used by the file logger
    pub fn get_log_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().context("Could not determine data directory")?;
        Ok(data_dir.join("buddyterm").join("buddyterm.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global fern file logger.
///
/// Installation happens at most once per process; later calls are no-ops so
/// tests and repeated config reloads stay safe.
pub fn init_file_logging() -> Result<()> {
    FILE_LOGGER
        .get_or_try_init(|| -> Result<()> {
            let path = Logger::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }

            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ));
                })
                .level(log::LevelFilter::Info)
                .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
                .apply()
                .context("Failed to install file logger")?;
            Ok(())
        })
        .map(|_| ())
}
