//! # Title Telemetry
//!
//! Structured logging for the academic-title ledger.
//!
//! Library crates only emit `tracing` events and spans; the host process
//! installs a subscriber once with [`init_logging`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use title_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `academic-titles` | Service name attached to startup log |
//! | `AT_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `AT_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |
//! | `AT_CONSOLE_OUTPUT` | `true` | Write logs to stderr at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("A global subscriber is already installed")]
    AlreadyInitialized,
}
