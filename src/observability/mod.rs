//! # Observability
//!
//! Structured logging for the server.

pub mod logging;

pub use logging::{init_logging, log_config_info, LoggingConfig};
