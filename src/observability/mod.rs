//! Observability module
//!
//! Structured logging for validation runs.

pub mod logging;

pub use logging::{LogFormat, LogSettings, init_logging};
