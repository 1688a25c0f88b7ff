//! Global logging module for the Imp checker
//!
//! Provides a process-wide logging service behind a `OnceLock`, initialized
//! once by the binary. Diagnostics collection is deliberately NOT routed
//! through here: diagnostics are per-run data owned by their run, while the
//! log is an observability side channel.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use crate::log_success;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::{Code, Severity};
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize global logging from runtime preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let logger: Arc<dyn Logger> = if preferences.use_structured_logging {
        Arc::new(StructuredLogger)
    } else {
        Arc::new(ConsoleLogger)
    };
    let service = Arc::new(LoggingService::new(
        logger,
        preferences.min_log_level.to_log_level(),
    ));

    init_global_logging_with_service(service)?;

    log_success!(
        codes::success::SYSTEM_INITIALIZED,
        "Global logging system initialized"
    );
    Ok(())
}

/// Initialize with a custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to the global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn dispatch(event: LogEvent) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

fn with_context(mut event: LogEvent, context: Vec<(&str, String)>) -> LogEvent {
    for (key, value) in context {
        event = event.with_context(key, &value);
    }
    event
}

/// Log error with context (used by the log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    line: Option<u32>,
    context: Vec<(&str, String)>,
) {
    let mut event = with_context(LogEvent::error(code, message), context);
    if let Some(line) = line {
        event = event.with_line(line);
    }
    dispatch(event);
}

/// Log success with context (used by the log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::success(code, message), context));
}

/// Log info with context (used by the log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::info(message), context));
}

/// Log warning with context (used by the log_warning! macro)
pub fn log_warning_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::warning(message), context));
}

/// Log debug with context (used by the log_debug! macro)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(with_context(LogEvent::debug(message), context));
}
