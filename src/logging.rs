//! Diagnostic logging sink for configuration resolution.
//!
//! A [`Logger`] is a named handle that forwards to `tracing` with a
//! `logger` field, filtered by a shared atomic minimum level. Resolvers accept
//! one through their options so applications can route config diagnostics
//! separately or silence them.

use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};
use tracing::Level;

/// Atomic level filter that can be adjusted at runtime.
///
/// The level is stored as a u8: 0=Trace, 1=Debug, 2=Info, 3=Warn, 4=Error, 5=Off
#[derive(Debug)]
pub struct LogLevelFilter(AtomicU8);

const OFF: u8 = 5;

impl LogLevelFilter {
    /// Create a new filter with the given minimum level.
    pub fn new(level: Level) -> Self {
        Self(AtomicU8::new(level_to_u8(level)))
    }

    /// A filter that rejects everything.
    pub fn off() -> Self {
        Self(AtomicU8::new(OFF))
    }

    /// Get the current minimum level, or None when switched off.
    pub fn get(&self) -> Option<Level> {
        u8_to_level(self.0.load(Ordering::Relaxed))
    }

    /// Set the minimum level.
    pub fn set(&self, level: Level) {
        self.0.store(level_to_u8(level), Ordering::Relaxed);
    }

    /// Switch the filter off.
    pub fn disable(&self) {
        self.0.store(OFF, Ordering::Relaxed);
    }

    /// Check if a message at the given level should be logged.
    pub fn should_log(&self, level: Level) -> bool {
        level_to_u8(level) >= self.0.load(Ordering::Relaxed)
    }
}

impl Default for LogLevelFilter {
    fn default() -> Self {
        Self::new(Level::TRACE)
    }
}

fn level_to_u8(level: Level) -> u8 {
    match level {
        Level::TRACE => 0,
        Level::DEBUG => 1,
        Level::INFO => 2,
        Level::WARN => 3,
        Level::ERROR => 4,
    }
}

fn u8_to_level(val: u8) -> Option<Level> {
    match val {
        0 => Some(Level::TRACE),
        1 => Some(Level::DEBUG),
        2 => Some(Level::INFO),
        3 => Some(Level::WARN),
        4 => Some(Level::ERROR),
        _ => None,
    }
}

/// Named diagnostic sink backed by `tracing`.
#[derive(Debug, Clone)]
pub struct Logger {
    /// Minimum level to log.
    level_filter: Arc<LogLevelFilter>,
    /// Logger name/category.
    name: Option<String>,
}

impl Logger {
    /// Create a new logger with default settings.
    pub fn new() -> Self {
        Self {
            level_filter: Arc::new(LogLevelFilter::default()),
            name: None,
        }
    }

    /// A logger that drops every message.
    pub fn silent() -> Self {
        Self::new().with_level_filter(Arc::new(LogLevelFilter::off()))
    }

    /// Set the level filter.
    pub fn with_level_filter(mut self, filter: Arc<LogLevelFilter>) -> Self {
        self.level_filter = filter;
        self
    }

    /// Set the logger name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn level_filter(&self) -> &Arc<LogLevelFilter> {
        &self.level_filter
    }

    /// Log a message at `level`.
    pub fn log(&self, level: Level, message: &str) {
        if !self.level_filter.should_log(level) {
            return;
        }

        let name = self.name.as_deref().unwrap_or("config");
        match level {
            Level::ERROR => tracing::error!(logger = %name, "{}", message),
            Level::WARN => tracing::warn!(logger = %name, "{}", message),
            Level::INFO => tracing::info!(logger = %name, "{}", message),
            Level::DEBUG => tracing::debug!(logger = %name, "{}", message),
            Level::TRACE => tracing::trace!(logger = %name, "{}", message),
        }
    }

    pub fn trace(&self, msg: &str) {
        self.log(Level::TRACE, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::DEBUG, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::INFO, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Level::WARN, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::ERROR, msg);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
