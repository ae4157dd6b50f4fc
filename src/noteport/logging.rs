//! The injected logging capability.
//!
//! Commands never log through a hidden global. They receive a [`Logger`] and
//! report through it, so the binary can forward to the `log` facade while
//! tests capture diagnostics with [`MemoryLogger`] and assert on them.

use std::sync::Mutex;

/// Leveled logging methods available to the command layer.
pub trait Logger {
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards to the `log` macros. The binary installs `env_logger` as the
/// subscriber; library users may install whatever `log` backend they like.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn debug(&self, message: &str) {
        log::debug!("{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Captures log lines in memory for test assertions.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("logger mutex poisoned").clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, level: &str, message: &str) {
        self.lines
            .lock()
            .expect("logger mutex poisoned")
            .push(format!("{}: {}", level, message));
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push("debug", message);
    }

    fn warn(&self, message: &str) {
        self.push("warn", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures_levels() {
        let logger = MemoryLogger::new();
        logger.debug("fetched 3 notes");
        logger.error("skipping 'Broken'");

        assert_eq!(logger.lines().len(), 2);
        assert!(logger.contains("debug: fetched 3 notes"));
        assert!(logger.contains("error: skipping 'Broken'"));
    }

    #[test]
    fn test_memory_logger_contains_misses() {
        let logger = MemoryLogger::new();
        logger.warn("could not create default directory");

        assert!(!logger.contains("error"));
    }
}
