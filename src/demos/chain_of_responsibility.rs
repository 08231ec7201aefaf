//! Chain of Responsibility: a message walks a chain of loggers; each writes it
//! when its own level is at or below the message level, then passes it on.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

/// Severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

/// One link of the chain.
pub struct Logger {
    level: Level,
    next: Option<Box<Logger>>,
}

impl Logger {
    pub fn new(level: Level) -> Self {
        Self { level, next: None }
    }

    /// Append `next` after this logger.
    pub fn then(mut self, next: Logger) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    pub fn log_message(&self, level: Level, message: &str, out: &mut Output) -> fmt::Result {
        if self.level <= level {
            writeln!(out, "{}: {}", self.level.prefix(), message)?;
        }
        match &self.next {
            Some(next) => next.log_message(level, message, out),
            None => Ok(()),
        }
    }
}

/// INFO -> WARNING -> ERROR
pub fn chain_of_loggers() -> Logger {
    Logger::new(Level::Info).then(Logger::new(Level::Warning).then(Logger::new(Level::Error)))
}

pub fn run(out: &mut Output) -> DemoResult {
    let chain = chain_of_loggers();
    chain.log_message(Level::Info, "This is an information message.", out)?;
    chain.log_message(Level::Warning, "This is a warning message.", out)?;
    chain.log_message(Level::Error, "This is an error message.", out)?;
    Ok(())
}
