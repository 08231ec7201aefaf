//! Executing a single demo with output capture and failure isolation.

use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::capture::Output;

use super::unit::DemoUnit;

/// What went wrong inside a demo body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FailureKind {
    /// The body returned an error
    Error,
    /// The body panicked
    Panic,
    /// The body finished but took longer than the registry's budget
    Overrun,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Error => "error",
            FailureKind::Panic => "panic",
            FailureKind::Overrun => "overrun",
        };
        f.write_str(label)
    }
}

/// A runtime failure recorded against one demo. Never propagated past the
/// registry; callers find it on [`ExecutionResult::failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{kind}: {message}")]
pub struct DemoFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl DemoFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Outcome of running one demo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    /// Demo name
    pub name: String,
    /// Captured lines, partial when the demo failed
    pub lines: Vec<String>,
    /// Recorded failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<DemoFailure>,
    /// Wall-clock time spent in the body
    #[serde(rename = "elapsed_us", serialize_with = "serialize_micros")]
    pub elapsed: Duration,
}

impl ExecutionResult {
    /// True when the demo ran to completion without a recorded failure.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

fn serialize_micros<S: serde::Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX))
}

/// Extract a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// Run `unit` against its own [`Output`].
///
/// Returned errors and panics become a [`DemoFailure`] on the result, with the
/// lines written before the failure kept. When `budget` is set and the body
/// took longer, the result is marked [`FailureKind::Overrun`].
pub fn execute(unit: &DemoUnit, budget: Option<Duration>) -> ExecutionResult {
    let mut out = Output::new();
    let started = Instant::now();
    let outcome = catch_unwind(AssertUnwindSafe(|| unit.run(&mut out)));
    let elapsed = started.elapsed();

    let mut failure = match outcome {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(DemoFailure::new(FailureKind::Error, err.to_string())),
        Err(payload) => Some(DemoFailure::new(FailureKind::Panic, panic_message(payload.as_ref()))),
    };

    if failure.is_none() {
        if let Some(limit) = budget.filter(|limit| elapsed > *limit) {
            failure = Some(DemoFailure::new(
                FailureKind::Overrun,
                format!("took {:?}, budget is {:?}", elapsed, limit),
            ));
        }
    }

    match &failure {
        Some(f) => tracing::warn!(demo = unit.name(), kind = %f.kind, message = %f.message, "demo failed"),
        None => tracing::debug!(demo = unit.name(), ?elapsed, "demo finished"),
    }

    ExecutionResult { name: unit.name().to_string(), lines: out.finish(), failure, elapsed }
}
