//! Demo test harness
//!
//! Helpers shared by the catalog tests: fixture location, running a demo by
//! name, and a small registry of hand-written demos for behaviour checks.

use patternbook::capture::{DemoResult, Output};
use patternbook::registry::{DemoRegistry, ExecutionResult};
use std::fmt::Write;
use std::path::PathBuf;

pub mod golden;
pub mod registry;
pub mod scenarios;

/// Golden fixtures shipped with the crate.
pub fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("golden")
}

/// Run one catalog demo and return its result, failing the test on an
/// unknown name.
pub fn run_catalog_demo(name: &str) -> ExecutionResult {
    patternbook::demos::catalog()
        .run_one(name)
        .unwrap_or_else(|e| panic!("catalog should contain {}: {}", name, e))
}

/// Demo body that writes `lines` and succeeds.
pub fn writes(lines: &'static [&'static str]) -> impl Fn(&mut Output) -> DemoResult {
    move |out| {
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// Registry with `ok-1`, `broken` (writes a line, then errors), `ok-2`.
pub fn registry_with_failure() -> DemoRegistry {
    let mut registry = DemoRegistry::new();
    registry.register("ok-1", writes(&["one"])).unwrap();
    registry
        .register("broken", |out| {
            writeln!(out, "before the failure")?;
            Err("invalid media format".into())
        })
        .unwrap();
    registry.register("ok-2", writes(&["two"])).unwrap();
    registry
}
