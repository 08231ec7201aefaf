//! Registry traits and implementations for named demos.
//!
//! This module provides:
//! - A unified `Registry` trait for consistent registry interfaces
//! - `DemoUnit`, a named demo body with optional category and summary
//! - `DemoRegistry`, the ordered, append-only catalog of demos
//! - `execute`, which runs one unit with output capture and failure isolation
//!
//! Usage errors (duplicate or unknown names) are returned as `RegistryError`.
//! Failures inside a demo are recorded on its `ExecutionResult` instead.

mod demo;
mod execution;
mod traits;
mod unit;

pub use demo::{DemoRegistry, RegistryError};
pub use execution::{execute, DemoFailure, ExecutionResult, FailureKind};
pub use traits::Registry;
pub use unit::{Category, DemoFn, DemoUnit};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Output;
    use std::fmt::Write;

    fn say(line: &'static str) -> impl Fn(&mut Output) -> crate::capture::DemoResult {
        move |out| {
            writeln!(out, "{}", line)?;
            Ok(())
        }
    }

    fn three_demos() -> DemoRegistry {
        let mut registry = DemoRegistry::new();
        registry.register("one", say("first")).unwrap();
        registry.register("two", say("second")).unwrap();
        registry.register("three", say("third")).unwrap();
        registry
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = DemoRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("anything"));
        assert_eq!(registry.list_names().count(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = DemoRegistry::new();
        registry
            .register_unit(
                DemoUnit::new("hello", say("hi"))
                    .with_category(Category::Behavioral)
                    .with_summary("Says hi"),
            )
            .unwrap();

        assert!(registry.contains("hello"));
        let unit = registry.get("hello").unwrap();
        assert_eq!(unit.name(), "hello");
        assert_eq!(unit.category(), Some(Category::Behavioral));
        assert_eq!(unit.summary(), Some("Says hi"));
    }

    #[test]
    fn test_register_duplicate_keeps_original() {
        let mut registry = DemoRegistry::new();
        registry.register("dup", say("original")).unwrap();

        let err = registry.register("dup", say("shadow")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("dup".to_string()));
        assert_eq!(err.to_string(), "Demo 'dup' is already registered");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.run_one("dup").unwrap().lines, vec!["original"]);
    }

    #[test]
    fn test_run_one_not_found_leaves_registry_alone() {
        let registry = three_demos();
        let err = registry.run_one("four").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("four".to_string()));
        assert_eq!(err.to_string(), "Demo 'four' not found");
        assert_eq!(registry.list_names().collect::<Vec<_>>(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_list_names_is_restartable() {
        let registry = three_demos();
        let names = registry.list_names();
        let first: Vec<_> = names.clone().collect();
        let second: Vec<_> = names.collect();
        assert_eq!(first, second);
        assert_eq!(registry.names().collect::<Vec<_>>(), first);
    }

    #[test]
    fn test_run_all_matches_list_order() {
        let registry = three_demos();
        let results = registry.run_all();
        let result_names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(result_names, registry.list_names().collect::<Vec<_>>());
    }

    #[test]
    fn test_run_all_isolates_failures() {
        let mut registry = DemoRegistry::new();
        registry.register("ok-1", say("one")).unwrap();
        registry
            .register("broken", |out| {
                writeln!(out, "partial")?;
                Err("bad input".into())
            })
            .unwrap();
        registry.register("ok-2", say("two")).unwrap();

        let results = registry.run_all();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        assert_eq!(results[0].lines, vec!["one"]);
        assert_eq!(results[1].lines, vec!["partial"]);
        assert_eq!(results[1].failure.as_ref().map(|f| f.kind), Some(FailureKind::Error));
        assert!(results[2].is_success());
        assert_eq!(results[2].lines, vec!["two"]);
    }

    #[test]
    fn test_panicking_demo_does_not_abort_run_all() {
        let mut registry = DemoRegistry::new();
        registry.register("panics", |_| panic!("kaboom")).unwrap();
        registry.register("after", say("still here")).unwrap();

        let results = registry.run_all();
        assert_eq!(results[0].failure.as_ref().map(|f| f.kind), Some(FailureKind::Panic));
        assert_eq!(results[1].lines, vec!["still here"]);
    }

    #[test]
    fn test_run_selected_order_and_unknown() {
        let registry = three_demos();
        let results = registry.run_selected(&["three", "one"]).unwrap();
        let lines: Vec<_> = results.iter().flat_map(|r| r.lines.clone()).collect();
        assert_eq!(lines, vec!["third", "first"]);

        let err = registry.run_selected(&["one", "nope"]).unwrap_err();
        assert_eq!(err, RegistryError::NotFound("nope".to_string()));
    }

    #[test]
    fn test_run_selected_parallel_keeps_request_order() {
        let registry = three_demos();
        let names = vec!["two".to_string(), "three".to_string(), "one".to_string()];
        let results = registry.run_selected_parallel(&names).unwrap();
        let order: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["two", "three", "one"]);
        assert!(registry.run_selected_parallel(&["zero"]).is_err());
    }

    #[test]
    fn test_run_all_parallel_preserves_order() {
        let mut registry = DemoRegistry::new();
        for i in 0..16u64 {
            registry
                .register(format!("demo-{}", i), move |out| {
                    // Earlier demos sleep longer so completion order is reversed
                    std::thread::sleep(std::time::Duration::from_millis(16 - i));
                    writeln!(out, "demo {}", i)?;
                    Ok(())
                })
                .unwrap();
        }

        let sequential = registry.run_all();
        let parallel = registry.run_all_parallel();
        assert_eq!(parallel.len(), 16);
        for (s, p) in sequential.iter().zip(&parallel) {
            assert_eq!(s.name, p.name);
            assert_eq!(s.lines, p.lines);
        }
    }

    #[test]
    fn test_state_machine_scenario() {
        let mut registry = DemoRegistry::new();
        registry.register("state-machine", crate::demos::state::run).unwrap();

        let result = registry.run_one("state-machine").unwrap();
        assert!(result.is_success());
        assert_eq!(
            result.lines,
            vec![
                "Starting the music.",
                "Pausing the music.",
                "Resuming the music.",
                "Stopping the music.",
                "Can't pause. The music is stopped.",
            ]
        );
    }

    #[test]
    fn test_run_one_is_idempotent() {
        let mut registry = DemoRegistry::new();
        registry.register("strategy", crate::demos::strategy::run).unwrap();

        let first = registry.run_one("strategy").unwrap();
        let second = registry.run_one("strategy").unwrap();
        assert_eq!(first.lines, second.lines);
        assert_eq!(
            first.lines,
            vec![
                "Paid $100.0 using Credit Card (Card Number: 3333-1234-3333-1234)",
                "Paid $333.0 using PayPal (Email: paulocanale@me.com)",
            ]
        );
    }

    #[test]
    fn test_capture_matches_direct_invocation() {
        let mut registry = DemoRegistry::new();
        registry.register("visitor", crate::demos::visitor::run).unwrap();

        let mut direct = Output::new();
        crate::demos::visitor::run(&mut direct).unwrap();
        assert_eq!(registry.run_one("visitor").unwrap().lines, direct.finish());
    }

    #[test]
    fn test_budget_overrun_reported_not_fatal() {
        let mut registry = DemoRegistry::new().with_budget(std::time::Duration::from_millis(1));
        registry
            .register("slow", |out| {
                std::thread::sleep(std::time::Duration::from_millis(25));
                writeln!(out, "done")?;
                Ok(())
            })
            .unwrap();
        registry.register("fast", say("quick")).unwrap();

        let results = registry.run_all();
        assert_eq!(results[0].failure.as_ref().map(|f| f.kind), Some(FailureKind::Overrun));
        assert_eq!(results[0].lines, vec!["done"]);
        assert_eq!(results[1].lines, vec!["quick"]);
    }
}
