//! Registry Behaviour Demo Tests
//!
//! Registration rules, ordering, failure isolation and capture, exercised
//! through the public API.

use patternbook::capture::capture;
use patternbook::demos::{self, catalog};
use patternbook::registry::{DemoRegistry, FailureKind, Registry, RegistryError};
use std::time::Duration;

use super::{registry_with_failure, run_catalog_demo, writes};

#[test]
fn test_duplicate_registration_keeps_first_demo() {
    let mut registry = catalog();
    let err = registry.register("strategy", writes(&["impostor"])).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("strategy".to_string()));
    assert_eq!(registry.len(), 23);

    let result = registry.run_one("strategy").unwrap();
    assert_eq!(result.lines[0], "Paid $100.0 using Credit Card (Card Number: 3333-1234-3333-1234)");
}

#[test]
fn test_unknown_name_is_not_found() {
    let registry = catalog();
    let before: Vec<_> = registry.list_names().map(str::to_string).collect();
    assert_eq!(registry.run_one("singletn").unwrap_err(), RegistryError::NotFound("singletn".into()));
    let after: Vec<_> = registry.list_names().map(str::to_string).collect();
    assert_eq!(before, after);
}

#[test]
fn test_run_all_follows_registration_order() {
    let registry = catalog();
    let listed: Vec<_> = registry.list_names().collect();
    let ran: Vec<_> = registry.run_all().into_iter().map(|r| r.name).collect();
    assert_eq!(ran, listed);
}

#[test]
fn test_failure_isolation_with_partial_output() {
    let results = registry_with_failure().run_all();
    assert_eq!(results.len(), 3);

    assert!(results[0].is_success());
    assert_eq!(results[0].lines, vec!["one"]);

    let failure = results[1].failure.as_ref().expect("broken demo should fail");
    assert_eq!(failure.kind, FailureKind::Error);
    assert_eq!(failure.message, "invalid media format");
    assert_eq!(results[1].lines, vec!["before the failure"]);

    assert!(results[2].is_success());
    assert_eq!(results[2].lines, vec!["two"]);
}

#[test]
fn test_failure_isolation_in_parallel() {
    let results = registry_with_failure().run_all_parallel();
    let kinds: Vec<_> = results.iter().map(|r| r.failure.as_ref().map(|f| f.kind)).collect();
    assert_eq!(kinds, vec![None, Some(FailureKind::Error), None]);
}

#[test]
fn test_panic_is_recorded() {
    let mut registry = DemoRegistry::new();
    registry.register("explodes", |_| panic!("state machine broke")).unwrap();
    let result = registry.run_one("explodes").unwrap();
    let failure = result.failure.expect("panic should be recorded");
    assert_eq!(failure.kind, FailureKind::Panic);
    assert_eq!(failure.message, "state machine broke");
}

#[test]
fn test_capture_matches_direct_run() {
    for entry in demos::ENTRIES {
        let (direct, outcome) = capture(entry.run);
        assert!(outcome.is_ok(), "{} failed when run directly", entry.name);
        assert_eq!(run_catalog_demo(entry.name).lines, direct, "{}", entry.name);
    }
}

#[test]
fn test_generous_budget_passes_whole_catalog() {
    let mut registry = DemoRegistry::new().with_budget(Duration::from_secs(30));
    demos::register_all(&mut registry, &[]).unwrap();
    assert!(registry.run_all().iter().all(|r| r.is_success()));
}

#[test]
fn test_slow_demo_overruns_budget() {
    let mut registry = DemoRegistry::new().with_budget(Duration::from_millis(1));
    registry
        .register("slow", |out| {
            std::thread::sleep(Duration::from_millis(25));
            use std::fmt::Write;
            writeln!(out, "finally")?;
            Ok(())
        })
        .unwrap();
    registry.register("after", writes(&["still runs"])).unwrap();

    let results = registry.run_all();
    assert_eq!(results[0].failure.as_ref().map(|f| f.kind), Some(FailureKind::Overrun));
    assert_eq!(results[0].lines, vec!["finally"]);
    assert_eq!(results[1].lines, vec!["still runs"]);
}
