//! Golden Output Demo Tests
//!
//! Every catalog demo is checked against its fixture in `tests/golden`.

use patternbook::demos::{catalog, ENTRIES};
use patternbook::golden::{GoldenSet, Verdict};
use patternbook::registry::Registry;

use super::golden_dir;

#[test]
fn test_every_demo_has_a_fixture() {
    let golden = GoldenSet::load(&golden_dir()).expect("golden dir should load");
    for entry in ENTRIES {
        assert!(golden.get(entry.name).is_some(), "no fixture for {}", entry.name);
    }
    assert_eq!(golden.len(), ENTRIES.len(), "fixtures without a demo");
}

#[test]
fn test_catalog_matches_golden_output() {
    let golden = GoldenSet::load(&golden_dir()).expect("golden dir should load");
    let registry = catalog();

    for result in registry.run_all() {
        let verdict = golden.check(&result);
        assert_eq!(verdict, Verdict::Match, "{}: {}", result.name, verdict);
    }
}

#[test]
fn test_catalog_is_idempotent() {
    let golden = GoldenSet::load(&golden_dir()).expect("golden dir should load");
    let registry = catalog();

    let first = registry.run_all();
    let second = registry.run_all();
    assert_eq!(first.len(), registry.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.lines, b.lines, "{} changed between runs", a.name);
        assert!(golden.check(b).is_match());
    }
}

#[test]
fn test_parallel_catalog_matches_golden_output() {
    let golden = GoldenSet::load(&golden_dir()).expect("golden dir should load");
    let registry = catalog();
    let names: Vec<_> = registry.list_names().collect();

    let results = registry.run_all_parallel();
    assert_eq!(results.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), names);
    for result in &results {
        assert!(golden.check(result).is_match(), "{} mismatched in parallel run", result.name);
    }
}

#[test]
fn test_blank_lines_are_part_of_the_output() {
    let golden = GoldenSet::load(&golden_dir()).expect("golden dir should load");
    let facade = golden.get("facade").expect("facade fixture");
    assert_eq!(facade.len(), 12);
    assert_eq!(facade[5], "");
    assert_eq!(facade[11], "");
}
