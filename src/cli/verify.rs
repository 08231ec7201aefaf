//! Verify command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::golden::{write_golden, GoldenSet, Verdict};
use crate::registry::ExecutionResult;

use super::run::execute_requested;
use super::{report_lookup_error, Session, EXIT_ERROR, EXIT_SUCCESS};

/// Pass/fail tally for the summary line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    passed: usize,
    failed: usize,
}

impl Tally {
    fn record(&mut self, ok: bool) {
        if ok {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    fn exit_code(&self) -> ExitCode {
        if self.failed == 0 {
            ExitCode::from(EXIT_SUCCESS)
        } else {
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn compare_all(golden: &GoldenSet, results: &[ExecutionResult]) -> (Vec<String>, Tally) {
    let mut report = Vec::with_capacity(results.len());
    let mut tally = Tally::default();
    for result in results {
        let verdict = golden.check(result);
        tally.record(verdict.is_match());
        report.push(match verdict {
            Verdict::Match => format!("PASS {}", result.name),
            other => format!("FAIL {}: {}", result.name, other),
        });
    }
    (report, tally)
}

fn update_all(dir: &Path, results: &[ExecutionResult]) -> (Vec<String>, Tally) {
    let mut report = Vec::with_capacity(results.len());
    let mut tally = Tally::default();
    for result in results {
        match write_golden(dir, result) {
            Ok(path) => {
                tally.record(true);
                report.push(format!("UPDATED {} ({})", result.name, path.display()));
            }
            Err(e) => {
                tally.record(false);
                report.push(format!("FAIL {}: {}", result.name, e));
            }
        }
    }
    (report, tally)
}

/// Execute the verify command
pub fn run_verify(
    session: &Session,
    names: &[String],
    golden_flag: Option<&Path>,
    update: bool,
) -> ExitCode {
    let registry = match session.registry() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let dir = session.golden_dir(golden_flag);

    // Load fixtures before running anything so a bad directory fails fast
    let golden = if update {
        None
    } else {
        match GoldenSet::load(&dir) {
            Ok(set) => Some(set),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    let results = match execute_requested(&registry, names, session.config.run.parallel) {
        Ok(results) => results,
        Err(e) => return report_lookup_error(&registry, &e),
    };

    let (report, tally) = match &golden {
        Some(set) => compare_all(set, &results),
        None => update_all(&dir, &results),
    };
    for line in report {
        println!("{}", line);
    }
    println!();
    println!("{} passed, {} failed", tally.passed, tally.failed);
    tally.exit_code()
}
