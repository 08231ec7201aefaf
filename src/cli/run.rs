//! Run command implementation

use std::process::ExitCode;

use crate::registry::{DemoRegistry, ExecutionResult, RegistryError};

use super::{report_lookup_error, Session, EXIT_ERROR, EXIT_SUCCESS};

/// Run the requested demos, or all of them when `names` is empty.
pub(crate) fn execute_requested(
    registry: &DemoRegistry,
    names: &[String],
    parallel: bool,
) -> Result<Vec<ExecutionResult>, RegistryError> {
    match (names.is_empty(), parallel) {
        (true, false) => Ok(registry.run_all()),
        (true, true) => Ok(registry.run_all_parallel()),
        (false, false) => registry.run_selected(names),
        (false, true) => registry.run_selected_parallel(names),
    }
}

/// Text rendering: one demo prints verbatim, several get `== name ==` headers.
fn render_text(results: &[ExecutionResult]) -> Vec<String> {
    let headed = results.len() > 1;
    let mut lines = Vec::new();
    for result in results {
        if headed {
            lines.push(format!("== {} ==", result.name));
        }
        lines.extend(result.lines.iter().cloned());
    }
    lines
}

/// Execute the run command
pub fn run_demos(session: &Session, names: &[String], all: bool, json: bool) -> ExitCode {
    let registry = match session.registry() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let names: &[String] = if all { &[] } else { names };

    let results = match execute_requested(&registry, names, session.config.run.parallel) {
        Ok(results) => results,
        Err(e) => return report_lookup_error(&registry, &e),
    };

    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        for line in render_text(&results) {
            println!("{}", line);
        }
    }

    let mut failed = 0;
    for result in &results {
        if let Some(failure) = &result.failure {
            failed += 1;
            eprintln!("Error: demo '{}' failed: {}", result.name, failure);
        }
    }
    if failed > 0 {
        eprintln!("{} of {} demos failed", failed, results.len());
        return ExitCode::from(EXIT_ERROR);
    }
    ExitCode::from(EXIT_SUCCESS)
}
