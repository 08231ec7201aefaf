//! List command implementation

use serde::Serialize;
use std::process::ExitCode;

use crate::registry::{Category, DemoRegistry};

use super::{Session, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
}

fn entries(registry: &DemoRegistry, category: Option<Category>) -> Vec<ListEntry<'_>> {
    registry
        .units()
        .filter(|unit| category.is_none() || unit.category() == category)
        .map(|unit| ListEntry {
            name: unit.name(),
            category: unit.category(),
            summary: unit.summary(),
        })
        .collect()
}

/// Execute the list command
pub fn run_list(session: &Session, category: Option<Category>, json: bool) -> ExitCode {
    let registry = match session.registry() {
        Ok(registry) => registry,
        Err(code) => return code,
    };
    let entries = entries(&registry, category);

    if json {
        return match serde_json::to_string_pretty(&entries) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &entries {
        let family = entry.category.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string());
        println!("{:<width$}  {:<10}  {}", entry.name, family, entry.summary.unwrap_or(""), width = width);
    }
    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos;

    #[test]
    fn test_entries_filter_by_category() {
        let registry = demos::catalog();
        let creational: Vec<_> =
            entries(&registry, Some(Category::Creational)).iter().map(|e| e.name).collect();
        assert_eq!(
            creational,
            vec!["abstract-factory", "builder", "factory-method", "prototype", "singleton"]
        );
        assert_eq!(entries(&registry, None).len(), 23);
    }

    #[test]
    fn test_entry_json_shape() {
        let registry = demos::catalog();
        let all = entries(&registry, None);
        let value = serde_json::to_value(&all[0]).unwrap();
        assert_eq!(value["name"], "abstract-factory");
        assert_eq!(value["category"], "creational");
        assert!(value["summary"].is_string());
    }
}
