//! Demo units: a name, metadata, and the body that produces output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capture::{DemoResult, Output};

/// Boxed demo body. Shared across threads by the parallel runner.
pub type DemoFn = Box<dyn Fn(&mut Output) -> DemoResult + Send + Sync>;

/// Pattern family a demo belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Object creation (factories, builders, prototypes, singletons)
    Creational,
    /// Object composition (adapters, decorators, proxies, ...)
    Structural,
    /// Communication between objects (observers, strategies, states, ...)
    Behavioral,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        };
        f.write_str(label)
    }
}

/// A named, immutable demo.
pub struct DemoUnit {
    name: String,
    category: Option<Category>,
    summary: Option<String>,
    run: DemoFn,
}

impl DemoUnit {
    /// Create a unit with no metadata.
    pub fn new<F>(name: impl Into<String>, run: F) -> Self
    where
        F: Fn(&mut Output) -> DemoResult + Send + Sync + 'static,
    {
        Self { name: name.into(), category: None, summary: None, run: Box::new(run) }
    }

    /// Set the pattern family
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the one-line summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Invoke the body against `out`. No capture or panic handling happens
    /// here; see [`super::execute`].
    pub fn run(&self, out: &mut Output) -> DemoResult {
        (self.run)(out)
    }
}

impl fmt::Debug for DemoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoUnit")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}
