//! The pattern demos and the catalog that registers them.
//!
//! Every demo module exposes `run(&mut Output) -> DemoResult`. The body builds
//! a small domain model, exercises it, and writes deterministic lines.
//! [`catalog`] registers all of them in a fixed order with their category and
//! a one-line summary.

pub mod abstract_factory;
pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod chain_of_responsibility;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod factory_method;
pub mod flyweight;
pub mod interpreter;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod prototype;
pub mod proxy;
pub mod singleton;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;

use crate::capture::{DemoResult, Output};
use crate::registry::{Category, DemoRegistry, DemoUnit, RegistryError};

/// Catalog entry: name, family, summary, body.
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub run: fn(&mut Output) -> DemoResult,
}

use Category::{Behavioral, Creational, Structural};

/// Every demo, in registration order.
pub const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "abstract-factory",
        category: Creational,
        summary: "Platform widget families built through one factory interface",
        run: abstract_factory::run,
    },
    CatalogEntry {
        name: "adapter",
        category: Structural,
        summary: "Audio player reaches vlc/mp4 playback through an adapter",
        run: adapter::run,
    },
    CatalogEntry {
        name: "bridge",
        category: Structural,
        summary: "Shapes and colors vary independently",
        run: bridge::run,
    },
    CatalogEntry {
        name: "builder",
        category: Creational,
        summary: "Step-by-step construction of a house with optional parts",
        run: builder::run,
    },
    CatalogEntry {
        name: "chain-of-responsibility",
        category: Behavioral,
        summary: "Messages walk a chain of level-filtered loggers",
        run: chain_of_responsibility::run,
    },
    CatalogEntry {
        name: "command",
        category: Behavioral,
        summary: "Light switch requests submitted to a remote as objects",
        run: command::run,
    },
    CatalogEntry {
        name: "composite",
        category: Structural,
        summary: "Org chart where managers own their subordinates",
        run: composite::run,
    },
    CatalogEntry {
        name: "decorator",
        category: Structural,
        summary: "Notifiers stacked to add email and SMS delivery",
        run: decorator::run,
    },
    CatalogEntry {
        name: "facade",
        category: Structural,
        summary: "One call drives decoding, compression and storage",
        run: facade::run,
    },
    CatalogEntry {
        name: "factory-method",
        category: Creational,
        summary: "Factories decide which vehicle gets driven",
        run: factory_method::run,
    },
    CatalogEntry {
        name: "flyweight",
        category: Structural,
        summary: "Trees share cached type data",
        run: flyweight::run,
    },
    CatalogEntry {
        name: "interpreter",
        category: Behavioral,
        summary: "Evaluates (a + b) - c against a variable context",
        run: interpreter::run,
    },
    CatalogEntry {
        name: "iterator",
        category: Behavioral,
        summary: "Walks a name collection through a cursor",
        run: iterator::run,
    },
    CatalogEntry {
        name: "mediator",
        category: Behavioral,
        summary: "Chat room relays messages between users",
        run: mediator::run,
    },
    CatalogEntry {
        name: "memento",
        category: Behavioral,
        summary: "Editor snapshots restored by an undo history",
        run: memento::run,
    },
    CatalogEntry {
        name: "observer",
        category: Behavioral,
        summary: "Displays follow a temperature sensor",
        run: observer::run,
    },
    CatalogEntry {
        name: "prototype",
        category: Creational,
        summary: "Shapes copied from existing ones, then adjusted",
        run: prototype::run,
    },
    CatalogEntry {
        name: "proxy",
        category: Structural,
        summary: "Image loaded lazily on first display",
        run: proxy::run,
    },
    CatalogEntry {
        name: "singleton",
        category: Creational,
        summary: "One lazily created service handed out by reference",
        run: singleton::run,
    },
    CatalogEntry {
        name: "state",
        category: Behavioral,
        summary: "Music player buttons depend on the current state",
        run: state::run,
    },
    CatalogEntry {
        name: "strategy",
        category: Behavioral,
        summary: "Payment method swapped at checkout time",
        run: strategy::run,
    },
    CatalogEntry {
        name: "template-method",
        category: Behavioral,
        summary: "Fixed recipe steps with per-beverage brewing",
        run: template_method::run,
    },
    CatalogEntry {
        name: "visitor",
        category: Behavioral,
        summary: "Area and perimeter computed by shape visitors",
        run: visitor::run,
    },
];

impl CatalogEntry {
    fn to_unit(&self) -> DemoUnit {
        DemoUnit::new(self.name, self.run).with_category(self.category).with_summary(self.summary)
    }
}

/// Register every catalog entry whose name is not in `exclude`.
pub fn register_all(registry: &mut DemoRegistry, exclude: &[String]) -> Result<(), RegistryError> {
    for entry in ENTRIES.iter().filter(|e| !exclude.iter().any(|x| x == e.name)) {
        registry.register_unit(entry.to_unit())?;
    }
    Ok(())
}

/// A registry holding the whole catalog.
pub fn catalog() -> DemoRegistry {
    let mut registry = DemoRegistry::new();
    for entry in ENTRIES {
        // Catalog names are unique (checked by tests), so this cannot fail
        if let Err(err) = registry.register_unit(entry.to_unit()) {
            tracing::error!(%err, "catalog entry skipped");
        }
    }
    registry
}

/// Run a demo body directly and return its lines. Test helper.
#[cfg(test)]
pub(crate) fn lines_of(run: fn(&mut Output) -> DemoResult) -> Vec<String> {
    let (lines, result) = crate::capture::capture(run);
    if let Err(err) = result {
        panic!("demo failed: {}", err);
    }
    lines
}
