//! Demo registry: the catalog of named demos and their execution.

use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::capture::{DemoResult, Output};

use super::execution::{execute, ExecutionResult};
use super::traits::Registry;
use super::unit::DemoUnit;

/// Usage errors reported directly to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A demo with this name is already registered
    #[error("Demo '{0}' is already registered")]
    DuplicateName(String),
    /// No demo with this name is registered
    #[error("Demo '{0}' not found")]
    NotFound(String),
}

/// Registry of demos, kept in registration order.
///
/// Registration is append-only. Running a demo never touches registry state,
/// so a registry can be shared across threads once populated.
#[derive(Debug, Default)]
pub struct DemoRegistry {
    units: Vec<DemoUnit>,
    index: HashMap<String, usize>,
    budget: Option<Duration>,
}

impl DemoRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report demos that run longer than `budget` as overrun failures.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Per-demo budget, if one is set.
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Register a demo body under `name`.
    ///
    /// Fails with [`RegistryError::DuplicateName`] if the name is taken; the
    /// existing demo is left untouched.
    pub fn register<F>(&mut self, name: impl Into<String>, run: F) -> Result<(), RegistryError>
    where
        F: Fn(&mut Output) -> DemoResult + Send + Sync + 'static,
    {
        self.register_unit(DemoUnit::new(name, run))
    }

    /// Register a fully built unit (with category and summary).
    pub fn register_unit(&mut self, unit: DemoUnit) -> Result<(), RegistryError> {
        if self.index.contains_key(unit.name()) {
            return Err(RegistryError::DuplicateName(unit.name().to_string()));
        }
        tracing::debug!(demo = unit.name(), position = self.units.len(), "registered demo");
        self.index.insert(unit.name().to_string(), self.units.len());
        self.units.push(unit);
        Ok(())
    }

    /// Names in registration order.
    pub fn list_names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.units.iter().map(DemoUnit::name)
    }

    /// Units in registration order.
    pub fn units(&self) -> impl Iterator<Item = &DemoUnit> + '_ {
        self.units.iter()
    }

    fn lookup(&self, name: &str) -> Result<&DemoUnit, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.units[i])
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Run one demo and capture its output.
    pub fn run_one(&self, name: &str) -> Result<ExecutionResult, RegistryError> {
        let unit = self.lookup(name)?;
        Ok(execute(unit, self.budget))
    }

    /// Run the named demos in the order given.
    ///
    /// Every name is resolved before anything runs, so an unknown name means
    /// no demo was executed.
    pub fn run_selected<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<ExecutionResult>, RegistryError> {
        let units = names
            .iter()
            .map(|name| self.lookup(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(units.into_iter().map(|unit| execute(unit, self.budget)).collect())
    }

    /// [`run_selected`](Self::run_selected) on the rayon pool. Results keep
    /// the order of `names`.
    pub fn run_selected_parallel<S: AsRef<str> + Sync>(
        &self,
        names: &[S],
    ) -> Result<Vec<ExecutionResult>, RegistryError> {
        let units = names
            .iter()
            .map(|name| self.lookup(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(units.into_par_iter().map(|unit| execute(unit, self.budget)).collect())
    }

    /// Run every demo in registration order. A failing demo does not stop the
    /// ones after it.
    pub fn run_all(&self) -> Vec<ExecutionResult> {
        self.units.iter().map(|unit| execute(unit, self.budget)).collect()
    }

    /// Like [`run_all`](Self::run_all), but demos run on the rayon pool.
    ///
    /// Each invocation owns its own [`Output`]; results come back in
    /// registration order whatever order the demos finish in.
    pub fn run_all_parallel(&self) -> Vec<ExecutionResult> {
        self.units.par_iter().map(|unit| execute(unit, self.budget)).collect()
    }
}

impl Registry<DemoUnit> for DemoRegistry {
    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&DemoUnit> {
        self.index.get(name).map(|&i| &self.units[i])
    }

    fn len(&self) -> usize {
        self.units.len()
    }

    fn names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.list_names())
    }
}
