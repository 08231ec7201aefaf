//! Iterator: a collection hands out a cursor that walks its names without
//! exposing the underlying storage.

use std::fmt::Write;

use crate::capture::{DemoResult, Output};

#[derive(Debug, Default, Clone)]
pub struct NameCollection {
    names: Vec<String>,
}

impl NameCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn iter(&self) -> NameIter<'_> {
        NameIter { names: &self.names, position: 0 }
    }
}

/// Cursor over a [`NameCollection`].
#[derive(Debug, Clone)]
pub struct NameIter<'a> {
    names: &'a [String],
    position: usize,
}

impl<'a> Iterator for NameIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.get(self.position)?;
        self.position += 1;
        Some(name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.names.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NameIter<'_> {}

impl<'a> IntoIterator for &'a NameCollection {
    type Item = &'a str;
    type IntoIter = NameIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut collection = NameCollection::new();
    collection.add_name("Paulo");
    collection.add_name("Cesar");
    collection.add_name("Italo");

    writeln!(out, "Iterating through the NameCollection:")?;
    for name in &collection {
        writeln!(out, "Name: {}", name)?;
    }
    Ok(())
}
