//! Flyweight: trees share their intrinsic state (`TreeType`) through an
//! explicitly owned cache keyed by name, color and texture.

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::rc::Rc;

use crate::capture::{DemoResult, Output};

/// Shared intrinsic state.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    name: String,
    color: String,
    texture: String,
}

impl TreeType {
    pub fn display(&self, x: i32, y: i32, out: &mut Output) -> fmt::Result {
        writeln!(
            out,
            "Displaying {} tree at ({}, {}) with color {} and texture {}",
            self.name, x, y, self.color, self.texture
        )
    }
}

type TreeKey = (String, String, String);

/// Cache of tree types. Owned by whoever plants the forest.
#[derive(Debug, Default)]
pub struct TreeFactory {
    types: HashMap<TreeKey, Rc<TreeType>>,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared type for this combination, creating it on first use.
    pub fn tree_type(
        &mut self,
        name: &str,
        color: &str,
        texture: &str,
        out: &mut Output,
    ) -> Result<Rc<TreeType>, fmt::Error> {
        let key = (name.to_string(), color.to_string(), texture.to_string());
        if let Some(existing) = self.types.get(&key) {
            return Ok(Rc::clone(existing));
        }

        let tree_type = Rc::new(TreeType {
            name: key.0.clone(),
            color: key.1.clone(),
            texture: key.2.clone(),
        });
        self.types.insert(key, Rc::clone(&tree_type));
        writeln!(out, "Creating new TreeType: {}", name)?;
        Ok(tree_type)
    }

    /// Number of distinct types created so far.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Extrinsic state plus a handle to the shared type.
pub struct Tree {
    x: i32,
    y: i32,
    kind: Rc<TreeType>,
}

impl Tree {
    pub fn new(x: i32, y: i32, kind: Rc<TreeType>) -> Self {
        Self { x, y, kind }
    }

    pub fn display(&self, out: &mut Output) -> fmt::Result {
        self.kind.display(self.x, self.y, out)
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut factory = TreeFactory::new();
    let oak = factory.tree_type("Oak", "Green", "Rough", out)?;
    let pine = factory.tree_type("Pine", "Dark Green", "Smooth", out)?;

    let forest = [
        Tree::new(10, 20, Rc::clone(&oak)),
        Tree::new(30, 40, oak),
        Tree::new(50, 60, pine),
    ];
    for tree in &forest {
        tree.display(out)?;
    }
    Ok(())
}
