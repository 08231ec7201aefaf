//! Builder: step-by-step construction of a `House` with two required parts and
//! several optional ones.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

/// A finished house. Only obtainable through [`HouseBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    foundation: String,
    structure: String,
    windows: u32,
    doors: u32,
    has_roof: bool,
    has_garage: bool,
    has_swimming_pool: bool,
}

impl House {
    pub fn foundation(&self) -> &str {
        &self.foundation
    }

    pub fn structure(&self) -> &str {
        &self.structure
    }

    pub fn windows(&self) -> u32 {
        self.windows
    }

    pub fn doors(&self) -> u32 {
        self.doors
    }

    pub fn has_roof(&self) -> bool {
        self.has_roof
    }

    pub fn has_garage(&self) -> bool {
        self.has_garage
    }

    pub fn has_swimming_pool(&self) -> bool {
        self.has_swimming_pool
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "House with foundation: {}, structure: {}, windows: {}, doors: {}, roof: {}, garage: {}, swimming pool: {}",
            self.foundation,
            self.structure,
            self.windows,
            self.doors,
            self.has_roof,
            self.has_garage,
            self.has_swimming_pool
        )
    }
}

/// Consuming builder. Optional parts default to zero/false.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until build() is called"]
pub struct HouseBuilder {
    house: House,
}

impl HouseBuilder {
    pub fn new(foundation: impl Into<String>, structure: impl Into<String>) -> Self {
        Self {
            house: House {
                foundation: foundation.into(),
                structure: structure.into(),
                windows: 0,
                doors: 0,
                has_roof: false,
                has_garage: false,
                has_swimming_pool: false,
            },
        }
    }

    pub fn windows(mut self, windows: u32) -> Self {
        self.house.windows = windows;
        self
    }

    pub fn doors(mut self, doors: u32) -> Self {
        self.house.doors = doors;
        self
    }

    pub fn roof(mut self, has_roof: bool) -> Self {
        self.house.has_roof = has_roof;
        self
    }

    pub fn garage(mut self, has_garage: bool) -> Self {
        self.house.has_garage = has_garage;
        self
    }

    pub fn swimming_pool(mut self, has_swimming_pool: bool) -> Self {
        self.house.has_swimming_pool = has_swimming_pool;
        self
    }

    pub fn build(self) -> House {
        self.house
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let house = HouseBuilder::new("Concrete", "Wood")
        .windows(4)
        .doors(2)
        .roof(true)
        .garage(true)
        .swimming_pool(false)
        .build();

    writeln!(out, "{}", house)?;
    Ok(())
}
