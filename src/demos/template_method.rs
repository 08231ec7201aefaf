//! Template Method: `prepare_recipe` fixes the order of steps; each beverage
//! only fills in brewing and condiments.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait Beverage {
    fn brew(&self, out: &mut Output) -> fmt::Result;
    fn add_condiments(&self, out: &mut Output) -> fmt::Result;

    /// The template. Implementors should not override it.
    fn prepare_recipe(&self, out: &mut Output) -> fmt::Result {
        boil_water(out)?;
        self.brew(out)?;
        pour_in_cup(out)?;
        self.add_condiments(out)
    }
}

fn boil_water(out: &mut Output) -> fmt::Result {
    writeln!(out, "Boiling water")
}

fn pour_in_cup(out: &mut Output) -> fmt::Result {
    writeln!(out, "Pouring into cup")
}

pub struct Tea;
pub struct Coffee;

impl Beverage for Tea {
    fn brew(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Steeping the tea")
    }

    fn add_condiments(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Adding lemon")
    }
}

impl Beverage for Coffee {
    fn brew(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Dripping coffee through filter")
    }

    fn add_condiments(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Adding sugar and milk")
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    writeln!(out, "Preparing tea:")?;
    Tea.prepare_recipe(out)?;

    writeln!(out, "\nPreparing coffee:")?;
    Coffee.prepare_recipe(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::lines_of;

    #[test]
    fn test_demo_output() {
        assert_eq!(
            lines_of(run),
            vec![
                "Preparing tea:",
                "Boiling water",
                "Steeping the tea",
                "Pouring into cup",
                "Adding lemon",
                "",
                "Preparing coffee:",
                "Boiling water",
                "Dripping coffee through filter",
                "Pouring into cup",
                "Adding sugar and milk",
            ]
        );
    }
}
