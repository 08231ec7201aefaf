//! Bridge: shapes (abstraction) and colors (implementation) vary
//! independently; a shape holds whichever color it was built with.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait Color {
    fn apply_color(&self, out: &mut Output) -> fmt::Result;
}

pub struct Red;
pub struct Blue;

impl Color for Red {
    fn apply_color(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Applying red color.")
    }
}

impl Color for Blue {
    fn apply_color(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Applying blue color.")
    }
}

pub trait Shape {
    fn draw(&self, out: &mut Output) -> fmt::Result;
}

pub struct Circle {
    color: Box<dyn Color>,
}

pub struct Square {
    color: Box<dyn Color>,
}

impl Circle {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Square {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Circle {
    fn draw(&self, out: &mut Output) -> fmt::Result {
        write!(out, "Drawing a Circle with ")?;
        self.color.apply_color(out)
    }
}

impl Shape for Square {
    fn draw(&self, out: &mut Output) -> fmt::Result {
        write!(out, "Drawing a Square with ")?;
        self.color.apply_color(out)
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let shapes: [Box<dyn Shape>; 2] =
        [Box::new(Circle::new(Box::new(Red))), Box::new(Square::new(Box::new(Blue)))];
    for shape in &shapes {
        shape.draw(out)?;
    }
    Ok(())
}
