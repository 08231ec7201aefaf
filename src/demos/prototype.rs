//! Prototype: new shapes start as copies of existing ones and are then
//! adjusted. Copies are independent values.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait Shape {
    fn draw(&self, out: &mut Output) -> fmt::Result;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
}

impl Shape for Circle {
    fn draw(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Drawing a circle with radius: {}", self.radius)
    }
}

impl Shape for Rectangle {
    fn draw(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Drawing a rectangle with width: {} and height: {}", self.width, self.height)
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let circle = Circle { radius: 10 };
    circle.draw(out)?;

    let mut bigger = circle.clone();
    bigger.radius = 20;
    bigger.draw(out)?;

    let rectangle = Rectangle { width: 15, height: 25 };
    rectangle.draw(out)?;

    let mut resized = rectangle.clone();
    resized.width = 30;
    resized.height = 40;
    resized.draw(out)?;
    Ok(())
}
