//! Visitor: area and perimeter calculations live in visitors, not in the
//! shapes; each shape only knows how to accept a visitor.

use std::f64::consts::PI;
use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait ShapeVisitor {
    fn visit_circle(&mut self, circle: &Circle, out: &mut Output) -> fmt::Result;
    fn visit_rectangle(&mut self, rectangle: &Rectangle, out: &mut Output) -> fmt::Result;
}

pub trait Shape {
    fn accept(&self, visitor: &mut dyn ShapeVisitor, out: &mut Output) -> fmt::Result;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Shape for Circle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor, out: &mut Output) -> fmt::Result {
        visitor.visit_circle(self, out)
    }
}

impl Shape for Rectangle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor, out: &mut Output) -> fmt::Result {
        visitor.visit_rectangle(self, out)
    }
}

/// Prints each area and keeps a running total.
#[derive(Debug, Default)]
pub struct AreaCalculator {
    pub total: f64,
}

#[derive(Debug, Default)]
pub struct PerimeterCalculator {
    pub total: f64,
}

impl ShapeVisitor for AreaCalculator {
    fn visit_circle(&mut self, circle: &Circle, out: &mut Output) -> fmt::Result {
        let area = PI * circle.radius.powi(2);
        self.total += area;
        writeln!(out, "Circle area: {:?}", area)
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle, out: &mut Output) -> fmt::Result {
        let area = rectangle.width * rectangle.height;
        self.total += area;
        writeln!(out, "Rectangle area: {:?}", area)
    }
}

impl ShapeVisitor for PerimeterCalculator {
    fn visit_circle(&mut self, circle: &Circle, out: &mut Output) -> fmt::Result {
        let perimeter = 2.0 * PI * circle.radius;
        self.total += perimeter;
        writeln!(out, "Circle perimeter: {:?}", perimeter)
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle, out: &mut Output) -> fmt::Result {
        let perimeter = 2.0 * (rectangle.width + rectangle.height);
        self.total += perimeter;
        writeln!(out, "Rectangle perimeter: {:?}", perimeter)
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let shapes: [&dyn Shape; 2] = [&Circle { radius: 5.0 }, &Rectangle { width: 4.0, height: 6.0 }];

    writeln!(out, "Calculating area:")?;
    let mut area = AreaCalculator::default();
    for shape in shapes {
        shape.accept(&mut area, out)?;
    }

    writeln!(out, "\nCalculating perimeter:")?;
    let mut perimeter = PerimeterCalculator::default();
    for shape in shapes {
        shape.accept(&mut perimeter, out)?;
    }
    Ok(())
}
