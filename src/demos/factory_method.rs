//! Factory Method: each factory decides which vehicle to create; the shared
//! `drive_vehicle` logic only knows the `Vehicle` trait.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait Vehicle {
    fn drive(&self, out: &mut Output) -> fmt::Result;
}

pub struct Car;
pub struct Truck;

impl Vehicle for Car {
    fn drive(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Driving a car...")
    }
}

impl Vehicle for Truck {
    fn drive(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Driving a truck...")
    }
}

pub trait VehicleFactory {
    /// The factory method.
    fn create_vehicle(&self) -> Box<dyn Vehicle>;

    fn drive_vehicle(&self, out: &mut Output) -> fmt::Result {
        self.create_vehicle().drive(out)
    }
}

pub struct CarFactory;
pub struct TruckFactory;

impl VehicleFactory for CarFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Car)
    }
}

impl VehicleFactory for TruckFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Truck)
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let factories: [&dyn VehicleFactory; 2] = [&CarFactory, &TruckFactory];
    for factory in factories {
        factory.drive_vehicle(out)?;
    }
    Ok(())
}
