//! Observer: displays subscribe to a temperature sensor and are notified on
//! every reading until they unsubscribe.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait TemperatureObserver {
    fn update(&self, temperature: f32, out: &mut Output) -> fmt::Result;
}

pub struct DisplayDevice {
    name: String,
}

impl DisplayDevice {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TemperatureObserver for DisplayDevice {
    fn update(&self, temperature: f32, out: &mut Output) -> fmt::Result {
        writeln!(out, "{} display updated: Current Temperature = {:?}°C", self.name, temperature)
    }
}

/// Token returned by [`TemperatureSensor::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u32);

#[derive(Default)]
pub struct TemperatureSensor {
    observers: Vec<(Subscription, Box<dyn TemperatureObserver>)>,
    next_id: u32,
    temperature: f32,
}

impl TemperatureSensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn TemperatureObserver>) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false when the subscription was already gone.
    pub fn unsubscribe(&mut self, id: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: f32, out: &mut Output) -> fmt::Result {
        self.temperature = temperature;
        self.notify(out)
    }

    fn notify(&self, out: &mut Output) -> fmt::Result {
        for (_, observer) in &self.observers {
            observer.update(self.temperature, out)?;
        }
        Ok(())
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut sensor = TemperatureSensor::new();
    let phone = sensor.subscribe(Box::new(DisplayDevice::new("Phone")));
    sensor.subscribe(Box::new(DisplayDevice::new("Laptop")));

    writeln!(out, "Setting temperature to 25°C:")?;
    sensor.set_temperature(25.0, out)?;

    writeln!(out, "\nSetting temperature to 30°C:")?;
    sensor.set_temperature(30.0, out)?;

    sensor.unsubscribe(phone);
    writeln!(out, "\nSetting temperature to 28°C after removing Phone display:")?;
    sensor.set_temperature(28.0, out)?;
    Ok(())
}
