//! Command: requests wrapped as objects and submitted to an invoker that
//! executes them and keeps a history.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

/// Receiver.
pub struct Light;

impl Light {
    pub fn turn_on(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Light is ON")
    }

    pub fn turn_off(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Light is OFF")
    }
}

pub trait Command {
    fn execute(&self, out: &mut Output) -> fmt::Result;

    /// Short label used by the invoker's history.
    fn label(&self) -> &'static str;
}

pub struct TurnOn<'a> {
    light: &'a Light,
}

pub struct TurnOff<'a> {
    light: &'a Light,
}

impl<'a> TurnOn<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl<'a> TurnOff<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for TurnOn<'_> {
    fn execute(&self, out: &mut Output) -> fmt::Result {
        self.light.turn_on(out)
    }

    fn label(&self) -> &'static str {
        "turn on"
    }
}

impl Command for TurnOff<'_> {
    fn execute(&self, out: &mut Output) -> fmt::Result {
        self.light.turn_off(out)
    }

    fn label(&self) -> &'static str {
        "turn off"
    }
}

/// Invoker.
#[derive(Default)]
pub struct RemoteControl<'a> {
    history: Vec<Box<dyn Command + 'a>>,
}

impl<'a> RemoteControl<'a> {
    pub fn new() -> Self {
        Self { history: Vec::new() }
    }

    pub fn submit(&mut self, command: Box<dyn Command + 'a>, out: &mut Output) -> fmt::Result {
        command.execute(out)?;
        self.history.push(command);
        Ok(())
    }

    /// Labels of the submitted commands, oldest first.
    pub fn history(&self) -> Vec<&'static str> {
        self.history.iter().map(|c| c.label()).collect()
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let light = Light;
    let mut remote = RemoteControl::new();
    remote.submit(Box::new(TurnOn::new(&light)), out)?;
    remote.submit(Box::new(TurnOff::new(&light)), out)?;
    Ok(())
}
