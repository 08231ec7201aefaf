//! Singleton: exactly one service instance, created lazily on first request and
//! handed out by reference. The holder is an ordinary owned value passed to
//! whoever needs the service; there is no global.

use std::cell::{Cell, OnceCell};
use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

#[derive(Debug)]
pub struct Service {
    greeting: &'static str,
}

impl Service {
    pub fn show_message(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "{}", self.greeting)
    }
}

/// Owner of the single [`Service`].
#[derive(Debug, Default)]
pub struct ServiceHolder {
    instance: OnceCell<Service>,
    created: Cell<u32>,
}

impl ServiceHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instance(&self) -> &Service {
        self.instance.get_or_init(|| {
            self.created.set(self.created.get() + 1);
            Service { greeting: "Hello from the Singleton instance!" }
        })
    }

    /// How many times the service was constructed (0 or 1).
    pub fn constructions(&self) -> u32 {
        self.created.get()
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let holder = ServiceHolder::new();

    let first = holder.instance();
    first.show_message(out)?;

    let second = holder.instance();
    if std::ptr::eq(first, second) {
        writeln!(out, "Both instances are the same.")?;
    } else {
        writeln!(out, "Instances are different, Singleton is not working as expected.")?;
    }
    Ok(())
}
