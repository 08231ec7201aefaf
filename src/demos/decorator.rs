//! Decorator: notifiers wrap other notifiers, each forwarding the message
//! inward first and then adding its own channel.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait Notifier {
    fn send(&self, message: &str, out: &mut Output) -> fmt::Result;
}

pub struct BasicNotifier;

impl Notifier for BasicNotifier {
    fn send(&self, message: &str, out: &mut Output) -> fmt::Result {
        writeln!(out, "Sending basic notification: {}", message)
    }
}

pub struct EmailNotifier<N> {
    inner: N,
}

pub struct SmsNotifier<N> {
    inner: N,
}

impl<N: Notifier> EmailNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: Notifier> SmsNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

impl<N: Notifier> Notifier for EmailNotifier<N> {
    fn send(&self, message: &str, out: &mut Output) -> fmt::Result {
        self.inner.send(message, out)?;
        writeln!(out, "Sending email notification: {}", message)
    }
}

impl<N: Notifier> Notifier for SmsNotifier<N> {
    fn send(&self, message: &str, out: &mut Output) -> fmt::Result {
        self.inner.send(message, out)?;
        writeln!(out, "Sending SMS notification: {}", message)
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn send(&self, message: &str, out: &mut Output) -> fmt::Result {
        (**self).send(message, out)
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let notifier = BasicNotifier;
    notifier.send("Hello!", out)?;

    writeln!(out, "\nAdding Email and SMS Decorators:")?;
    let decorated = SmsNotifier::new(EmailNotifier::new(&notifier));
    decorated.send("Hello with enhancements!", out)?;
    Ok(())
}
