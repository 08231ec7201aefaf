//! Proxy: the image proxy defers loading the real image until the first
//! display, then reuses it.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait Image {
    fn display(&mut self, out: &mut Output) -> fmt::Result;
}

pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Loading happens on construction.
    pub fn load(filename: &str, out: &mut Output) -> Result<Self, fmt::Error> {
        writeln!(out, "Loading {}", filename)?;
        Ok(Self { filename: filename.to_string() })
    }
}

impl Image for RealImage {
    fn display(&mut self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Displaying {}", self.filename)
    }
}

pub struct ProxyImage {
    filename: String,
    real: Option<RealImage>,
}

impl ProxyImage {
    pub fn new(filename: impl Into<String>) -> Self {
        Self { filename: filename.into(), real: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.is_some()
    }
}

impl Image for ProxyImage {
    fn display(&mut self, out: &mut Output) -> fmt::Result {
        if self.real.is_none() {
            self.real = Some(RealImage::load(&self.filename, out)?);
        }
        match self.real.as_mut() {
            Some(real) => real.display(out),
            None => Ok(()),
        }
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut image = ProxyImage::new("photo.jpg");

    writeln!(out, "Image will be loaded on demand:")?;
    image.display(out)?;

    writeln!(out, "Image already loaded:")?;
    image.display(out)?;
    Ok(())
}
