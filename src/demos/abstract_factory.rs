//! Abstract Factory: families of related widgets created through one factory
//! interface, without naming the concrete widget types.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub trait Button {
    fn paint(&self, out: &mut Output) -> fmt::Result;
}

pub trait Checkbox {
    fn paint(&self, out: &mut Output) -> fmt::Result;
}

/// Creates one matching button/checkbox pair per platform.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct WindowsButton;
struct MacButton;
struct WindowsCheckbox;
struct MacCheckbox;

impl Button for WindowsButton {
    fn paint(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Painting a button in Windows style.")
    }
}

impl Button for MacButton {
    fn paint(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Painting a button in Mac style.")
    }
}

impl Checkbox for WindowsCheckbox {
    fn paint(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Painting a checkbox in Windows style.")
    }
}

impl Checkbox for MacCheckbox {
    fn paint(&self, out: &mut Output) -> fmt::Result {
        writeln!(out, "Painting a checkbox in Mac style.")
    }
}

pub struct WindowsFactory;
pub struct MacFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

/// Pick a factory by OS name (case-insensitive). Anything that isn't Windows
/// gets the Mac family.
pub fn factory_for(os_type: &str) -> Box<dyn GuiFactory> {
    if os_type.eq_ignore_ascii_case("windows") {
        Box::new(WindowsFactory)
    } else {
        Box::new(MacFactory)
    }
}

fn paint_widgets(factory: &dyn GuiFactory, out: &mut Output) -> fmt::Result {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    button.paint(out)?;
    checkbox.paint(out)
}

pub fn run(out: &mut Output) -> DemoResult {
    paint_widgets(factory_for("Windows").as_ref(), out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::lines_of;

    #[test]
    fn test_windows_family() {
        assert_eq!(
            lines_of(run),
            vec!["Painting a button in Windows style.", "Painting a checkbox in Windows style."]
        );
    }

    #[test]
    fn test_mac_family_and_fallback() {
        for os in ["Mac", "mac", "linux"] {
            let mut out = Output::new();
            paint_widgets(factory_for(os).as_ref(), &mut out).unwrap();
            assert_eq!(
                out.finish(),
                vec!["Painting a button in Mac style.", "Painting a checkbox in Mac style."]
            );
        }
    }

    #[test]
    fn test_windows_name_is_case_insensitive() {
        let mut out = Output::new();
        paint_widgets(factory_for("WINDOWS").as_ref(), &mut out).unwrap();
        assert_eq!(out.lines()[0], "Painting a button in Windows style.");
    }
}
