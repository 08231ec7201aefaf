//! Per-invocation output capture.
//!
//! Demos never write to the process stdout. Each invocation is handed its own
//! [`Output`], which implements [`std::fmt::Write`] so demo code can use the
//! usual `write!`/`writeln!` macros. Text is split into lines as it arrives;
//! partial writes (no trailing newline) are joined with whatever comes next.

use std::fmt;

/// Result type returned by a demo body.
///
/// Boxed so that demos can `?` both formatting errors and their own domain
/// errors without a shared error enum.
pub type DemoResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Line-oriented text sink owned by a single demo invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    lines: Vec<String>,
    partial: String,
}

impl Output {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines terminated so far. A trailing partial line is not included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when nothing at all has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.partial.is_empty()
    }

    /// Consume the sink, returning every line including an unterminated tail.
    pub fn finish(mut self) -> Vec<String> {
        if !self.partial.is_empty() {
            self.lines.push(std::mem::take(&mut self.partial));
        }
        self.lines
    }
}

impl fmt::Write for Output {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s;
        while let Some(pos) = rest.find('\n') {
            self.partial.push_str(&rest[..pos]);
            self.lines.push(std::mem::take(&mut self.partial));
            rest = &rest[pos + 1..];
        }
        self.partial.push_str(rest);
        Ok(())
    }
}

/// Run `body` against a fresh [`Output`] and return the captured lines.
///
/// Errors from `body` are returned alongside whatever was written before the
/// failure.
pub fn capture<F>(body: F) -> (Vec<String>, DemoResult)
where
    F: FnOnce(&mut Output) -> DemoResult,
{
    let mut out = Output::new();
    let result = body(&mut out);
    (out.finish(), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn test_writeln_produces_lines() {
        let mut out = Output::new();
        writeln!(out, "first").unwrap();
        writeln!(out, "second").unwrap();
        assert_eq!(out.finish(), vec!["first", "second"]);
    }

    #[test]
    fn test_partial_writes_join() {
        let mut out = Output::new();
        write!(out, "Drawing a Circle with ").unwrap();
        writeln!(out, "Applying red color.").unwrap();
        assert_eq!(out.lines(), ["Drawing a Circle with Applying red color."]);
    }

    #[test]
    fn test_embedded_newlines_make_blank_lines() {
        let mut out = Output::new();
        writeln!(out, "\nUndoing changes:").unwrap();
        writeln!(out, "done.\n").unwrap();
        assert_eq!(out.finish(), vec!["", "Undoing changes:", "done.", ""]);
    }

    #[test]
    fn test_unterminated_tail_kept_on_finish() {
        let mut out = Output::new();
        writeln!(out, "a").unwrap();
        write!(out, "b").unwrap();
        assert_eq!(out.lines(), ["a"]);
        assert_eq!(out.finish(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_output() {
        let out = Output::new();
        assert!(out.is_empty());
        assert!(out.finish().is_empty());
    }

    #[test]
    fn test_capture_keeps_lines_before_error() {
        let (lines, result) = capture(|out| {
            writeln!(out, "before")?;
            Err("boom".into())
        });
        assert_eq!(lines, vec!["before"]);
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }
}
