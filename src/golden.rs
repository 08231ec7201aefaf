//! Golden output fixtures.
//!
//! A fixture is `<dir>/<demo-name>.txt` holding the demo's expected output,
//! one line per captured line, each terminated by `\n`. Blank output lines
//! are blank file lines.

use glob::glob;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::registry::ExecutionResult;

/// Fixture file extension
pub const FIXTURE_EXT: &str = "txt";

/// Error loading or writing fixtures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GoldenError {
    /// File I/O error
    #[error("Failed to access golden fixture: {0}")]
    Io(#[from] std::io::Error),
    /// Fixture directory path is not a directory
    #[error("Golden directory '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Directory path could not be turned into a glob pattern
    #[error("Invalid golden directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Refused to record the output of a failed demo
    #[error("Demo '{0}' failed; not recording its output")]
    FailedDemo(String),
}

/// Outcome of comparing one execution result against its fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Output equals the fixture
    Match,
    /// First differing line (1-based). `None` means that side ran out of lines.
    Mismatch { line: usize, expected: Option<String>, actual: Option<String> },
    /// No fixture exists for this demo
    Missing,
    /// The demo recorded a failure, so its output was not compared
    Failed { message: String },
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => write!(f, "matches golden output"),
            Verdict::Mismatch { line, expected, actual } => {
                let show = |s: &Option<String>| match s {
                    Some(text) => format!("{:?}", text),
                    None => "<end of output>".to_string(),
                };
                write!(f, "line {}: expected {}, got {}", line, show(expected), show(actual))
            }
            Verdict::Missing => write!(f, "no golden fixture"),
            Verdict::Failed { message } => write!(f, "demo failed: {}", message),
        }
    }
}

/// Fixtures loaded from one directory, keyed by demo name.
#[derive(Debug, Clone, Default)]
pub struct GoldenSet {
    fixtures: BTreeMap<String, Vec<String>>,
}

impl GoldenSet {
    /// Read every `*.txt` in `dir` (not recursive).
    pub fn load(dir: &Path) -> Result<Self, GoldenError> {
        if !dir.is_dir() {
            return Err(GoldenError::NotADirectory(dir.to_path_buf()));
        }

        let pattern = format!("{}/*.{}", glob::Pattern::escape(&dir.to_string_lossy()), FIXTURE_EXT);

        let mut fixtures = BTreeMap::new();
        for entry in glob(&pattern)? {
            let path = entry.map_err(glob::GlobError::into_error)?;
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping fixture with non UTF-8 name");
                continue;
            };
            if !path.is_file() {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            fixtures.insert(name.to_string(), contents.lines().map(str::to_string).collect());
        }
        tracing::debug!(dir = %dir.display(), count = fixtures.len(), "loaded golden fixtures");
        Ok(Self { fixtures })
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Expected lines for `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.fixtures.get(name).map(Vec::as_slice)
    }

    /// Fixture names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fixtures.keys().map(String::as_str)
    }

    /// Compare `result` against its fixture.
    pub fn check(&self, result: &ExecutionResult) -> Verdict {
        if let Some(failure) = &result.failure {
            return Verdict::Failed { message: failure.to_string() };
        }
        let Some(expected) = self.get(&result.name) else {
            return Verdict::Missing;
        };
        let verdict = compare(expected, &result.lines);
        if !verdict.is_match() {
            tracing::warn!(demo = %result.name, %verdict, "golden mismatch");
        }
        verdict
    }
}

fn compare(expected: &[String], actual: &[String]) -> Verdict {
    let longest = expected.len().max(actual.len());
    for i in 0..longest {
        let (e, a) = (expected.get(i), actual.get(i));
        if e != a {
            return Verdict::Mismatch { line: i + 1, expected: e.cloned(), actual: a.cloned() };
        }
    }
    Verdict::Match
}

/// Write (or overwrite) the fixture for `result`, creating `dir` if needed.
/// Returns the fixture path.
pub fn write_golden(dir: &Path, result: &ExecutionResult) -> Result<PathBuf, GoldenError> {
    if !result.is_success() {
        return Err(GoldenError::FailedDemo(result.name.clone()));
    }
    if dir.exists() && !dir.is_dir() {
        return Err(GoldenError::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.{}", result.name, FIXTURE_EXT));
    let mut contents = String::new();
    for line in &result.lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(&path, contents)?;
    tracing::info!(demo = %result.name, path = %path.display(), "wrote golden fixture");
    Ok(path)
}
