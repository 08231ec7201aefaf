//! Pattern book - a catalog of runnable design pattern demos
//!
//! This library provides:
//! - A registry of named demos with per-invocation output capture
//! - Failure isolation, so one broken demo never stops a batch run
//! - The 23 classic pattern demos and the catalog that registers them
//! - Golden-output fixtures to check demo output against
//! - `pbook.toml` configuration and the `pbook` command line

pub mod capture;
pub mod cli;
pub mod config;
pub mod demos;
pub mod golden;
pub mod registry;
pub mod suggest;
