//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod list;
mod run;
mod verify;

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{
    find_config, load_config, merge_cli_overrides, resolve_path, CliOverrides, PbookConfig,
};
use crate::demos;
use crate::registry::{Category, DemoRegistry, Registry, RegistryError};
use crate::suggest::{closest_names, did_you_mean};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pattern book - run the design pattern demos and check their output
#[derive(Parser)]
#[command(name = "pbook")]
#[command(about = "Pattern book - run design pattern demos and verify their output")]
#[command(version)]
pub struct Cli {
    /// Path to pbook.toml (default: discovered from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered demos in catalog order
    List {
        /// Only show demos of this family
        #[arg(long, value_enum)]
        category: Option<Category>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run demos and print their output
    Run {
        /// Demos to run, in this order (default: all)
        #[arg(conflicts_with = "all")]
        names: Vec<String>,

        /// Run every demo
        #[arg(long)]
        all: bool,

        /// Run demos on a thread pool; output order is unchanged
        #[arg(long)]
        parallel: bool,

        /// Report demos slower than this many milliseconds as failed
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
        budget_ms: Option<u64>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare demo output against golden fixtures
    Verify {
        /// Demos to verify (default: all)
        names: Vec<String>,

        /// Directory holding <name>.txt fixtures
        #[arg(long, value_name = "DIR")]
        golden: Option<PathBuf>,

        /// Rewrite fixtures from the current output instead of comparing
        #[arg(long)]
        update: bool,
    },
}

/// Loaded configuration plus where it came from.
pub(crate) struct Session {
    pub config: PbookConfig,
    pub config_path: Option<PathBuf>,
}

impl Session {
    /// Load pbook.toml (explicit path or discovered) and apply CLI overrides.
    fn load(explicit: Option<&Path>, overrides: &CliOverrides) -> Result<Self, ExitCode> {
        let config_path = explicit.map(Path::to_path_buf).or_else(find_config);
        let mut config = load_config(config_path.as_deref()).map_err(|e| {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        })?;
        merge_cli_overrides(&mut config, overrides);
        Ok(Self { config, config_path })
    }

    /// Catalog minus excluded demos, with the configured budget.
    pub fn registry(&self) -> Result<DemoRegistry, ExitCode> {
        let mut registry = DemoRegistry::new();
        if let Some(budget) = self.config.run.budget() {
            registry = registry.with_budget(budget);
        }
        demos::register_all(&mut registry, &self.config.catalog.exclude).map_err(|e| {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        })?;
        tracing::info!(demos = registry.len(), budget = ?registry.budget(), "catalog ready");
        Ok(registry)
    }

    /// Golden directory, relative paths taken from the config file's directory.
    /// A `--golden` flag is used as given.
    pub fn golden_dir(&self, flag: Option<&Path>) -> PathBuf {
        match flag {
            Some(dir) => dir.to_path_buf(),
            None => resolve_path(self.config_path.as_deref(), &self.config.verify.golden_dir),
        }
    }
}

/// Print an unknown-name error with suggestions. Returns the invalid-args code.
pub(crate) fn report_lookup_error(registry: &DemoRegistry, err: &RegistryError) -> ExitCode {
    eprintln!("Error: {}", err);
    if let RegistryError::NotFound(name) = err {
        if let Some(hint) = did_you_mean(&closest_names(name, registry.list_names())) {
            eprintln!("{}", hint);
        }
    }
    ExitCode::from(EXIT_INVALID_ARGS)
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be set when embedded; keep the existing one
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = match &cli.command {
        Commands::Run { parallel, budget_ms, .. } => CliOverrides {
            budget_ms: *budget_ms,
            parallel: parallel.then_some(true),
            ..Default::default()
        },
        Commands::Verify { golden, .. } => {
            CliOverrides { golden_dir: golden.clone(), ..Default::default() }
        }
        Commands::List { .. } => CliOverrides::default(),
    };

    let session = match Session::load(cli.config.as_deref(), &overrides) {
        Ok(session) => session,
        Err(code) => return code,
    };

    match cli.command {
        Commands::List { category, json } => list::run_list(&session, category, json),
        Commands::Run { names, all, json, .. } => run::run_demos(&session, &names, all, json),
        Commands::Verify { names, golden, update } => {
            verify::run_verify(&session, &names, golden.as_deref(), update)
        }
    }
}
