//! hrms — interactive department/employee registry.
//!
//! # Usage
//!
//! ```text
//! hrms [--config <path>] [--no-color]
//!
//! hrms> add-department Engineering 5 5000
//! hrms> add-employee Engineering 01 "Ada Lovelace" Engineer 1200
//! hrms> list [--json]
//! hrms> edit-employee EN01 "Ada King" 1300 "Lead Engineer"
//! hrms> remove-employee Engineering EN01
//! hrms> remove-department Engineering
//! hrms> exit
//! ```

mod commands;
mod config;
mod render;
mod shell;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hrms_core::Registry;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "hrms",
    version,
    about = "Track departments and employees under headcount and salary limits",
    long_about = None,
)]
struct Cli {
    /// Config file. Defaults to ~/.hrms/config.yaml when present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored status lines.
    #[arg(long)]
    no_color: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    init_tracing(config.log.as_deref());

    if cli.no_color || config.color == Some(false) {
        colored::control::set_override(false);
    }

    let mut registry = Registry::new();
    config
        .seed(&mut registry)
        .context("failed to seed registry from config")?;
    if !registry.is_empty() {
        tracing::info!(departments = registry.len(), "registry seeded from config");
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    shell::run(&mut registry, stdin.lock(), interactive)
}

/// `RUST_LOG` wins over the config directive; default is `warn`. Logs go to stderr.
fn init_tracing(directive: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
