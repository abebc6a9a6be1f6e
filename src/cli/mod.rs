//! CLI command definitions for deployable-config
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod dump;

use crate::config::{PackageSource, ResolverOptions};
use crate::logging::Logger;
use clap::{Parser, Subcommand};
use dump::DumpArgs;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Inspect a resolved deployable configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base directory of the application (default: current directory)
    #[arg(short, long, global = true)]
    pub path: Option<PathBuf>,

    /// Directory scanned for config files (default: <path>/config)
    #[arg(short, long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Explicit config file, relative to the config directory
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Environment label (default: $APP_ENV, then production)
    #[arg(short = 'L', long, global = true)]
    pub label: Option<String>,

    /// Attach metadata from <path>/package.json
    #[arg(long, global = true)]
    pub package: bool,

    /// Enable verbose logging (`RUST_LOG` directives take precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value at a dotted key, failing if it does not exist
    Get {
        /// Dotted key, e.g. `server.port`
        key: String,
    },

    /// Print the value at a dotted key, or `null` if it does not exist
    Fetch {
        /// Dotted key, e.g. `server.port`
        key: String,
    },

    /// Print the whole merged configuration
    Dump(DumpArgs),

    /// List the config files that were merged, in order
    Sources,

    /// Print the current environment and its classification
    Env,
}

impl Cli {
    /// Resolver options described by the global flags.
    pub fn resolver_options(&self) -> ResolverOptions {
        let mut options = ResolverOptions::new()
            .with_package(PackageSource::from(self.package))
            .with_logger(Logger::new().with_name("deployable-config"));
        if let Some(ref path) = self.path {
            options = options.with_path(path);
        }
        if let Some(ref config_path) = self.config_path {
            options = options.with_config_path(config_path);
        }
        if let Some(ref file) = self.file {
            options = options.with_file(file);
        }
        if let Some(ref label) = self.label {
            options = options.with_label(label);
        }
        options
    }

    /// Subscriber filter: `RUST_LOG` if set, else debug with `--verbose`
    /// and warn without.
    pub fn log_filter(&self) -> EnvFilter {
        let level = if self.verbose { Level::DEBUG } else { Level::WARN };
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy()
    }
}
