//! deployable-config CLI
//!
//! Resolves a configuration the same way an application would and prints
//! parts of it, for checking what a deployment will actually see.

use anyhow::Result;
use clap::Parser;
use deployable_config::cli::dump::{DumpFormat, render};
use deployable_config::cli::{Cli, Command};
use deployable_config::{ConfigResolver, env};
use serde_json::Value;
use std::fs::OpenOptions;
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

fn init_logging(cli: &Cli) -> Result<()> {
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(cli.log_filter())
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(cli.log_filter())
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(cli.log_filter())
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

fn print_value(value: &Value) -> Result<()> {
    match value {
        Value::String(s) => println!("{}", s),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if let Command::Env = cli.command {
        let current = env::current_env();
        let name = current.as_deref().unwrap_or("(unset)");
        let production_like = current.as_deref().is_some_and(env::is_production_like);
        let test = current.as_deref().is_some_and(env::is_test_env);
        println!("{}={}", env::ENV_VAR, name);
        println!("production_like={}", production_like);
        println!("test={}", test);
        return Ok(());
    }

    let config = ConfigResolver::new("cli", cli.resolver_options())?;
    debug!(
        label = %config.label(),
        config_path = %config.config_path().display(),
        sources = config.sources().len(),
        "Resolved configuration"
    );

    match cli.command {
        Command::Get { ref key } => print_value(config.get(key)?)?,
        Command::Fetch { ref key } => print_value(config.fetch(key).unwrap_or(&Value::Null))?,
        Command::Dump(ref args) => {
            let value = match args.key {
                Some(ref key) => config.get(key)?.clone(),
                None => config.config_value(),
            };
            print!("{}", render(&value, args.format)?);
            if args.format == DumpFormat::Json {
                println!();
            }
        }
        Command::Sources => {
            for source in config.sources() {
                println!("{}", source.display());
            }
        }
        Command::Env => {}
    }

    Ok(())
}
