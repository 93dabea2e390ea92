//! # Rainfall Excess Application Entry Point
//!
//! Thin caller around the library: loads the storm configuration, applies any
//! command-line overrides through the text input boundary, runs the engine and
//! prints the report. Diagnostics go to stderr, the report to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rainfall_excess_lib::cli::{Cli, Commands, InitConfigArgs, RunArgs};
use rainfall_excess_lib::config::Config;
use rainfall_excess_lib::{engine, report};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args)?,
        Commands::InitConfig(args) => init_config(args)?,
    }

    Ok(())
}

fn run(args: RunArgs) -> Result<()> {
    // An explicit path must exist; the default one may be absent
    let mut config = match &args.config {
        Some(path) => Config::try_load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load(),
    };
    if let Some(location) = args.location {
        config.storm.location = location;
    }

    let mut input = config.storm_input();
    args.storm.apply(&mut input);

    let result = engine::calculate(&input);

    if args.json {
        println!("{}", report::render_json(&result)?);
    } else {
        print!("{}", report::render_table(&config.storm.location, &result));
    }

    Ok(())
}

fn init_config(args: InitConfigArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    Config::default()
        .save_to_path(&args.path)
        .with_context(|| format!("writing config {}", args.path.display()))?;
    println!("Configuration written to {}", args.path.display());
    Ok(())
}
