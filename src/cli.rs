use crate::config::DEFAULT_CONFIG_PATH;
use crate::input::StormOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rainfall-excess",
    version,
    about = "Design-storm rainfall excess (Time-Area Method losses)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate intensity, depth and per-bin rainfall excess
    Run(RunArgs),
    /// Write the default configuration file
    InitConfig(InitConfigArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long,
        help = "Config file (defaults to ./rainfall-config.toml, or built-in values if absent)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Location shown in the report header")]
    pub location: Option<String>,

    #[command(flatten)]
    pub storm: StormOverrides,

    #[arg(long, default_value_t = false, help = "Print JSON instead of a table")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InitConfigArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub path: PathBuf,

    #[arg(long, default_value_t = false, help = "Overwrite an existing file")]
    pub force: bool,
}
