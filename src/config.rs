//! # Configuration Management
//!
//! This module handles loading and saving the design storm and catchment from
//! the rainfall-config.toml file. Defaults reproduce the calculator's starting
//! values so the tool produces a sensible table without any file present.

use crate::{StormInput, DEFAULT_PATTERN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "rainfall-config.toml";

/// Errors from reading or writing a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("config IO: {0}")]
    Io(#[from] io::Error),

    /// File is not valid TOML or is missing fields
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration loaded from rainfall-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Design storm
    pub storm: StormConfig,
    /// Area split and losses
    pub catchment: CatchmentConfig,
    /// Temporal pattern
    pub pattern: PatternConfig,
}

/// Design storm definition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StormConfig {
    /// Human-readable location, shown in the report header only
    pub location: String,
    /// Average recurrence interval in years
    pub ari_years: f64,
    /// Storm duration in minutes
    pub duration_minutes: f64,
    /// IDF curve coefficients for the location
    pub idf: IdfConfig,
}

/// Coefficients of `i = K · ARI^x / (A + t)^n`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct IdfConfig {
    pub k: f64,
    pub x: f64,
    pub a: f64,
    pub n: f64,
}

/// Catchment surfaces and their losses
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CatchmentConfig {
    pub pervious_percent: f64,
    pub impervious_percent: f64,
    /// mm
    pub pervious_initial_loss: f64,
    /// mm/hr
    pub pervious_continuous_loss: f64,
    /// mm
    pub impervious_initial_loss: f64,
    /// mm/hr
    pub impervious_continuous_loss: f64,
}

/// Fractions of storm depth per 5-minute bin
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PatternConfig {
    pub fractions: Vec<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storm: StormConfig {
                location: "Kuala Lumpur".to_string(),
                ari_years: 10.0,
                duration_minutes: 30.0,
                idf: IdfConfig {
                    k: 61.976,
                    x: 0.145,
                    a: 0.362,
                    n: 0.708,
                },
            },
            catchment: CatchmentConfig {
                pervious_percent: 50.0,
                impervious_percent: 50.0,
                pervious_initial_loss: 10.0,
                pervious_continuous_loss: 2.5,
                impervious_initial_loss: 1.5,
                impervious_continuous_loss: 0.0,
            },
            pattern: PatternConfig {
                fractions: DEFAULT_PATTERN.to_vec(),
            },
        }
    }
}

impl Config {
    /// Load configuration from rainfall-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load_from_path(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => {
                info!(
                    path = %path.as_ref().display(),
                    "no config file found, using default configuration"
                );
                Self::default()
            }
            Err(e) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "invalid config file, using default configuration"
                );
                Self::default()
            }
        }
    }

    /// Load configuration from specified path, reporting any failure
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        let config = toml::from_str::<Config>(&contents)?;
        info!(
            location = %config.storm.location,
            path = %path.as_ref().display(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Save current configuration as pretty TOML
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }

    /// Engine input described by this configuration
    pub fn storm_input(&self) -> StormInput {
        let storm = &self.storm;
        let catchment = &self.catchment;
        StormInput {
            ari: storm.ari_years,
            duration_minutes: storm.duration_minutes,
            k: storm.idf.k,
            x: storm.idf.x,
            a: storm.idf.a,
            n: storm.idf.n,
            pervious_percent: catchment.pervious_percent,
            impervious_percent: catchment.impervious_percent,
            pervious_initial_loss: catchment.pervious_initial_loss,
            impervious_initial_loss: catchment.impervious_initial_loss,
            pervious_continuous_loss: catchment.pervious_continuous_loss,
            impervious_continuous_loss: catchment.impervious_continuous_loss,
            pattern: self.pattern.fractions.clone(),
        }
    }
}
