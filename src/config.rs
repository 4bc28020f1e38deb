// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.4
// Author: Lukas Bower
// Date Modified: 2026-06-02

//! Subsystem configuration loading.
//!
//! Boards tune the cooling subsystem through a small TOML file plus
//! `COHTHERM_*` environment overrides. Everything has a working default,
//! so an empty environment yields a usable configuration.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use log::warn;

const DEFAULT_PREFIX: &str = "thermal-cpucore";

/// Tunables for the cpucore cooling subsystem.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CoolingConfig {
    /// Prefix for registered device names.
    pub name_prefix: Option<String>,
    /// Override for the controllable core count.
    pub total_cores: Option<u64>,
}

impl Default for CoolingConfig {
    fn default() -> Self {
        Self {
            name_prefix: Some(DEFAULT_PREFIX.into()),
            total_cores: None,
        }
    }
}

impl CoolingConfig {
    /// Device-name prefix, `thermal-cpucore` unless overridden.
    pub fn prefix(&self) -> &str {
        self.name_prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Controllable core count: the configured override, else every core
    /// the host exposes.
    pub fn core_count(&self) -> u64 {
        self.total_cores.unwrap_or_else(|| num_cpus::get() as u64)
    }
}

fn load_config_file(path: &Path) -> std::io::Result<CoolingConfig> {
    let data = fs::read_to_string(path)?;
    toml::from_str(&data).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Load a configuration file from `path`.
pub fn load_from(path: &Path) -> std::io::Result<CoolingConfig> {
    load_config_file(path)
}

/// Load the active configuration.
///
/// Reads the file named by `COHTHERM_CONFIG` when set, then applies the
/// `COHTHERM_PREFIX` and `COHTHERM_CORES` overrides on top. Anything
/// missing or malformed falls back to defaults.
pub fn load_active() -> CoolingConfig {
    let mut cfg = match std::env::var("COHTHERM_CONFIG") {
        Ok(path) => match load_config_file(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("using default cooling config: {e}");
                CoolingConfig::default()
            }
        },
        Err(_) => CoolingConfig::default(),
    };
    if let Ok(prefix) = std::env::var("COHTHERM_PREFIX") {
        cfg.name_prefix = Some(prefix);
    }
    if let Ok(cores) = std::env::var("COHTHERM_CORES") {
        match cores.parse::<u64>() {
            Ok(n) => cfg.total_cores = Some(n),
            Err(_) => warn!("ignoring malformed COHTHERM_CORES={cores}"),
        }
    }
    cfg
}
