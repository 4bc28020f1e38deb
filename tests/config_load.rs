// CLASSIFICATION: COMMUNITY
// Filename: config_load.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-06-02

use std::fs;

use serial_test::serial;
use tempfile::tempdir;

use cohtherm::config::{self, CoolingConfig};

fn clear_env() {
    std::env::remove_var("COHTHERM_CONFIG");
    std::env::remove_var("COHTHERM_PREFIX");
    std::env::remove_var("COHTHERM_CORES");
}

#[test]
#[serial]
fn file_settings_are_honored() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("cohtherm.toml");
    fs::write(&path, "name_prefix = \"tz-core\"\ntotal_cores = 12\n").unwrap();
    std::env::set_var("COHTHERM_CONFIG", &path);
    let cfg = config::load_active();
    assert_eq!(cfg.prefix(), "tz-core");
    assert_eq!(cfg.core_count(), 12);
    clear_env();
}

#[test]
#[serial]
fn env_overrides_layer_on_top_of_the_file() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("cohtherm.toml");
    fs::write(&path, "total_cores = 12\n").unwrap();
    std::env::set_var("COHTHERM_CONFIG", &path);
    std::env::set_var("COHTHERM_PREFIX", "island");
    std::env::set_var("COHTHERM_CORES", "6");
    let cfg = config::load_active();
    assert_eq!(cfg.prefix(), "island");
    assert_eq!(cfg.core_count(), 6);
    clear_env();
}

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    clear_env();
    std::env::set_var("COHTHERM_CONFIG", "/nonexistent/cohtherm.toml");
    let cfg = config::load_active();
    assert_eq!(cfg, CoolingConfig::default());
    clear_env();
}

#[test]
#[serial]
fn malformed_core_override_is_ignored() {
    clear_env();
    std::env::set_var("COHTHERM_CORES", "plenty");
    let cfg = config::load_active();
    assert!(cfg.total_cores.is_none());
    clear_env();
}

#[test]
#[serial]
fn load_from_rejects_bad_toml() {
    clear_env();
    let dir = tempdir().unwrap();
    let path = dir.path().join("cohtherm.toml");
    fs::write(&path, "total_cores = \"eight\"\n").unwrap();
    let err = config::load_from(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
