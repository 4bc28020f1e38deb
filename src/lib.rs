// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.5
// Author: Lukas Bower
// Date Modified: 2026-06-21

//! Thermal cooling subsystem for Cohesix worker boards.
//!
//! Registers cpucore cooling devices with a thermal framework and drives
//! the number of schedulable CPU cores down as trip points assert. The
//! framework side and the core hotplug backend are reached through traits
//! so boards can supply their own.

/// Subsystem configuration loading.
pub mod config;

/// Cooling devices and the governor-facing operation set.
pub mod cooling;

/// Core-count actuation contract.
pub mod hotplug;

/// Device id allocation.
pub mod idspace;

/// Thermal framework contract types.
pub mod thermal;
