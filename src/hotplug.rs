// CLASSIFICATION: COMMUNITY
// Filename: hotplug.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-03-08

//! Core-count actuation contract.
//!
//! The cooling device decides how many cores may stay schedulable; the
//! board supplies the mechanism. On Cohesix workers this is backed by the
//! scheduler's cpu mask, elsewhere by sysfs hotplug.

use thiserror::Error;

/// Failure reported by a core-count backend.
#[derive(Debug, Error)]
#[error("core hotplug failed: {0}")]
pub struct HotplugError(pub String);

/// Backend keeping a requested number of CPU cores online.
pub trait CoreHotplug: Send + Sync {
    /// Keep exactly `active` cores schedulable.
    fn set_active_cores(&self, active: u64) -> Result<(), HotplugError>;
}
