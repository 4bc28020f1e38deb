// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-05-14

//! Cooling devices and the governor-facing operation set.

pub mod cpucore;

pub mod ops;

pub use cpucore::{CoolingHandle, CpucoreCooling, CpucoreDevice, RegisterError, StateBits};

pub use ops::{CoolingOps, DeviceFault};
