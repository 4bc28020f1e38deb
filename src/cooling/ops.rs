// CLASSIFICATION: COMMUNITY
// Filename: ops.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-05-14

//! Operation set every cooling device exposes to the governor.

use thiserror::Error;

use crate::thermal::{TripType, ZoneView};

/// Failure raised by a cooling device operation.
#[derive(Debug, Error)]
#[error("cooling device fault: {0}")]
pub struct DeviceFault(pub String);

/// Governor-facing control surface of a cooling device.
///
/// Implementations are shared across threads by the framework, so every
/// operation takes `&self`.
pub trait CoolingOps: Send + Sync {
    /// Deepest throttle level the device supports.
    fn get_max_state(&self) -> Result<u64, DeviceFault>;

    /// Throttle level currently in effect.
    fn get_cur_state(&self) -> Result<u64, DeviceFault>;

    /// Request a throttle level. Reserved control bits ride in the word.
    fn set_cur_state(&self, state: u64) -> Result<(), DeviceFault>;

    /// Power currently drawn, for governors running a power model.
    fn get_requested_power(&self, zone: &dyn ZoneView) -> Result<u32, DeviceFault>;

    /// Power a hypothetical `state` would draw.
    fn state_to_power(&self, zone: &dyn ZoneView, state: u64) -> Result<u32, DeviceFault>;

    /// Throttle level that fits inside a `power` budget.
    fn power_to_state(&self, zone: &dyn ZoneView, power: u32) -> Result<u64, DeviceFault>;

    /// Trip-point transition on a zone this device is bound to.
    ///
    /// Devices without trip logic keep the default and ignore it.
    fn notify_state(
        &self,
        _zone: &dyn ZoneView,
        _trip: TripType,
        _enter_hot: bool,
    ) -> Result<(), DeviceFault> {
        Ok(())
    }
}
