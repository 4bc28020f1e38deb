// CLASSIFICATION: COMMUNITY
// Filename: thermal.rs v0.4
// Author: Lukas Bower
// Date Modified: 2026-05-03

//! Thermal framework contract types.
//!
//! The governor owns zones and trip points; this crate only registers
//! cooling devices against it. Zone state reaches a device through
//! [`ZoneView`], a view the framework scopes to the zone/device pair
//! being notified.

use std::sync::Arc;

use thiserror::Error;

use crate::cooling::CoolingOps;

/// Trip severities reported by the thermal framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripType {
    Active,
    Passive,
    Hot,
    Critical,
}

/// Per-trip binding between a zone and a cooling device.
#[derive(Clone, Copy, Debug, Default)]
pub struct TripInstance {
    /// Highest throttle level this binding may request. `None` leaves
    /// the device unconstrained.
    pub upper: Option<u64>,
}

/// View of one thermal zone, scoped to the device being notified.
pub trait ZoneView {
    /// Number of trip points the zone declares.
    fn trip_count(&self) -> usize;

    /// Binding for trip `index`, if the zone ties that trip to this device.
    fn instance(&self, index: usize) -> Option<TripInstance>;
}

/// Opaque handle the framework mints for a registered device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceToken(pub u64);

/// Rejection raised by the framework when a device cannot be created.
#[derive(Debug, Error)]
#[error("cooling device rejected: {0}")]
pub struct FrameworkError(pub String);

/// Framework surface consumed at registration time.
pub trait ThermalFramework {
    /// Create a governor-facing device named `name`, dispatching to `ops`.
    fn create_device(
        &self,
        name: &str,
        ops: Arc<dyn CoolingOps>,
    ) -> Result<DeviceToken, FrameworkError>;

    /// Tear down a previously created device.
    fn destroy_device(&self, token: DeviceToken);
}
