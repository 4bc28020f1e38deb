// CLASSIFICATION: COMMUNITY
// Filename: cpucore.rs v0.8
// Author: Lukas Bower
// Date Modified: 2026-07-04

//! Cpucore cooling device.
//!
//! Throttles heat by taking CPU cores offline: level `n` means `n` cores
//! are parked, so a device over `max` cores actuates `max - n` active
//! cores. Trip notifications ratchet the level up one step at a time and
//! drop it to zero when the zone cools. A reserved stop bit in the state
//! word freezes the device permanently once a zone decides the board
//! must not come back up.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use bitflags::bitflags;
use log::{debug, info};
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::config::CoolingConfig;
use crate::cooling::ops::{CoolingOps, DeviceFault};
use crate::hotplug::CoreHotplug;
use crate::idspace::{IdAllocator, IdSpaceError};
use crate::thermal::{DeviceToken, FrameworkError, ThermalFramework, TripType, ZoneView};

bitflags! {
    /// Reserved control bits carried in a requested state word.
    pub struct StateBits: u64 {
        /// Latch the device; later state changes are ignored.
        const STOP = 0x8000_0000;
    }
}

/// One registered cpucore cooling device.
pub struct CpucoreDevice {
    /// Id from the subsystem allocator, unique while the device lives.
    id: u32,
    /// Framework-facing name, `<prefix>-<id>`.
    name: String,
    /// Cores this device controls. Levels run `0..max_cores`.
    max_cores: u64,
    /// Cores currently parked.
    cur_state: AtomicU64,
    /// Once set, `set_cur_state` stops servicing requests.
    stopped: AtomicBool,
    /// Framework token, linked at registration.
    binding: OnceCell<DeviceToken>,
    ids: Arc<IdAllocator>,
    hotplug: Arc<dyn CoreHotplug>,
}

impl CpucoreDevice {
    /// Unique id of this device.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Framework-facing device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl CoolingOps for CpucoreDevice {
    fn get_max_state(&self) -> Result<u64, DeviceFault> {
        debug!("max cpu core={}", self.max_cores);
        Ok(self.max_cores)
    }

    fn get_cur_state(&self) -> Result<u64, DeviceFault> {
        let state = self.cur_state.load(Ordering::Relaxed);
        debug!("current state={state}");
        Ok(state)
    }

    fn set_cur_state(&self, state: u64) -> Result<(), DeviceFault> {
        let mut level = state;
        let latched = self.ids.with_lock(|| {
            if self.stopped.load(Ordering::Relaxed) {
                return true;
            }
            if StateBits::from_bits_retain(level).contains(StateBits::STOP) {
                self.stopped.store(true, Ordering::Relaxed);
                level &= !StateBits::STOP.bits();
            }
            false
        });
        if latched {
            return Ok(());
        }
        // Commit and actuation run outside the subsystem lock; a
        // concurrent read-modify-write through `notify_state` may
        // interleave here.
        if level < self.max_cores {
            self.cur_state.store(level, Ordering::Relaxed);
            let active = self.max_cores - level;
            debug!("set max cpu num={active}, state={level}");
            let _ = self.hotplug.set_active_cores(active);
        }
        Ok(())
    }

    fn get_requested_power(&self, _zone: &dyn ZoneView) -> Result<u32, DeviceFault> {
        Ok(0)
    }

    fn state_to_power(&self, _zone: &dyn ZoneView, _state: u64) -> Result<u32, DeviceFault> {
        Ok(0)
    }

    fn power_to_state(&self, _zone: &dyn ZoneView, _power: u32) -> Result<u64, DeviceFault> {
        self.get_cur_state()
    }

    fn notify_state(
        &self,
        zone: &dyn ZoneView,
        trip: TripType,
        enter_hot: bool,
    ) -> Result<(), DeviceFault> {
        match trip {
            TripType::Hot => {
                let cur_state = if enter_hot {
                    let upper = (0..zone.trip_count())
                        .filter_map(|i| zone.instance(i))
                        .filter_map(|ins| ins.upper)
                        .max();
                    let mut next = self.get_cur_state()? + 1;
                    if let Some(upper) = upper {
                        if next > upper {
                            next = upper;
                        }
                    }
                    next
                } else {
                    0
                };
                self.set_cur_state(cur_state)?;
                info!("{}: cur_state:{}", self.name, cur_state);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Owner handle for a registered device.
pub struct CoolingHandle {
    device: Arc<CpucoreDevice>,
}

impl CoolingHandle {
    /// The underlying device record.
    pub fn device(&self) -> &Arc<CpucoreDevice> {
        &self.device
    }

    /// Framework token linked at registration.
    pub fn token(&self) -> Option<DeviceToken> {
        self.device.binding.get().copied()
    }
}

/// Errors returned by [`CpucoreCooling::register`].
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("no free device id")]
    Ids(#[from] IdSpaceError),
    #[error("framework rejected {name}")]
    Framework {
        name: String,
        #[source]
        cause: FrameworkError,
    },
}

/// Cooling subsystem owning the id space and the actuation backend.
pub struct CpucoreCooling {
    ids: Arc<IdAllocator>,
    hotplug: Arc<dyn CoreHotplug>,
    config: CoolingConfig,
}

impl CpucoreCooling {
    /// Build a subsystem around `hotplug` with `config` tunables.
    pub fn new(hotplug: Arc<dyn CoreHotplug>, config: CoolingConfig) -> Self {
        Self {
            ids: Arc::new(IdAllocator::new()),
            hotplug,
            config,
        }
    }

    /// Register one cpucore cooling device with the framework.
    ///
    /// Multiple instances are supported; each gets a fresh id and the
    /// name `<prefix>-<id>`. On framework rejection the id is released
    /// again before the error is returned.
    pub fn register(
        &self,
        framework: &dyn ThermalFramework,
    ) -> Result<CoolingHandle, RegisterError> {
        let id = self.ids.allocate()?;
        let device = Arc::new(CpucoreDevice {
            id,
            name: format!("{}-{id}", self.config.prefix()),
            max_cores: self.config.core_count(),
            cur_state: AtomicU64::new(0),
            stopped: AtomicBool::new(false),
            binding: OnceCell::new(),
            ids: Arc::clone(&self.ids),
            hotplug: Arc::clone(&self.hotplug),
        });
        let ops = Arc::clone(&device) as Arc<dyn CoolingOps>;
        let token = match framework.create_device(device.name(), ops) {
            Ok(token) => token,
            Err(cause) => {
                self.ids.release(id);
                return Err(RegisterError::Framework {
                    name: device.name().into(),
                    cause,
                });
            }
        };
        let _ = device.binding.set(token);
        info!(
            "Cooling device {} registered ({} cores)",
            device.name, device.max_cores
        );
        Ok(CoolingHandle { device })
    }

    /// Tear down a registered device. `None` is accepted and ignored.
    ///
    /// The framework binding goes first, then the id, then the record,
    /// so an id is never reclaimed while the framework could still
    /// dispatch to it.
    pub fn unregister(&self, framework: &dyn ThermalFramework, handle: Option<CoolingHandle>) {
        let handle = match handle {
            Some(handle) => handle,
            None => return,
        };
        let device = handle.device;
        if let Some(token) = device.binding.get() {
            framework.destroy_device(*token);
        }
        // release into the allocator the id was minted from, not ours
        device.ids.release(device.id);
        info!("Cooling device {} unregistered", device.name);
    }
}
