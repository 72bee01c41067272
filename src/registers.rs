use bitflags::bitflags;
use heapless::Vec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const MAX_CLAMP_HISTORY: usize = 16;

bitflags! {
    /// Bit assignments for the CTRL register word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CtrlFlags: u32 {
        const ENABLE = 1 << 0;
        const FAULT = 1 << 1;
    }
}

/// One recorded soft clamp of an over-cap thrust request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClampRecord {
    pub requested_n: u32,
    pub applied_n: u32,
}

/// Serializable view of the register words for ground inspection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegisterSnapshot {
    pub ctrl: u32,
    pub status: u32,
    pub thrust_n: u32,
    pub sens_temp_c: i32,
}

/// Simulated memory-mapped register file.
///
/// Stands in for real hardware so the controller runs on any host; a real
/// binding would sit behind these same operations. Single logical thread of
/// control — concurrent access requires external synchronization.
#[derive(Debug)]
pub struct RegisterBank {
    ctrl: u32,
    status: u32,
    thrust: u32,
    sens_temp: i32,
    max_thrust_n: u32,
    clamp_history: Vec<ClampRecord, MAX_CLAMP_HISTORY>,
}

impl RegisterBank {
    #[must_use]
    pub fn new(max_thrust_n: u32) -> Self {
        Self {
            ctrl: 0,
            status: 0,
            thrust: 0,
            sens_temp: 0,
            max_thrust_n,
            clamp_history: Vec::new(),
        }
    }

    /// Set the ENABLE bit of CTRL. Infallible.
    pub fn enable(&mut self) {
        self.ctrl |= CtrlFlags::ENABLE.bits();
        debug!("system enabled");
    }

    /// Clear the ENABLE bit of CTRL. Leaves the fault bit alone.
    pub fn disable(&mut self) {
        self.ctrl &= !CtrlFlags::ENABLE.bits();
        debug!("system disabled");
    }

    /// Set the FAULT bit of CTRL. Latched: nothing in the lifecycle clears it.
    pub fn signal_fault(&mut self) {
        self.ctrl |= CtrlFlags::FAULT.bits();
        warn!("fault signaled");
    }

    #[must_use]
    pub fn fault_is_set(&self) -> bool {
        self.ctrl & CtrlFlags::FAULT.bits() != 0
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.ctrl & CtrlFlags::ENABLE.bits() != 0
    }

    /// Current SENS_TEMP value, verbatim. Raw sensor units and linearized
    /// Celsius are identical in this simulation.
    #[must_use]
    pub fn read_temperature(&self) -> i32 {
        self.sens_temp
    }

    pub fn seed_temperature(&mut self, temp_c: i32) {
        self.sens_temp = temp_c;
        debug!(temp_c, "temperature seeded");
    }

    pub fn bump_temperature(&mut self, delta_c: i32) {
        self.sens_temp = self.sens_temp.saturating_add(delta_c);
    }

    /// Write the THRUST register, clamping over-cap requests to the cap and
    /// recording the clamp. Infallible: gross-range validation is the
    /// caller's responsibility.
    pub fn set_thrust(&mut self, requested_n: u32) {
        let applied_n = if requested_n > self.max_thrust_n {
            warn!(
                requested_n,
                cap_n = self.max_thrust_n,
                "thrust request exceeds limit, capping"
            );
            if self.clamp_history.is_full() {
                self.clamp_history.remove(0);
            }
            let _ = self.clamp_history.push(ClampRecord {
                requested_n,
                applied_n: self.max_thrust_n,
            });
            self.max_thrust_n
        } else {
            requested_n
        };

        self.thrust = applied_n;
        debug!(thrust_n = applied_n, "thrust register written");

        debug_assert!(
            self.thrust <= self.max_thrust_n,
            "Thrust {} exceeds cap {} after clamped write",
            self.thrust,
            self.max_thrust_n
        );
    }

    #[must_use]
    pub fn thrust(&self) -> u32 {
        self.thrust
    }

    #[must_use]
    pub fn max_thrust_n(&self) -> u32 {
        self.max_thrust_n
    }

    #[must_use]
    pub fn clamp_history(&self) -> &[ClampRecord] {
        &self.clamp_history
    }

    #[must_use]
    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            ctrl: self.ctrl,
            status: self.status,
            thrust_n: self.thrust,
            sens_temp_c: self.sens_temp,
        }
    }
}
