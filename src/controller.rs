use crate::config::Config;
use crate::registers::RegisterBank;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Seed value written to SENS_TEMP at initialization.
const INITIAL_TEMP_C: i32 = 42;

/// Policy table: engines run hot below this temperature.
const COLD_THRESHOLD_C: i32 = 30;
const COLD_THRUST_N: u32 = 3000;
const WARM_THRUST_N: u32 = 1500;

/// Requests beyond this multiple of the cap are rejected outright instead of
/// clamped.
const GROSS_RANGE_FACTOR: u32 = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ControllerStats {
    pub cycles_run: u32,
    pub thrust_commands: u32,
    pub last_commanded_n: u32,
}

/// Temperature-driven thrust controller over the simulated register bank.
///
/// Operations return a [`Status`]; any non-Ok result is terminal for the
/// calling session (no retry, no backoff).
#[derive(Debug)]
pub struct FlightController {
    regs: RegisterBank,
    config: Config,
    stats: ControllerStats,
}

impl FlightController {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            regs: RegisterBank::new(config.max_thrust_n),
            config,
            stats: ControllerStats::default(),
        }
    }

    /// Enables the system and seeds the temperature sensor. Always `Ok` in
    /// simulation; a real hardware bring-up would surface failures here.
    pub fn initialize(&mut self) -> Status {
        self.regs.enable();
        self.regs.seed_temperature(INITIAL_TEMP_C);
        debug!(temp_c = INITIAL_TEMP_C, "controller initialized");
        Status::Ok
    }

    /// Clears the ENABLE bit. The fault bit, if set, stays latched.
    pub fn shutdown(&mut self) {
        self.regs.disable();
    }

    /// Reads the temperature sensor. The `SensorFail` arm is the seam for a
    /// real sensor binding; the simulated read cannot fail.
    pub fn poll_temperature(&mut self) -> (Status, i32) {
        let temp_c = self.regs.read_temperature();
        debug!(temp_c, "temperature polled");
        (Status::Ok, temp_c)
    }

    /// Gross-sanity gate ahead of the register-level soft clamp: requests
    /// over twice the cap never reach the register file.
    pub fn command_thrust(&mut self, desired_n: u32) -> Status {
        if desired_n > self.config.max_thrust_n * GROSS_RANGE_FACTOR {
            return Status::ThrustRange;
        }

        self.regs.set_thrust(desired_n);
        self.stats.thrust_commands = self.stats.thrust_commands.saturating_add(1);
        self.stats.last_commanded_n = desired_n;
        Status::Ok
    }

    /// One read-decide-write-check cycle.
    ///
    /// The fault check runs after the thrust write on purpose: a fault that
    /// was already latent before the call still gets one more thrust command
    /// out before it is reported.
    pub fn run_once(&mut self) -> Status {
        self.stats.cycles_run = self.stats.cycles_run.saturating_add(1);

        let (status, temp_c) = self.poll_temperature();
        if status != Status::Ok {
            return status;
        }

        let desired_n = thrust_for_temperature(temp_c);
        debug!(temp_c, desired_n, "policy applied");

        let status = self.command_thrust(desired_n);
        if status != Status::Ok {
            return status;
        }

        if self.regs.fault_is_set() {
            return Status::SystemFault;
        }

        Status::Ok
    }

    /// Latches the fault bit in CTRL.
    pub fn signal_fault(&mut self) {
        self.regs.signal_fault();
    }

    #[must_use]
    pub fn registers(&self) -> &RegisterBank {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut RegisterBank {
        &mut self.regs
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> ControllerStats {
        self.stats
    }
}

fn thrust_for_temperature(temp_c: i32) -> u32 {
    if temp_c < COLD_THRESHOLD_C {
        COLD_THRUST_N
    } else {
        WARM_THRUST_N
    }
}
