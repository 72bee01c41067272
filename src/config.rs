use serde::{Deserialize, Serialize};
use static_assertions::const_assert;
use std::str::FromStr;
use thiserror::Error;

/// Structural limit of the current spacecraft configuration. No profile may
/// cap thrust above this.
pub const STRUCTURAL_LIMIT_N: u32 = 6000;

/// Thrust cap under the ground (debug) profile.
pub const GROUND_MAX_THRUST_N: u32 = 4000;
/// Thrust cap under the flight (optimized) profile.
pub const FLIGHT_MAX_THRUST_N: u32 = 5000;

const_assert!(GROUND_MAX_THRUST_N <= STRUCTURAL_LIMIT_N);
const_assert!(FLIGHT_MAX_THRUST_N <= STRUCTURAL_LIMIT_N);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown build profile '{0}' (expected 'ground' or 'flight')")]
    UnknownProfile(String),
    #[error("unknown cpu architecture '{0}' (expected 'arm' or 'riscv')")]
    UnknownArch(String),
}

/// Build profile selected at program start; exactly one is in force per
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildProfile {
    /// Debug-friendly: lower thrust cap, logs and self-checks enabled.
    Ground,
    /// Optimized: full thrust cap, diagnostics stripped.
    Flight,
}

impl FromStr for BuildProfile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ground" => Ok(BuildProfile::Ground),
            "flight" => Ok(BuildProfile::Flight),
            _ => Err(ConfigError::UnknownProfile(s.to_owned())),
        }
    }
}

/// Target architecture tag. The simulated sensor path is identical on both;
/// the tag is carried so a hardware binding can dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuArch {
    Arm,
    RiscV,
}

impl FromStr for CpuArch {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arm" => Ok(CpuArch::Arm),
            "riscv" => Ok(CpuArch::RiscV),
            _ => Err(ConfigError::UnknownArch(s.to_owned())),
        }
    }
}

/// Resolved configuration consumed by the core. Constructed once at program
/// start (or injected in tests); nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Config {
    pub profile: BuildProfile,
    pub arch: CpuArch,
    pub max_thrust_n: u32,
    pub logs_enabled: bool,
    pub asserts_enabled: bool,
}

impl Config {
    #[must_use]
    pub fn for_profile(profile: BuildProfile, arch: CpuArch) -> Self {
        let (max_thrust_n, diagnostics) = match profile {
            BuildProfile::Ground => (GROUND_MAX_THRUST_N, true),
            BuildProfile::Flight => (FLIGHT_MAX_THRUST_N, false),
        };

        Self {
            profile,
            arch,
            max_thrust_n,
            logs_enabled: diagnostics,
            asserts_enabled: diagnostics,
        }
    }
}
