//! # Flight Controller Simulator
//!
//! An embedded-style flight-controller simulation library built around a
//! simulated memory-mapped register bank and a temperature-driven thrust
//! control loop.
//!
//! ## Features
//!
//! - **Simulated hardware registers**: CTRL/STATUS/THRUST/SENS_TEMP register
//!   file with bit-field semantics and a latched fault bit
//! - **Safety-capped thrust control**: soft clamp at the configured cap,
//!   gross-range rejection above twice the cap
//! - **Closed status taxonomy**: one source-of-truth table generating both
//!   the status enumeration and a total message lookup
//! - **Profile-driven configuration**: ground/flight build profiles resolved
//!   into runtime constants, structural limits checked at compile time
//! - **Embedded-friendly**: no heap allocations in the core, bounded memory
//!
//! ## Quick Start
//!
//! ```rust
//! use flightctl::config::{BuildProfile, Config, CpuArch};
//! use flightctl::{FlightController, Status};
//!
//! let config = Config::for_profile(BuildProfile::Ground, CpuArch::RiscV);
//! let mut controller = FlightController::new(config);
//!
//! assert_eq!(controller.initialize(), Status::Ok);
//! assert_eq!(controller.run_once(), Status::Ok);
//!
//! controller.shutdown();
//! ```
//!
//! ## Architecture
//!
//! - [`registers`] - Simulated register bank (the hardware seam)
//! - [`controller`] - Read-decide-write-check control loop
//! - [`status`] - Status codes, messages, and the `safe_call!` convention
//! - [`config`] - Build-profile and architecture selection

#![deny(warnings)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod controller;
pub mod registers;
pub mod status;

// Re-export main public types for convenience
pub use config::Config;
pub use controller::FlightController;
pub use registers::RegisterBank;
pub use status::Status;
