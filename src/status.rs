use serde::{Deserialize, Serialize};

/// Expands one ordered (name, code, message) table into the status
/// enumeration and its lookups, keeping codes and messages in sync.
macro_rules! status_table {
    ($( $(#[$meta:meta])* $name:ident = $code:literal => $msg:literal, )+) => {
        /// Closed set of outcomes produced by every control-loop operation.
        ///
        /// Statuses are ordinary return values, not exceptions: the caller
        /// decides whether a non-[`Status::Ok`] result ends the session.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u32)]
        pub enum Status {
            $( $(#[$meta])* $name = $code, )+
        }

        impl Status {
            /// Every status in the taxonomy, in code order.
            pub const ALL: &'static [Status] = &[ $( Status::$name, )+ ];

            /// Numeric code reported on the wire and in `safe_call!` logs.
            #[must_use]
            pub const fn code(self) -> u32 {
                self as u32
            }

            /// Operator-facing message. Total over the enumeration.
            #[must_use]
            pub const fn message(self) -> &'static str {
                match self {
                    $( Status::$name => $msg, )+
                }
            }

            /// Maps a raw numeric code back into the taxonomy.
            #[must_use]
            pub const fn from_code(code: u32) -> Option<Status> {
                match code {
                    $( $code => Some(Status::$name), )+
                    _ => None,
                }
            }
        }
    };
}

status_table! {
    /// Operation succeeded; keep going.
    Ok = 0 => "No Error",
    /// Temperature read failed. Reserved for a real sensor binding; the
    /// simulated path never produces it.
    SensorFail = 10 => "Sensor Failure",
    /// Requested thrust grossly out of range, rejected before any write.
    ThrustRange = 20 => "Thrust Out of Range",
    /// Fault bit observed set after an otherwise-successful cycle.
    SystemFault = 30 => "System Fault",
}

impl Status {
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Message lookup over raw codes; unknown codes get a fixed placeholder.
#[must_use]
pub fn message_for_code(code: u32) -> &'static str {
    match Status::from_code(code) {
        Some(status) => status.message(),
        None => "Unknown",
    }
}

/// Fail-fast guard for startup-only calls: evaluates a status-returning
/// expression and, on any non-Ok result, logs the failing expression to
/// stderr and terminates the process with a non-zero exit status.
///
/// Steady-state loop errors are returned to the caller for a decision
/// instead of going through this macro.
#[macro_export]
macro_rules! safe_call {
    ($call:expr) => {{
        let status: $crate::Status = $call;
        if status != $crate::Status::Ok {
            eprintln!(
                "[{}:{}] {} failed with code {}",
                file!(),
                line!(),
                stringify!($call),
                status.code()
            );
            ::std::process::exit(1);
        }
    }};
}
