//! The process-level exit vocabulary observed by external tools.

use std::fmt;
use std::process::ExitStatus;

use serde::{Deserialize, Serialize};

/// Exit status of a program that returned normally.
pub const SUCCESS_EXIT_CODE: u8 = 0;

/// Exit status of a program invoked with the wrong argument count.
pub const USAGE_EXIT_CODE: u8 = 1;

/// Signals an external tool reports by name.
const SIGNALS: [(i32, &str); 9] = [
    (libc::SIGHUP, "SIGHUP"),
    (libc::SIGINT, "SIGINT"),
    (libc::SIGILL, "SIGILL"),
    (libc::SIGABRT, "SIGABRT"),
    (libc::SIGBUS, "SIGBUS"),
    (libc::SIGFPE, "SIGFPE"),
    (libc::SIGSEGV, "SIGSEGV"),
    (libc::SIGTERM, "SIGTERM"),
    (libc::SIGXCPU, "SIGXCPU"),
];

/// Name of a signal number, if it is one the vocabulary knows.
#[must_use]
pub fn signal_name(signal: i32) -> Option<&'static str> {
    SIGNALS
        .iter()
        .find(|(number, _)| *number == signal)
        .map(|(_, name)| *name)
}

/// What an external observer can learn from a finished target process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ExitOutcome {
    /// Status 0: the target returned without reaching a fault.
    Success,
    /// Status 1: wrong argument count, nothing was loaded.
    UsageError,
    /// Terminated by the abort mechanism (load failure or an abort branch).
    Aborted,
    /// Terminated by any other signal.
    Signaled { signal: i32 },
    /// Exited with a status outside the vocabulary.
    Exited { code: i32 },
}

impl ExitOutcome {
    /// Classify a child process's exit status.
    #[must_use]
    pub fn from_status(status: &ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return if signal == libc::SIGABRT {
                ExitOutcome::Aborted
            } else {
                ExitOutcome::Signaled { signal }
            };
        }

        match status.code() {
            Some(code) if code == i32::from(SUCCESS_EXIT_CODE) => ExitOutcome::Success,
            Some(code) if code == i32::from(USAGE_EXIT_CODE) => ExitOutcome::UsageError,
            Some(code) => ExitOutcome::Exited { code },
            None => ExitOutcome::Exited { code: -1 },
        }
    }

    /// Whether the outcome means a fault was reached.
    ///
    /// Aborts and signals are distinct outcomes but both count as faults.
    #[must_use]
    pub const fn is_fault(self) -> bool {
        matches!(self, ExitOutcome::Aborted | ExitOutcome::Signaled { .. })
    }

    /// The terminating signal, if any.
    #[must_use]
    pub const fn signal(self) -> Option<i32> {
        match self {
            ExitOutcome::Aborted => Some(libc::SIGABRT),
            ExitOutcome::Signaled { signal } => Some(signal),
            _ => None,
        }
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Success => f.write_str("success"),
            ExitOutcome::UsageError => f.write_str("usage error"),
            ExitOutcome::Aborted => f.write_str("aborted (SIGABRT)"),
            ExitOutcome::Signaled { signal } => match signal_name(*signal) {
                Some(name) => write!(f, "terminated by {name}"),
                None => write!(f, "terminated by signal {signal}"),
            },
            ExitOutcome::Exited { code } => write!(f, "exited with status {code}"),
        }
    }
}
