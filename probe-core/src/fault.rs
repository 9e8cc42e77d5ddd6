//! Fault events and their native delivery.
//!
//! Targets decide *whether* a fault is reached as plain data, then hand the
//! [`FaultEvent`] to [`FaultEvent::deliver`], which terminates the process
//! through the same mechanism the OS would use: `abort` for abort and
//! assertion faults, a raised signal for memory and arithmetic faults.
//! Delivery is never caught or translated into a return value.

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::outcome::ExitOutcome;

/// Classification of a fault a target can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FaultKind {
    /// Write outside the bounds of a local array.
    OutOfBoundsWrite,
    /// Read outside the bounds of a local array whose value is used further.
    OutOfBoundsRead,
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// Explicit abnormal termination.
    Abort,
    /// Store through a null pointer.
    NullDereference,
    /// Store through a pointer that violates the type's alignment.
    MisalignedAccess,
    /// An invariant the author believes cannot fail did fail.
    AssertionViolation,
}

impl FaultKind {
    /// Every fault kind, in declaration order.
    pub const ALL: [FaultKind; 7] = [
        FaultKind::OutOfBoundsWrite,
        FaultKind::OutOfBoundsRead,
        FaultKind::DivisionByZero,
        FaultKind::Abort,
        FaultKind::NullDereference,
        FaultKind::MisalignedAccess,
        FaultKind::AssertionViolation,
    ];

    /// The signal that terminates the process when this fault is delivered.
    #[must_use]
    pub const fn signal(self) -> i32 {
        match self {
            FaultKind::OutOfBoundsWrite | FaultKind::OutOfBoundsRead | FaultKind::NullDereference => {
                libc::SIGSEGV
            }
            FaultKind::DivisionByZero => libc::SIGFPE,
            FaultKind::MisalignedAccess => libc::SIGBUS,
            FaultKind::Abort | FaultKind::AssertionViolation => libc::SIGABRT,
        }
    }

    /// The exit outcome an external observer sees for this fault.
    #[must_use]
    pub const fn expected_outcome(self) -> ExitOutcome {
        match self {
            FaultKind::Abort | FaultKind::AssertionViolation => ExitOutcome::Aborted,
            kind => ExitOutcome::Signaled { signal: kind.signal() },
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FaultKind::OutOfBoundsWrite => "out-of-bounds write",
            FaultKind::OutOfBoundsRead => "out-of-bounds read",
            FaultKind::DivisionByZero => "division by zero",
            FaultKind::Abort => "abort",
            FaultKind::NullDereference => "null dereference",
            FaultKind::MisalignedAccess => "misaligned access",
            FaultKind::AssertionViolation => "assertion violation",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reached fault together with the condition that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct FaultEvent {
    /// What kind of fault was reached.
    pub kind: FaultKind,
    /// The concrete condition that held, e.g. `buf[12] with length 10`.
    pub trigger: String,
}

impl FaultEvent {
    /// Create a new fault event.
    pub fn new(kind: FaultKind, trigger: impl Into<String>) -> Self {
        Self { kind, trigger: trigger.into() }
    }

    /// Terminate the process with this fault's native mechanism.
    ///
    /// Never returns. Pending stdout/stderr output is flushed first so the
    /// target's own diagnostics are not lost.
    pub fn deliver(self) -> ! {
        tracing::warn!(
            kind = %self.kind,
            trigger = %self.trigger,
            signal = self.kind.signal(),
            "delivering fault"
        );

        match self.kind {
            FaultKind::Abort => abort(),
            FaultKind::AssertionViolation => {
                eprintln!("assertion failed: {}", self.trigger);
                abort()
            }
            kind => raise(kind.signal()),
        }
    }
}

impl fmt::Display for FaultEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.trigger)
    }
}

/// Flush stdio and abort the process.
pub fn abort() -> ! {
    flush_stdio();
    std::process::abort()
}

/// Raise `signal` with its default disposition. Falls back to abort if the
/// signal does not terminate the process.
fn raise(signal: libc::c_int) -> ! {
    flush_stdio();
    // SAFETY: these calls only change this process's signal state. The Rust
    // runtime installs SIGSEGV/SIGBUS handlers for stack overflow detection
    // which would swallow a raised signal, and a mask inherited from the
    // parent could hold it pending, so both are reset first.
    unsafe {
        let mut set: libc::sigset_t = std::mem::zeroed();
        libc::sigemptyset(&mut set);
        libc::sigaddset(&mut set, signal);
        libc::pthread_sigmask(libc::SIG_UNBLOCK, &set, std::ptr::null_mut());
        libc::signal(signal, libc::SIG_DFL);
        libc::raise(signal);
    }
    std::process::abort()
}

fn flush_stdio() {
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
}
