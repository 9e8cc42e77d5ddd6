//! `fault-signals`: one input byte selects one of four native faults.
//!
//! | byte  | fault              | signal  |
//! |-------|--------------------|---------|
//! | `'a'` | abort              | SIGABRT |
//! | `'b'` | misaligned store   | SIGBUS  |
//! | `'d'` | division by zero   | SIGFPE  |
//! | `'s'` | store through null | SIGSEGV |
//!
//! Any other byte returns normally. The misaligned store only traps where
//! alignment checking is enforced, so it is delivered as SIGBUS directly.

use std::mem::size_of;

use probe_core::{FaultEvent, FaultKind, InputBuffer, TargetManifest};

/// Input shape: a single byte.
pub type Input = InputBuffer<u8, 1>;

/// Select the fault for `input`, if any.
///
/// Each keyed byte reaches its fault unconditionally; the only branch is the
/// byte comparison itself.
///
/// # Errors
/// Returns the fault event keyed by `'a'`, `'b'`, `'d'`, or `'s'`.
pub fn evaluate(input: u8) -> Result<(), FaultEvent> {
    let fault = match input {
        b'a' => FaultEvent::new(FaultKind::Abort, "input == 'a'"),
        b'b' => FaultEvent::new(
            FaultKind::MisalignedAccess,
            format!(
                "input == 'b': {}-byte store one byte past an i32",
                size_of::<i16>()
            ),
        ),
        b'd' => FaultEvent::new(FaultKind::DivisionByZero, "input == 'd': input / 0"),
        b's' => FaultEvent::new(FaultKind::NullDereference, "input == 's': *(int *)0 = 1"),
        _ => return Ok(()),
    };
    Err(fault)
}

/// Target entry point.
pub fn faults(input: u8) {
    if let Err(fault) = evaluate(input) {
        fault.deliver();
    }
}

/// Harness adapter for [`faults`].
pub fn program(input: Input) {
    faults(input.into_scalar());
}

#[must_use]
pub fn manifest() -> TargetManifest {
    TargetManifest::new::<u8, 1>("fault-signals", "one byte keys four mutually exclusive native faults")
        .with_fault(FaultKind::Abort, "byte == 'a'")
        .with_fault(FaultKind::MisalignedAccess, "byte == 'b'")
        .with_fault(FaultKind::DivisionByZero, "byte == 'd'")
        .with_fault(FaultKind::NullDereference, "byte == 's'")
}
