//! `sage1`: crash when at least three of four positional byte checks hold.
//!
//! The example program from the whitebox fuzzing literature: input `bad!`
//! and any input matching three of its four positions reach the crash.

use probe_core::{FaultEvent, FaultKind, InputBuffer, TargetManifest};

/// Bytes compared position by position.
pub const PATTERN: [u8; 4] = *b"bad!";

/// Matches needed to reach the crash.
pub const THRESHOLD: usize = 3;

/// Input shape: four raw bytes.
pub type Input = InputBuffer<u8, 4>;

/// Count positions where `input` equals [`PATTERN`].
#[must_use]
pub fn matches(input: &[u8; 4]) -> usize {
    input.iter().zip(PATTERN).filter(|&(&got, want)| got == want).count()
}

/// Returns the match count when it stays below [`THRESHOLD`].
///
/// # Errors
/// Returns a [`FaultKind::NullDereference`] event when `THRESHOLD` or more
/// positions match.
pub fn evaluate(input: &[u8; 4]) -> Result<usize, FaultEvent> {
    let cnt = matches(input);
    if cnt >= THRESHOLD {
        return Err(FaultEvent::new(
            FaultKind::NullDereference,
            format!("{cnt} of 4 positions match \"bad!\""),
        ));
    }
    Ok(cnt)
}

/// Target entry point.
pub fn top(input: &[u8; 4]) {
    if let Err(fault) = evaluate(input) {
        fault.deliver();
    }
}

/// Harness adapter for [`top`].
pub fn program(input: Input) {
    top(&input.into_inner());
}

#[must_use]
pub fn manifest() -> TargetManifest {
    TargetManifest::new::<u8, 4>("sage1", "crash when 3 of 4 bytes match b, a, d, !")
        .with_fault(FaultKind::NullDereference, "at least 3 of byte0 == 'b', byte1 == 'a', byte2 == 'd', byte3 == '!'")
}
