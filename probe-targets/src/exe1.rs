//! `exe1`: a four-way partition over a small decoded integer.
//!
//! The input is four ASCII bytes decoded like C `atoi`. For `i` in `[0, 3]`
//! one byte of `a[i]` (the first one in memory) is decremented, the mutated
//! byte is used as an index into `a`, the value read divides by `a[i]`, and
//! the quotient selects one of two assertions:
//!
//! | `i` | mutated byte | read       | divisor | outcome            |
//! |-----|--------------|------------|---------|--------------------|
//! | 0   | 0            | `a[0] = 0` | 0       | division by zero   |
//! | 1   | 2            | `a[2] = 5` | 2       | `t == 2`, `i == 1` |
//! | 2   | 4            | `a[4]`     |         | out-of-bounds read |
//! | 3   | 1            | `a[1] = 3` | 1       | `t == 3`, `i == 3` |
//!
//! Both assertions hold for every `i` that survives the read and the
//! division. They stay in place so a tool can try to defeat that claim.
//! The table assumes little-endian layout; on big-endian targets the first
//! byte of each element is its high byte and every `i` faults on the read.

use std::mem::size_of;

use probe_core::{Element, FaultEvent, FaultKind, InputBuffer, TargetManifest};

/// Initial contents of the local array.
pub const ARRAY: [u32; 4] = [1, 3, 5, 2];

/// Input shape: four raw bytes holding an ASCII integer.
pub type Input = InputBuffer<u8, 4>;

/// Which normal-return path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// `i >= 4`: the program exits before touching the array.
    OutOfDomain { i: u32 },
    /// All checks passed with quotient `t`.
    Returned { i: u32, t: u32 },
}

/// Decode up to `bytes.len()` ASCII bytes the way C `atoi` does.
///
/// Skips leading whitespace, accepts one sign, then consumes decimal digits
/// until the first non-digit or the end of the input.
#[must_use]
pub fn atoi(bytes: &[u8]) -> i32 {
    let mut rest = bytes
        .iter()
        .skip_while(|&&b| matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'))
        .peekable();

    let negative = match rest.peek().map(|b| **b) {
        Some(b'-') => {
            rest.next();
            true
        }
        Some(b'+') => {
            rest.next();
            false
        }
        _ => false,
    };

    let magnitude = rest
        .map_while(|&b| b.is_ascii_digit().then(|| i32::from(b - b'0')))
        .fold(0_i32, |acc, digit| acc.wrapping_mul(10).wrapping_add(digit));

    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// The integer the target receives: `atoi` reinterpreted as unsigned.
#[must_use]
pub fn decode(bytes: &[u8]) -> u32 {
    u32::from_ne_bytes(atoi(bytes).to_ne_bytes())
}

/// Run the partition for `i`.
///
/// # Errors
/// Returns [`FaultKind::OutOfBoundsRead`] when the mutated byte indexes
/// outside `a`, [`FaultKind::DivisionByZero`] when `a[i]` became zero, and
/// [`FaultKind::AssertionViolation`] if either assertion fails.
pub fn evaluate(i: u32) -> Result<Verdict, FaultEvent> {
    const WIDTH: usize = size_of::<u32>();

    let Some(slot) = usize::try_from(i).ok().filter(|&s| s < ARRAY.len()) else {
        return Ok(Verdict::OutOfDomain { i });
    };

    let mut raw = [0_u8; ARRAY.len() * WIDTH];
    for (chunk, value) in raw.chunks_exact_mut(WIDTH).zip(ARRAY) {
        chunk.copy_from_slice(&value.to_ne_bytes());
    }

    // Decrement the first byte of a[i] as a signed char.
    let offset = slot * WIDTH;
    let p = i8::decode(&raw[offset..=offset]).wrapping_sub(1);
    raw[offset] = p.to_ne_bytes()[0];

    let a: Vec<u32> = raw.chunks_exact(WIDTH).map(u32::decode).collect();

    let read = usize::try_from(p)
        .ok()
        .and_then(|k| a.get(k).copied())
        .ok_or_else(|| {
            FaultEvent::new(
                FaultKind::OutOfBoundsRead,
                format!("a[{p}] with length {} (i = {i})", a.len()),
            )
        })?;

    let t = read.checked_div(a[slot]).ok_or_else(|| {
        FaultEvent::new(FaultKind::DivisionByZero, format!("{read} / a[{i}] with a[{i}] = 0"))
    })?;

    if t == 2 {
        check(i == 1, "i == 1", i, t)?;
    } else {
        check(i == 3, "i == 3", i, t)?;
    }

    Ok(Verdict::Returned { i, t })
}

fn check(holds: bool, expr: &str, i: u32, t: u32) -> Result<(), FaultEvent> {
    if holds {
        Ok(())
    } else {
        Err(FaultEvent::new(
            FaultKind::AssertionViolation,
            format!("{expr} (i = {i}, t = {t})"),
        ))
    }
}

/// Target entry point.
pub fn top(i: u32) {
    match evaluate(i) {
        Ok(verdict) => tracing::info!(?verdict, "returning"),
        Err(fault) => fault.deliver(),
    }
}

/// Harness adapter: decode the four bytes, then call [`top`].
pub fn program(input: Input) {
    top(decode(input.as_slice()));
}

#[must_use]
pub fn manifest() -> TargetManifest {
    TargetManifest::new::<u8, 4>(
        "exe1",
        "atoi-decoded i in [0, 3] drives a byte mutation, an index, a division, and two assertions",
    )
    .with_fault(FaultKind::OutOfBoundsRead, "i == 2")
    .with_fault(FaultKind::DivisionByZero, "i == 0")
    .with_fault(FaultKind::AssertionViolation, "believed unreachable")
}
