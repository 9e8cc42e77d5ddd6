//! `buf-index`: one `i32` used as the index of a write into a 10-slot array.

use probe_core::{FaultEvent, FaultKind, InputBuffer, TargetManifest};

/// Slots in the local array.
pub const BUF_LEN: usize = 10;

/// Input shape: a single native-endian `i32`.
pub type Input = InputBuffer<i32, 1>;

/// Store `0` at `buf[index]` of a fresh local array.
///
/// Returns the slot written.
///
/// # Errors
/// Returns an [`FaultKind::OutOfBoundsWrite`] event for any `index` outside
/// `[0, 9]`.
pub fn evaluate(index: i32) -> Result<usize, FaultEvent> {
    write(&mut [0_i32; BUF_LEN], index)
}

fn write(buf: &mut [i32; BUF_LEN], index: i32) -> Result<usize, FaultEvent> {
    let slot = usize::try_from(index)
        .ok()
        .filter(|&i| i < buf.len())
        .ok_or_else(|| {
            FaultEvent::new(
                FaultKind::OutOfBoundsWrite,
                format!("buf[{index}] with length {BUF_LEN}"),
            )
        })?;

    buf[slot] = 0;
    Ok(slot)
}

/// Target entry point. Delivers the fault if the write is out of bounds.
///
/// Progress lines go to stdout so a tracer sees how far the program got.
pub fn top(index: i32) {
    let mut buf = [0_i32; BUF_LEN];

    println!("Buffer: &buf = {:p}", buf.as_ptr());
    println!("Setting: buf[{index}] = null");
    tracing::info!(index, len = BUF_LEN, "setting buf[index] = 0");

    if let Err(fault) = write(&mut buf, index) {
        fault.deliver();
    }

    println!("Returning...");
}

/// Harness adapter for [`top`].
pub fn program(input: Input) {
    top(input.into_scalar());
}

#[must_use]
pub fn manifest() -> TargetManifest {
    TargetManifest::new::<i32, 1>("buf-index", "i32 index into a 10-element local array for a write")
        .with_fault(FaultKind::OutOfBoundsWrite, "i < 0 || i > 9")
}
