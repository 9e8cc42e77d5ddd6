//! Byte mutation, out-of-bounds read, division, and assertions over `atoi(input)`.

use std::process::ExitCode;

use probe_targets::exe1;

fn main() -> ExitCode {
    probe_core::harness::run::<u8, 4, _>(exe1::program)
}
