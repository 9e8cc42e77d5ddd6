//! Crash when three of four bytes match `bad!`.

use std::process::ExitCode;

use probe_targets::sage1;

fn main() -> ExitCode {
    probe_core::harness::run::<u8, 4, _>(sage1::program)
}
