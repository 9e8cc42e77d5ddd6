//! One byte selects abort, SIGBUS, SIGFPE, or SIGSEGV.

use std::process::ExitCode;

use probe_targets::fault_signals;

fn main() -> ExitCode {
    probe_core::harness::run::<u8, 1, _>(fault_signals::program)
}
