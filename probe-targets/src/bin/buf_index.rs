//! Out-of-bounds write on an `i32` index.

use std::process::ExitCode;

use probe_targets::buf_index;

fn main() -> ExitCode {
    probe_core::harness::run::<i32, 1, _>(buf_index::program)
}
