//! Fuzz target: one-byte signal matrix.
//!
//! Every keyed byte is reported as a crash; every other byte returns.
#![no_main]

use libfuzzer_sys::fuzz_target;
use probe_targets::fault_signals;

fuzz_target!(|data: &[u8]| {
    if let Some(&byte) = data.first() {
        if let Err(fault) = fault_signals::evaluate(byte) {
            panic!("reached {fault}");
        }
    }
});
