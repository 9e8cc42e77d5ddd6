//! Fuzz target: the `bad!` puzzle as an in-process subject.
//!
//! A crash here means the fuzzer matched three of the four positions.
#![no_main]

use libfuzzer_sys::fuzz_target;
use probe_targets::sage1;

fuzz_target!(|data: &[u8]| {
    let Some(input) = data.first_chunk::<4>() else {
        return;
    };
    if let Err(fault) = sage1::evaluate(input) {
        panic!("reached {fault}");
    }
});
