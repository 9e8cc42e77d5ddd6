//! Fuzz target: `exe1` decoding and partition.
//!
//! Decoding never panics. Reaching the assertion branch means the fuzzer
//! defeated the partition, which is reported as a crash.
#![no_main]

use libfuzzer_sys::fuzz_target;
use probe_core::FaultKind;
use probe_targets::exe1;

fuzz_target!(|data: &[u8]| {
    let Some(bytes) = data.get(..4) else {
        return;
    };
    if let Err(fault) = exe1::evaluate(exe1::decode(bytes)) {
        assert_ne!(fault.kind, FaultKind::AssertionViolation, "{fault}");
    }
});
