//! Fuzz target: input loader over arbitrary byte sources.
//!
//! Loading must never panic, must succeed exactly when the source holds
//! enough whole elements, and must report the whole-element count otherwise.

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use probe_core::{read_from, LoadError};

fuzz_target!(|data: &[u8]| {
    match read_from::<u32, 4, _>(Cursor::new(data)) {
        Ok(buffer) => {
            assert!(data.len() >= 16, "loaded from only {} bytes", data.len());
            assert_eq!(buffer.len(), 4);
        }
        Err(LoadError::ShortRead { required, actual, .. }) => {
            assert_eq!(required, 4);
            assert_eq!(actual, data.len() / 4);
        }
        Err(e) => panic!("unexpected error from in-memory source: {e}"),
    }
});
