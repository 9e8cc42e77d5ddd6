//! Harness contract for single-input fault-injection test subjects.
//!
//! A target program reads a fixed-size binary input file into a typed
//! buffer, checks that the file supplied exactly the expected number of
//! elements, and calls one target function that may reach a fault. External
//! fuzzers and concolic engines observe only the process exit: normal
//! status, usage status, abort, or a fault signal.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod buffer;
pub mod config;
pub mod element;
pub mod error;
pub mod fault;
pub mod harness;
pub mod loader;
pub mod manifest;
pub mod outcome;

pub use buffer::InputBuffer;
pub use config::HarnessConfig;
pub use element::Element;
pub use error::{HarnessError, LoadError, UsageError};
pub use fault::{FaultEvent, FaultKind};
pub use harness::{run, Target};
pub use loader::{load, read_from};
pub use manifest::{FaultTrigger, TargetManifest};
pub use outcome::{signal_name, ExitOutcome};

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn loaded_buffer_feeds_target_unchanged() {
        let body = element::encode_all(&[1_u32, 2, 3, 4]);
        let buffer = match read_from::<u32, 4, _>(Cursor::new(body)) {
            Ok(b) => b,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let mut seen = Vec::new();
        Target::invoke(|input: InputBuffer<u32, 4>| seen.extend_from_slice(input.as_slice()), buffer);
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn short_read_message_names_required_and_actual() {
        let err = LoadError::ShortRead { element: "u8", required: 4, actual: 1 };
        assert_eq!(err.to_string(), "Required 4 of u8, only read 1.");
    }

    #[test]
    fn usage_message_is_one_line() {
        let err = UsageError { program: "exe1".to_owned() };
        let msg = err.to_string();
        assert_eq!(msg, "usage: exe1 input");
        assert!(!msg.contains('\n'));
    }
}
