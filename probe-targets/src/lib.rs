//! Reference target programs for the probe harness.
//!
//! Each module is one reachability puzzle: a pure `evaluate` that decides
//! whether the input reaches a fault, an entry point that delivers it, and a
//! `program` adapter the binary passes to [`probe_core::harness::run`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod buf_index;
pub mod exe1;
pub mod fault_signals;
pub mod registry;
pub mod sage1;
