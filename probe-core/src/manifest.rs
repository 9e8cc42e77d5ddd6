//! Machine-readable description of a target program's input contract.
//!
//! An external tool needs two things from a target: the raw input format and
//! the faults it can observe. A [`TargetManifest`] records both.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::fault::FaultKind;
use crate::outcome::signal_name;

/// Input format and reachable faults of one target program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct TargetManifest {
    /// Binary name, e.g. `"sage1"`.
    pub name: String,
    /// One-line description of the reachability puzzle.
    pub description: String,
    /// Element type name.
    pub element: String,
    /// Width of one element in bytes.
    pub element_width: usize,
    /// Number of elements the program reads.
    pub count: usize,
    /// Exact input file length in bytes.
    pub input_len: usize,
    /// Faults the program can reach.
    pub faults: Vec<FaultTrigger>,
}

/// One reachable fault and the input condition that reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct FaultTrigger {
    /// Fault classification.
    pub kind: FaultKind,
    /// Name of the terminating signal.
    pub signal: String,
    /// Condition over the input that reaches the fault.
    pub condition: String,
}

impl TargetManifest {
    /// Describe a program reading `N` elements of type `T`.
    pub fn new<T: Element, const N: usize>(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            element: T::NAME.to_owned(),
            element_width: T::WIDTH,
            count: N,
            input_len: T::WIDTH * N,
            faults: Vec::new(),
        }
    }

    /// Add a reachable fault.
    #[must_use]
    pub fn with_fault(mut self, kind: FaultKind, condition: impl Into<String>) -> Self {
        self.faults.push(FaultTrigger {
            kind,
            signal: signal_name(kind.signal()).unwrap_or("unknown").to_owned(),
            condition: condition.into(),
        });
        self
    }
}
