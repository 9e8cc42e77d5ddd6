//! All target programs built by this crate.

use probe_core::TargetManifest;

use crate::{buf_index, exe1, fault_signals, sage1};

/// Manifests for every target binary, in binary-name order.
#[must_use]
pub fn manifests() -> Vec<TargetManifest> {
    vec![
        buf_index::manifest(),
        exe1::manifest(),
        fault_signals::manifest(),
        sage1::manifest(),
    ]
}
