//! Print the input contract and fault vocabulary of every target as JSON.

use std::process::ExitCode;

use probe_core::HarnessConfig;
use probe_targets::registry::manifests;

fn main() -> ExitCode {
    HarnessConfig::from_env().init_tracing();

    match serde_json::to_string_pretty(&manifests()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize manifests");
            ExitCode::FAILURE
        }
    }
}
