//! Integration test: every target binary terminates the way an external
//! tool expects.
//!
//! Each case writes a fixture file, runs the built binary on it, and
//! classifies the exit status with [`ExitOutcome`].

use std::io::Write;
use std::process::{Command, Output};

use probe_core::{ExitOutcome, FaultKind};
use tempfile::NamedTempFile;

const BUF_INDEX: &str = env!("CARGO_BIN_EXE_buf-index");
const EXE1: &str = env!("CARGO_BIN_EXE_exe1");
const FAULT_SIGNALS: &str = env!("CARGO_BIN_EXE_fault-signals");
const SAGE1: &str = env!("CARGO_BIN_EXE_sage1");
const PROBE_MANIFEST: &str = env!("CARGO_BIN_EXE_probe-manifest");

fn fixture(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create fixture");
    file.write_all(bytes).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

fn run(binary: &str, args: &[&std::ffi::OsStr]) -> Output {
    Command::new(binary)
        .args(args)
        .env("PROBE_LOG", "off")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {binary}: {e}"))
}

fn outcome_for(binary: &str, bytes: &[u8]) -> ExitOutcome {
    let file = fixture(bytes);
    let output = run(binary, &[file.path().as_os_str()]);
    ExitOutcome::from_status(&output.status)
}

// ── buf-index ────────────────────────────────────────────────────────────────

#[test]
fn buf_index_valid_indices_exit_zero() {
    for i in [0_i32, 5, 9] {
        assert_eq!(outcome_for(BUF_INDEX, &i.to_ne_bytes()), ExitOutcome::Success, "i = {i}");
    }
}

#[test]
fn buf_index_out_of_range_segfaults() {
    let expected = FaultKind::OutOfBoundsWrite.expected_outcome();
    for i in [-1_i32, 10, 1000] {
        assert_eq!(outcome_for(BUF_INDEX, &i.to_ne_bytes()), expected, "i = {i}");
    }
}

#[test]
fn buf_index_prints_progress_on_stdout() {
    let file = fixture(&5_i32.to_ne_bytes());
    let output = run(BUF_INDEX, &[file.path().as_os_str()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Buffer: &buf = 0x"), "stdout: {stdout}");
    assert!(stdout.contains("Setting: buf[5] = null"), "stdout: {stdout}");
    assert!(stdout.contains("Returning..."), "stdout: {stdout}");
}

#[test]
fn buf_index_fault_stops_before_returning_line() {
    let file = fixture(&12_i32.to_ne_bytes());
    let output = run(BUF_INDEX, &[file.path().as_os_str()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Setting: buf[12] = null"), "stdout: {stdout}");
    assert!(!stdout.contains("Returning..."), "stdout: {stdout}");
}

// ── exe1 ─────────────────────────────────────────────────────────────────────

#[cfg(target_endian = "little")]
#[test]
fn exe1_partition_matches_reference_table() {
    assert_eq!(outcome_for(EXE1, b"0\0\0\0"), FaultKind::DivisionByZero.expected_outcome());
    assert_eq!(outcome_for(EXE1, b"1\0\0\0"), ExitOutcome::Success);
    assert_eq!(outcome_for(EXE1, b"0002"), FaultKind::OutOfBoundsRead.expected_outcome());
    assert_eq!(outcome_for(EXE1, b" 3  "), ExitOutcome::Success);
}

#[test]
fn exe1_out_of_domain_exits_zero() {
    for input in [b"4\0\0\0", b"9999", b"-1\0\0"] {
        assert_eq!(outcome_for(EXE1, input), ExitOutcome::Success, "{input:?}");
    }
}

#[cfg(target_endian = "little")]
#[test]
fn exe1_non_numeric_input_decodes_to_zero() {
    assert_eq!(outcome_for(EXE1, b"abcd"), FaultKind::DivisionByZero.expected_outcome());
}

// ── fault-signals ────────────────────────────────────────────────────────────

#[test]
fn fault_signals_keyed_bytes_deliver_distinct_faults() {
    let cases = [
        (b'a', FaultKind::Abort),
        (b'b', FaultKind::MisalignedAccess),
        (b'd', FaultKind::DivisionByZero),
        (b's', FaultKind::NullDereference),
    ];
    for (byte, kind) in cases {
        assert_eq!(outcome_for(FAULT_SIGNALS, &[byte]), kind.expected_outcome(), "{}", byte as char);
    }
}

#[test]
fn fault_signals_other_bytes_exit_zero() {
    for byte in [b'x', b'A', 0, 0xff] {
        assert_eq!(outcome_for(FAULT_SIGNALS, &[byte]), ExitOutcome::Success, "byte {byte:#x}");
    }
}

// ── sage1 ────────────────────────────────────────────────────────────────────

#[test]
fn sage1_three_or_more_matches_crash() {
    for input in [b"bad!", b"bad?", b"xad!"] {
        assert_eq!(
            outcome_for(SAGE1, input),
            FaultKind::NullDereference.expected_outcome(),
            "{input:?}"
        );
    }
}

#[test]
fn sage1_two_matches_exit_zero() {
    assert_eq!(outcome_for(SAGE1, b"baxx"), ExitOutcome::Success);
    assert_eq!(outcome_for(SAGE1, b"good"), ExitOutcome::Success);
}

// ── harness contract ─────────────────────────────────────────────────────────

#[test]
fn wrong_argument_count_is_usage_error() {
    let none = run(SAGE1, &[]);
    assert_eq!(ExitOutcome::from_status(&none.status), ExitOutcome::UsageError);
    let stdout = String::from_utf8_lossy(&none.stdout);
    assert_eq!(stdout.trim_end(), "usage: sage1 input");

    let file = fixture(b"bad!");
    let two = run(SAGE1, &[file.path().as_os_str(), file.path().as_os_str()]);
    assert_eq!(ExitOutcome::from_status(&two.status), ExitOutcome::UsageError);
}

#[test]
fn option_terminator_is_read_as_input_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::new(SAGE1)
        .arg("--")
        .current_dir(dir.path())
        .env("PROBE_LOG", "off")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {SAGE1}: {e}"));
    assert_eq!(ExitOutcome::from_status(&output.status), ExitOutcome::Aborted);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open --"), "stderr: {stderr}");
}

#[test]
fn short_input_aborts_with_counts() {
    let file = fixture(b"ba");
    let output = run(SAGE1, &[file.path().as_os_str()]);
    assert_eq!(ExitOutcome::from_status(&output.status), ExitOutcome::Aborted);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Required 4 of u8, only read 2."), "stderr: {stderr}");
}

#[test]
fn short_integer_input_counts_whole_elements() {
    let file = fixture(&[1, 2, 3]);
    let output = run(BUF_INDEX, &[file.path().as_os_str()]);
    assert_eq!(ExitOutcome::from_status(&output.status), ExitOutcome::Aborted);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Required 1 of i32, only read 0."), "stderr: {stderr}");
}

#[test]
fn missing_input_aborts_naming_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no-such-input");
    let output = run(FAULT_SIGNALS, &[path.as_os_str()]);
    assert_eq!(ExitOutcome::from_status(&output.status), ExitOutcome::Aborted);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-input"), "stderr: {stderr}");
}

#[test]
fn manifest_binary_lists_every_target() {
    let output = run(PROBE_MANIFEST, &[]);
    assert_eq!(ExitOutcome::from_status(&output.status), ExitOutcome::Success);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let names: Vec<&str> = json
        .as_array()
        .expect("array of manifests")
        .iter()
        .filter_map(|m| m["name"].as_str())
        .collect();
    assert_eq!(names, ["buf-index", "exe1", "fault-signals", "sage1"]);
}
