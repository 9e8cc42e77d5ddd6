//! Harness entry point: argument check, load, and a single target call.
//!
//! [`run`] is the whole `main` of a target program:
//!
//! ```rust,ignore
//! fn main() -> std::process::ExitCode {
//!     probe_core::harness::run::<u8, 4, _>(|input: InputBuffer<u8, 4>| top(input))
//! }
//! ```
//!
//! Configuration errors are never silent. A wrong argument count prints the
//! usage line and exits with status 1. A missing or undersized input file
//! prints a diagnostic and aborts, since it means the harness is misused
//! rather than the target being exercised. Faults raised by the target are
//! not caught.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use crate::buffer::InputBuffer;
use crate::config::HarnessConfig;
use crate::element::Element;
use crate::error::{HarnessError, UsageError};
use crate::fault;
use crate::loader::load;
use crate::outcome::USAGE_EXIT_CODE;

/// Program name used when `argv[0]` is missing or unprintable.
const FALLBACK_PROGRAM: &str = "program";

// ── Arguments ────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Raw input file for the target.
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
}

/// Extract the single input path from an argument vector (`argv[0]` first).
///
/// # Errors
/// Returns [`UsageError`] unless there is exactly one argument after the
/// program name.
pub fn parse_args<I, S>(args: I) -> Result<PathBuf, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let usage = || UsageError { program: program_name(args.first()) };

    if args.len() != 2 {
        return Err(usage());
    }

    // Everything after `--` is positional, so the one argument is always a path.
    let argv = [args[0].clone(), OsString::from("--"), args[1].clone()];
    Args::try_parse_from(argv)
        .map(|a| a.input)
        .map_err(|_| usage())
}

fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|p| Path::new(p).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_PROGRAM)
        .to_owned()
}

// ── Target invocation ────────────────────────────────────────────────────────

/// A fault-bearing entry point called once with the loaded input.
pub trait Target<T: Element, const N: usize> {
    /// Run the target. Any reached fault terminates the process.
    fn invoke(self, input: InputBuffer<T, N>);
}

impl<T, const N: usize, F> Target<T, N> for F
where
    T: Element,
    F: FnOnce(InputBuffer<T, N>),
{
    fn invoke(self, input: InputBuffer<T, N>) {
        self(input);
    }
}

/// Validate arguments and load the input, without invoking anything.
///
/// # Errors
/// Returns [`HarnessError::Usage`] on a wrong argument count and
/// [`HarnessError::Load`] if the input file cannot supply `N` elements.
pub fn prepare<T, const N: usize, I, S>(args: I) -> Result<InputBuffer<T, N>, HarnessError>
where
    T: Element,
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let path = parse_args(args)?;
    let input = load::<T, N>(&path).map_err(|err| {
        tracing::error!(path = %path.display(), error = %err, "failed to load input");
        err
    })?;
    Ok(input)
}

/// Complete `main` for a target program reading the process arguments.
pub fn run<T, const N: usize, F>(target: F) -> ExitCode
where
    T: Element,
    F: Target<T, N>,
{
    run_with_args(std::env::args_os(), &HarnessConfig::from_env(), target)
}

/// [`run`] with an explicit argument vector and configuration.
///
/// Returns status 0 after a normal target return and status 1 on a usage
/// error. Aborts the process on a load error.
pub fn run_with_args<T, const N: usize, F, I, S>(
    args: I,
    config: &HarnessConfig,
    target: F,
) -> ExitCode
where
    T: Element,
    F: Target<T, N>,
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    config.init_tracing();

    match prepare::<T, N, I, S>(args) {
        Ok(input) => {
            tracing::info!(element = T::NAME, count = N, "invoking target");
            target.invoke(input);
            tracing::info!("target returned");
            ExitCode::SUCCESS
        }
        Err(HarnessError::Usage(usage)) => {
            println!("{usage}");
            ExitCode::from(USAGE_EXIT_CODE)
        }
        Err(err) => {
            eprintln!("{err}");
            fault::abort()
        }
    }
}
