//! Command-line entry point of a test binary.
//!
//! ## Options
//!
//! - `--failfast` - stop after the first test that signals failure
//! - `--help` - print usage to stderr and exit 0 without running anything
//!
//! Anything else prints `unknown argument: <arg>` plus the usage text and exits 1.
//!
//! ## Design
//!
//! Arguments are parsed with clap (derive) with its own help and version flags disabled, so the
//! usage text and exit codes stay under our control. [`execute`] returns an [`ExitCode`] instead of
//! calling `process::exit`; only [`run`] exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process;

use clap::Parser;
use clap::error::{ContextKind, ContextValue};
use thiserror::Error;

use crate::registration;
use crate::registry::Registry;
use crate::runner::{RunOptions, Runner};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Process exit status of a test binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A command line that stops the run before any test executes.
///
/// The message already carries the usage text; it always exits with [`ExitCode::FAILURE`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    message: String,
}

impl CliError {
    fn rejected(err: &ArgsError, program: &str) -> Self {
        Self {
            message: format!("{err}\n\n{}", usage(program)),
        }
    }
}

/// Errors in the command line itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Flags understood by every test binary.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true, args_override_self = true)]
pub struct RunArgs {
    /// Stop after the first failed test
    #[arg(long)]
    pub failfast: bool,

    /// Show this help message
    #[arg(long)]
    pub help: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Run(RunOptions),
    Help,
}

/// Parse process arguments (program name first).
///
/// Arguments are read left to right and only the exact spellings `--failfast` and `--help` are
/// accepted. The first `--help` or the first anything-else decides the outcome, so
/// `--help --bogus` prints usage while `--bogus --help` is an error. `--`, `--flag=value` forms and
/// positionals are all unknown arguments.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    for arg in args.iter().skip(1) {
        match arg.to_str() {
            Some("--help") => return Ok(Invocation::Help),
            Some("--failfast") => {}
            _ => return Err(ArgsError::UnknownArgument(arg.to_string_lossy().into_owned())),
        }
    }

    // Only vetted spellings reach clap.
    let parsed = RunArgs::try_parse_from(&args)
        .map_err(|err| ArgsError::UnknownArgument(rejected_argument(&err)))?;
    Ok(Invocation::Run(RunOptions {
        failfast: parsed.failfast,
    }))
}

fn rejected_argument(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        _ => err.kind().to_string(),
    }
}

/// Usage text, without a trailing newline.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [options]\n\
         Options:\n  \
         --failfast   Stop after the first failed test\n  \
         --help       Show this help message"
    )
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| "lstest".to_string())
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Process entry point used by `test_main!()`.
///
/// This is the only place where `process::exit` is called.
pub fn run() -> ! {
    init_logging();
    let stderr = io::stderr();
    let code = execute(std::env::args_os(), &mut stderr.lock(), registration::collect);
    process::exit(code.0)
}

/// Run the whole READY → RUNNING → DONE flow against `diagnostics`.
///
/// `collect` is only called when tests are actually going to run.
pub fn execute<I, T>(args: I, diagnostics: &mut dyn Write, collect: impl FnOnce() -> Registry) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match dispatch(&args, diagnostics, collect) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(diagnostics, "{e}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(
    args: &[OsString],
    diagnostics: &mut dyn Write,
    collect: impl FnOnce() -> Registry,
) -> Result<ExitCode, CliError> {
    let program = program_name(args);
    let invocation = parse_args(args).map_err(|e| {
        tracing::debug!(error = %e, "rejecting command line");
        CliError::rejected(&e, &program)
    })?;

    match invocation {
        Invocation::Help => {
            let _ = writeln!(diagnostics, "{}", usage(&program));
            Ok(ExitCode::SUCCESS)
        }
        Invocation::Run(options) => {
            let summary = Runner::new(collect(), options).run(diagnostics);
            Ok(if summary.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Initialize structured logging with an env-based filter, defaulting to warn.
///
/// Logs go to stderr alongside the diagnostics. A second call is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

// ============================================================================
// Tests
// ============================================================================
