//! Per-run assertion counters and the context handed to each test body.
//!
//! There are no ambient globals: the runner owns one [`Counters`] value and lends it, together with
//! the diagnostics sink, to every test through a [`TestContext`].

use std::fmt;
use std::io::Write;

use crate::assert::CmpOp;

/// Running totals of passed and failed typed assertions.
///
/// Only typed assertions touch these; they are never reset during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    succeeded: u64,
    failed: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn succeeded(&self) -> u64 {
        self.succeeded
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }

    /// Number of assertions evaluated, not number of tests.
    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

/// Source position of an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A failed check, rendered after the `<test-name>: FAILED: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure<'a> {
    /// A typed comparison did not hold.
    Comparison {
        op: CmpOp,
        lhs_src: &'a str,
        rhs_src: &'a str,
        lhs_value: String,
        rhs_value: String,
        location: Location,
    },
    /// A boolean condition was false.
    Condition { src: &'a str, location: Location },
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Comparison {
                op,
                lhs_src,
                rhs_src,
                lhs_value,
                rhs_value,
                location,
            } => write!(
                f,
                "{lhs_src} {} {rhs_src} (actual: {lhs_value} {} {rhs_value}) ({location})",
                op.symbol(),
                op.negated().symbol(),
            ),
            Failure::Condition { src, location } => write!(f, "{src} ({location})"),
        }
    }
}

/// Everything a running test can reach: its own name, the run's counters, and the diagnostics sink.
///
/// The assertion macros are the intended callers of the recording methods.
pub struct TestContext<'a> {
    name: &'a str,
    counters: &'a mut Counters,
    diagnostics: &'a mut dyn Write,
}

impl<'a> TestContext<'a> {
    pub fn new(name: &'a str, counters: &'a mut Counters, diagnostics: &'a mut dyn Write) -> Self {
        Self {
            name,
            counters,
            diagnostics,
        }
    }

    /// Name of the enclosing test, without the registration prefix.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Snapshot of the run's counters so far.
    pub fn counters(&self) -> Counters {
        *self.counters
    }

    /// Record a passing typed assertion.
    pub fn pass(&mut self) {
        self.counters.record_success();
    }

    /// Record a failing typed assertion and return the status the test must exit with.
    #[cold]
    pub fn fail(&mut self, failure: &Failure<'_>) -> crate::TestStatus {
        self.report(failure);
        self.counters.record_failure();
        crate::TestStatus::STOP
    }

    /// Report a failed boolean check. Nothing is counted and the test keeps going.
    #[cold]
    pub fn note(&mut self, failure: &Failure<'_>) {
        self.report(failure);
    }

    fn report(&mut self, failure: &Failure<'_>) {
        tracing::trace!(test = self.name, "assertion failed");
        // A failing stderr leaves nowhere better to report to.
        let _ = writeln!(self.diagnostics, "{}: FAILED: {}", self.name, failure);
    }
}

// ============================================================================
// Tests
// ============================================================================
