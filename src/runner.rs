//! Sequential test runner.
//!
//! A [`Runner`] is built from a filled [`Registry`] and consumed by [`Runner::run`], so a run moves
//! READY → RUNNING → DONE exactly once. Tests execute one at a time, in registration order, on the
//! calling thread.

use std::fmt;
use std::io::Write;

use crate::context::{Counters, TestContext};
use crate::registry::Registry;

/// Options recognised on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop invoking tests after the first one that returns a non-zero status.
    pub failfast: bool,
}

/// Outcome of a completed run.
///
/// The printed totals count assertions, not tests. A test that returns a stop status without any
/// failed typed assertion therefore leaves no trace in the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub counters: Counters,
    /// Tests actually invoked.
    pub tests_run: usize,
    /// Tests never invoked because `failfast` stopped the run.
    pub tests_skipped: usize,
}

impl Summary {
    /// `true` when no typed assertion failed.
    pub fn is_success(&self) -> bool {
        self.counters.failed() == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} succeeded, {} failed, {} total",
            self.counters.succeeded(),
            self.counters.failed(),
            self.counters.total()
        )
    }
}

/// Runs every registered test once.
pub struct Runner {
    registry: Registry,
    options: RunOptions,
}

impl Runner {
    pub fn new(registry: Registry, options: RunOptions) -> Self {
        Self { registry, options }
    }

    /// Invoke the tests, write the summary line to `diagnostics`, and release the registry.
    #[tracing::instrument(skip_all, fields(test_count = self.registry.count(), failfast = self.options.failfast))]
    pub fn run(self, diagnostics: &mut dyn Write) -> Summary {
        let Runner { registry, options } = self;
        let mut counters = Counters::new();
        let mut tests_run = 0;

        for test in registry.iter() {
            let status = {
                let mut cx = TestContext::new(test.name(), &mut counters, &mut *diagnostics);
                test.invoke(&mut cx)
            };
            tests_run += 1;
            tracing::debug!(test = test.name(), status = status.0, "test finished");

            if status.is_stop() && options.failfast {
                tracing::debug!(
                    test = test.name(),
                    skipped = registry.count() - tests_run,
                    "failfast: stopping run"
                );
                break;
            }
        }

        let summary = Summary {
            counters,
            tests_run,
            tests_skipped: registry.count() - tests_run,
        };
        let _ = writeln!(diagnostics, "{summary}");
        tracing::debug!(
            succeeded = counters.succeeded(),
            failed = counters.failed(),
            tests_run,
            "run complete"
        );

        registry.release();
        summary
    }
}

// ============================================================================
// Tests
// ============================================================================
