//! lstest: a minimal, self-registering unit-test harness.
//!
//! Tests are plain functions marked with [`#[lstest::test]`](macro@test). Each one registers itself
//! before `main` runs, so there is no central list to maintain. [`test_main!`] generates an entry
//! point that runs every registered test in registration order and reports how many assertions
//! passed and failed.
//!
//! ```ignore
//! use lstest::{TestContext, check, check_eq};
//!
//! #[lstest::test]
//! fn adds(cx: &mut TestContext) {
//!     check_eq!(cx, 1 + 2, 3);
//!     check!(cx, 3 > 2);
//! }
//!
//! lstest::test_main!();
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Modules
//!
//! - `registry` - ordered storage of registered tests
//! - `registration` - load-time registration and collection
//! - `assert` - `check!` and the typed `check_*!` macros
//! - `context` - counters and the per-test context
//! - `runner` - sequential execution and the summary line
//! - `cli` - argument parsing and the process entry point

// Lets macro expansions inside this crate use `::lstest::...` paths.
extern crate self as lstest;

pub mod assert;
pub mod cli;
pub mod context;
pub mod registration;
pub mod registry;
pub mod runner;

pub use assert::CmpOp;
pub use context::{Counters, Failure, Location, TestContext};
pub use registry::{Registry, TestCase, TestFn, TestStatus};
pub use runner::{RunOptions, Runner, Summary};

pub use lstest_macros::{test, test_main};

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}
