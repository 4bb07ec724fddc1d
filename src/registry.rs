//! Ordered registry of declared tests.
//!
//! The registry is filled once during registration (see [`crate::registration`]) and then only read
//! by the runner. Storage grows by doubling from an initial capacity of 8 and never shrinks.

use crate::context::TestContext;

/// Capacity reserved by the first [`Registry::register`] call.
pub const INITIAL_CAPACITY: usize = 8;

/// Prefix of the internal registration name given to every declared test.
pub const SYMBOL_PREFIX: &str = "lst_t_";

/// Status code returned by a test function.
///
/// `0` means the test ran to completion (or chose to stop cleanly); anything else asks the runner
/// to treat this invocation as a stop signal, which matters when running with `--failfast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestStatus(pub i32);

impl TestStatus {
    pub const OK: TestStatus = TestStatus(0);
    pub const STOP: TestStatus = TestStatus(1);

    /// Whether this status signals an early stop.
    pub fn is_stop(self) -> bool {
        self.0 != 0
    }
}

/// Signature of every test body.
pub type TestFn = fn(&mut TestContext<'_>) -> TestStatus;

/// A declared test: its internal registration name and its body.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    symbol: &'static str,
    func: TestFn,
}

impl TestCase {
    /// Create a test case from its registration name and body.
    ///
    /// `const` so it can be handed to `inventory::submit!`.
    pub const fn new(symbol: &'static str, func: TestFn) -> Self {
        Self { symbol, func }
    }

    /// Internal registration name, e.g. `lst_t_adds_numbers`.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Readable test name with the registration prefix stripped.
    pub fn name(&self) -> &'static str {
        self.symbol.strip_prefix(SYMBOL_PREFIX).unwrap_or(self.symbol)
    }

    /// Invoke the test body.
    pub fn invoke(&self, cx: &mut TestContext<'_>) -> TestStatus {
        (self.func)(cx)
    }
}

/// Growable, ordered sequence of registered tests.
///
/// Invariant: `capacity() >= count()`, and `capacity()` is always `0` or a power of two no smaller
/// than [`INITIAL_CAPACITY`].
#[derive(Debug, Default)]
pub struct Registry {
    tests: Vec<TestCase>,
    capacity: usize,
}

impl Registry {
    /// Create an empty registry. No storage is reserved until the first registration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `test`, doubling the backing storage when it is full.
    pub fn register(&mut self, test: TestCase) {
        if self.tests.len() == self.capacity {
            self.capacity = if self.capacity == 0 {
                INITIAL_CAPACITY
            } else {
                self.capacity * 2
            };
            self.tests.reserve_exact(self.capacity - self.tests.len());
        }
        self.tests.push(test);
    }

    /// Number of registered tests.
    pub fn count(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Logical capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The `index`-th registered test, in registration order.
    pub fn get(&self, index: usize) -> Option<&TestCase> {
        self.tests.get(index)
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.tests.iter()
    }

    /// Free the backing storage. Consuming `self` makes later use impossible.
    pub fn release(self) {
        tracing::trace!(count = self.tests.len(), "releasing registry");
        drop(self);
    }
}

// ============================================================================
// Tests
// ============================================================================
