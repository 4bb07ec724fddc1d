//! Load-time test registration.
//!
//! `#[lstest::test]` submits a [`TestCase`] through `inventory`, whose submissions run from a
//! platform static initializer before `main` with no call site anywhere in the program. At run time
//! [`collect`] copies those submissions into a [`Registry`].
//!
//! Run order is the reverse of the order `inventory` yields its entries, which is the order the
//! static initializers happened to run in. The linker picks that order, not declaration order, even
//! within one file, so it is unspecified and tests must not depend on it.

use crate::registry::{Registry, TestCase};

inventory::collect!(TestCase);

/// Build a registry holding every test submitted at load time, each exactly once.
///
/// The order is unspecified; see the module docs.
pub fn collect() -> Registry {
    // inventory yields the most recently run initializer first.
    let mut submitted: Vec<&'static TestCase> = inventory::iter::<TestCase>.into_iter().collect();
    submitted.reverse();

    let mut registry = Registry::new();
    for test in submitted {
        tracing::trace!(test = test.name(), "registering");
        registry.register(*test);
    }
    tracing::debug!(
        count = registry.count(),
        capacity = registry.capacity(),
        "collected registered tests"
    );
    registry
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TestContext, TestStatus, check_eq};

    // Submitted exactly as `#[lstest::test]` would.
    fn lst_t_registered_by_hand(cx: &mut TestContext<'_>) -> TestStatus {
        check_eq!(cx, 2 * 21, 42);
        TestStatus::OK
    }

    inventory::submit! {
        TestCase::new("lst_t_registered_by_hand", lst_t_registered_by_hand)
    }

    #[crate::test]
    fn declared_with_attribute(cx: &mut TestContext) {
        check_eq!(cx, "lst".len(), 3);
    }

    #[test]
    fn test_collect_finds_submitted_tests() {
        let registry = collect();
        let names: Vec<_> = registry.iter().map(TestCase::name).collect();

        assert!(names.contains(&"registered_by_hand"), "{names:?}");
        assert!(names.contains(&"declared_with_attribute"), "{names:?}");
        assert!(registry.capacity() >= registry.count());
    }

    #[test]
    fn test_collect_registers_each_submission_once_in_reverse_iteration_order() {
        let mut yielded: Vec<_> = inventory::iter::<TestCase>.into_iter().map(TestCase::symbol).collect();
        yielded.reverse();

        let registry = collect();
        let collected: Vec<_> = registry.iter().map(TestCase::symbol).collect();
        assert_eq!(collected, yielded);

        let mut unique = collected.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), collected.len(), "{collected:?}");
    }

    #[test]
    fn test_collect_is_repeatable() {
        let first: Vec<_> = collect().iter().map(TestCase::symbol).collect();
        let second: Vec<_> = collect().iter().map(TestCase::symbol).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_collected_tests_are_invocable() {
        let registry = collect();
        let case = registry
            .iter()
            .find(|t| t.symbol() == "lst_t_declared_with_attribute")
            .copied()
            .unwrap();

        let mut counters = crate::Counters::new();
        let mut out = Vec::new();
        let status = case.invoke(&mut TestContext::new(case.name(), &mut counters, &mut out));

        assert_eq!(status, TestStatus::OK);
        assert_eq!(counters.succeeded(), 1);
        assert!(out.is_empty());
    }
}
