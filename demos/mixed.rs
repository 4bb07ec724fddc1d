//! One failing test and one passing test.

use lstest::{TestContext, TestStatus, check_eq};

#[lstest::test]
fn first_fails(cx: &mut TestContext) -> TestStatus {
    check_eq!(cx, 2 * 2, 5);
    TestStatus::OK
}

#[lstest::test]
fn second_passes(cx: &mut TestContext) {
    check_eq!(cx, "lst".len(), 3);
}

lstest::test_main!();
