//! Two failing tests with one typed assertion each, so the totals do not depend on run order.

use lstest::{TestContext, check_eq, check_lt};

#[lstest::test]
fn sum_is_off_by_one(cx: &mut TestContext) {
    check_eq!(cx, 1 + 1, 3);
}

#[lstest::test]
fn length_is_too_long(cx: &mut TestContext) {
    check_lt!(cx, "lstest".len(), 4);
}

lstest::test_main!();
