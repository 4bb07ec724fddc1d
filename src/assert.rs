//! Assertion macros usable inside `#[lstest::test]` bodies.
//!
//! Two kinds of checks exist:
//!
//! - **Typed** (`check_eq!`, `check_ne!`, `check_lt!`, `check_le!`, `check_gt!`, `check_ge!`): each operand
//!   is evaluated exactly once and compared with its native operator. A pass bumps the success counter;
//!   a failure writes one diagnostic line, bumps the failure counter and returns
//!   [`TestStatus::STOP`](crate::TestStatus::STOP) from the enclosing test.
//! - **Boolean** (`check!`): a failure is reported but neither counted nor propagated, so the test keeps
//!   running. This weaker check is intentional.
//!
//! Every macro takes the test's [`TestContext`](crate::TestContext) first. Typed checks accept an optional
//! trailing format string used only to render the operands in the diagnostic (default `"{:?}"`); it must
//! suit the operand type.
//!
//! ```ignore
//! #[lstest::test]
//! fn adds(cx: &mut lstest::TestContext) {
//!     lstest::check_eq!(cx, 1 + 2, 3);
//!     lstest::check_lt!(cx, 0x0f_u8, 0xf0_u8, "{:#04x}");
//! }
//! ```

/// Comparison performed by a typed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    pub const ALL: [CmpOp; 6] = [CmpOp::Eq, CmpOp::Ne, CmpOp::Lt, CmpOp::Le, CmpOp::Gt, CmpOp::Ge];

    /// Rust spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }

    /// The operator that holds exactly when `self` does not (e.g. `<` for `>=`).
    pub fn negated(self) -> CmpOp {
        match self {
            CmpOp::Eq => CmpOp::Ne,
            CmpOp::Ne => CmpOp::Eq,
            CmpOp::Lt => CmpOp::Ge,
            CmpOp::Le => CmpOp::Gt,
            CmpOp::Gt => CmpOp::Le,
            CmpOp::Ge => CmpOp::Lt,
        }
    }
}

/// Non-fatal boolean check: reports a false condition and carries on.
#[macro_export]
macro_rules! check {
    ($cx:expr, $cond:expr $(,)?) => {
        if !$cond {
            $cx.note(&$crate::Failure::Condition {
                src: ::core::stringify!($cond),
                location: $crate::Location::new(::core::file!(), ::core::line!()),
            });
        }
    };
}

/// Typed check that `lhs == rhs`.
#[macro_export]
macro_rules! check_eq {
    ($cx:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_cmp!($cx, Eq, ==, $lhs, $rhs, "{:?}")
    };
    ($cx:expr, $lhs:expr, $rhs:expr, $fmt:literal $(,)?) => {
        $crate::__check_cmp!($cx, Eq, ==, $lhs, $rhs, $fmt)
    };
}

/// Typed check that `lhs != rhs`.
#[macro_export]
macro_rules! check_ne {
    ($cx:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_cmp!($cx, Ne, !=, $lhs, $rhs, "{:?}")
    };
    ($cx:expr, $lhs:expr, $rhs:expr, $fmt:literal $(,)?) => {
        $crate::__check_cmp!($cx, Ne, !=, $lhs, $rhs, $fmt)
    };
}

/// Typed check that `lhs < rhs`.
#[macro_export]
macro_rules! check_lt {
    ($cx:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_cmp!($cx, Lt, <, $lhs, $rhs, "{:?}")
    };
    ($cx:expr, $lhs:expr, $rhs:expr, $fmt:literal $(,)?) => {
        $crate::__check_cmp!($cx, Lt, <, $lhs, $rhs, $fmt)
    };
}

/// Typed check that `lhs <= rhs`.
#[macro_export]
macro_rules! check_le {
    ($cx:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_cmp!($cx, Le, <=, $lhs, $rhs, "{:?}")
    };
    ($cx:expr, $lhs:expr, $rhs:expr, $fmt:literal $(,)?) => {
        $crate::__check_cmp!($cx, Le, <=, $lhs, $rhs, $fmt)
    };
}

/// Typed check that `lhs > rhs`.
#[macro_export]
macro_rules! check_gt {
    ($cx:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_cmp!($cx, Gt, >, $lhs, $rhs, "{:?}")
    };
    ($cx:expr, $lhs:expr, $rhs:expr, $fmt:literal $(,)?) => {
        $crate::__check_cmp!($cx, Gt, >, $lhs, $rhs, $fmt)
    };
}

/// Typed check that `lhs >= rhs`.
#[macro_export]
macro_rules! check_ge {
    ($cx:expr, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_cmp!($cx, Ge, >=, $lhs, $rhs, "{:?}")
    };
    ($cx:expr, $lhs:expr, $rhs:expr, $fmt:literal $(,)?) => {
        $crate::__check_cmp!($cx, Ge, >=, $lhs, $rhs, $fmt)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_cmp {
    ($cx:expr, $op:ident, $tok:tt, $lhs:expr, $rhs:expr, $fmt:literal) => {
        match (&$lhs, &$rhs) {
            (lhs, rhs) => {
                if *lhs $tok *rhs {
                    $cx.pass();
                } else {
                    return $cx.fail(&$crate::Failure::Comparison {
                        op: $crate::CmpOp::$op,
                        lhs_src: ::core::stringify!($lhs),
                        rhs_src: ::core::stringify!($rhs),
                        lhs_value: ::std::format!($fmt, lhs),
                        rhs_value: ::std::format!($fmt, rhs),
                        location: $crate::Location::new(::core::file!(), ::core::line!()),
                    });
                }
            }
        }
    };
}

// ============================================================================
// Tests
// ============================================================================
