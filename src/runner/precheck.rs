//! Structural pre-checks that run before the mission check list.

use crate::checks::matches_pattern;

/// Lexical tokens whose presence marks the submission as plausibly a Soroban
/// contract. A coarse sanity gate, not an endorsement of correctness.
const SOROBAN_MARKERS: [&str; 4] = ["soroban_sdk", "contractimpl", "contract", "Env"];

/// Outcome of one structural pre-check.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Precheck {
    pub passed: bool,
    pub message: String,
}

impl Precheck {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Reject empty submissions and unbalanced `{}` / `()` nesting.
///
/// Braces and parentheses are scanned independently; the first net-negative
/// dip has its own diagnostic, distinct from a non-zero final count.
pub(crate) fn check_syntax_basics(code: &str) -> Precheck {
    let trimmed = code.trim();

    if trimmed.is_empty() {
        return Precheck::fail("✗ Code is empty - write your contract!");
    }

    let mut brace_count: i64 = 0;
    for ch in trimmed.chars() {
        match ch {
            '{' => brace_count += 1,
            '}' => brace_count -= 1,
            _ => {}
        }
        if brace_count < 0 {
            return Precheck::fail("✗ Unexpected closing brace }");
        }
    }
    if brace_count != 0 {
        return Precheck::fail(format!(
            "✗ Unbalanced braces: {}",
            if brace_count > 0 { "missing }" } else { "extra }" }
        ));
    }

    let mut paren_count: i64 = 0;
    for ch in trimmed.chars() {
        match ch {
            '(' => paren_count += 1,
            ')' => paren_count -= 1,
            _ => {}
        }
        if paren_count < 0 {
            return Precheck::fail("✗ Unexpected closing parenthesis )");
        }
    }
    if paren_count != 0 {
        return Precheck::fail("✗ Unbalanced parentheses");
    }

    Precheck::pass("✓ Basic syntax looks good")
}

/// Require at least one function declaration and some Soroban SDK usage.
///
/// The two failures carry distinct diagnostics: "no function" points at
/// missing code, "no SDK usage" points at the wrong kind of code.
pub(crate) fn check_structure(code: &str) -> Precheck {
    if !matches_pattern(code, r"fn\s+\w+") {
        return Precheck::fail("✗ No function definitions found");
    }

    let has_markers = SOROBAN_MARKERS.iter().any(|marker| code.contains(marker));
    if !has_markers {
        return Precheck::fail(
            "✗ No Soroban SDK usage detected - this should be a Soroban contract",
        );
    }

    Precheck::pass("✓ Contract structure validated")
}
