//! One pure matcher per check kind.
//!
//! Every matcher takes the full source text plus the check parameters and
//! returns a verdict. Matchers are total: arbitrary input text can never make
//! them panic or error, the worst case is a failing verdict. All
//! mission-supplied identifiers and literals are regex-escaped before being
//! embedded in a pattern.

use super::descriptor::{Check, StorageOp};
use super::report::Verdict;
use regex::Regex;

/// Run one check against source text.
pub fn run_check(code: &str, check: &Check) -> Verdict {
    match check {
        Check::ContainsPattern {
            pattern,
            description,
            message,
        } => check_contains_pattern(code, pattern, description, message, check),
        Check::NoPattern {
            pattern,
            description,
            message,
        } => check_no_pattern(code, pattern, description, message, check),
        Check::HasFunction {
            name,
            params,
            message,
        } => check_has_function(code, name, params, message, check),
        Check::ReturnsType {
            function,
            return_type,
            message,
        } => check_returns_type(code, function, return_type, message, check),
        Check::HasAttribute { attribute, message } => {
            check_has_attribute(code, attribute, message, check)
        }
        Check::UsesType { type_name, message } => check_uses_type(code, type_name, message, check),
        Check::StorageOperation { operation, message } => {
            check_storage_operation(code, *operation, message, check)
        }
        Check::HasStruct { name, message } => check_has_struct(code, name, message, check),
        Check::BalancedBraces { message } => check_balanced_braces(code, message, check),
        Check::HasImport { module, message } => check_has_import(code, module, message, check),
        Check::Unknown(_) => Verdict::fail(format!("Unknown check type: {}", check.kind()), check),
    }
}

/// True when `pattern` compiles and matches `code`; false otherwise.
///
/// Escaped inputs make compile failures unreachable in practice, but a bad
/// pattern must degrade to "no match", not a panic.
pub(crate) fn matches_pattern(code: &str, pattern: &str) -> bool {
    Regex::new(pattern).map(|re| re.is_match(code)).unwrap_or(false)
}

/// Escape a fragment and make its internal whitespace flexible, so
/// `x: i32` also matches `x:i32` and `x:   i32`.
fn flexible_ws(fragment: &str) -> String {
    fragment
        .split_whitespace()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join(r"\s*")
}

fn fail_text(message: &Option<String>, default: String) -> String {
    format!("✗ {}", message.as_deref().unwrap_or(&default))
}

fn check_contains_pattern(
    code: &str,
    pattern: &str,
    description: &Option<String>,
    message: &Option<String>,
    check: &Check,
) -> Verdict {
    if code.contains(pattern) {
        Verdict::pass(
            format!("✓ Found: {}", description.as_deref().unwrap_or(pattern)),
            check,
        )
    } else {
        Verdict::fail(
            fail_text(message, format!("Missing pattern: {}", pattern)),
            check,
        )
    }
}

fn check_no_pattern(
    code: &str,
    pattern: &str,
    description: &Option<String>,
    message: &Option<String>,
    check: &Check,
) -> Verdict {
    if code.contains(pattern) {
        Verdict::fail(
            fail_text(message, format!("Should not contain: {}", pattern)),
            check,
        )
    } else {
        Verdict::pass(
            format!(
                "✓ Correctly avoided: {}",
                description.as_deref().unwrap_or(pattern)
            ),
            check,
        )
    }
}

fn check_has_function(
    code: &str,
    name: &str,
    params: &[String],
    message: &Option<String>,
    check: &Check,
) -> Verdict {
    let pattern = format!(r"(?:pub\s+)?fn\s+{}\s*\(([^)]*)\)", regex::escape(name));
    let captured = Regex::new(&pattern)
        .ok()
        .and_then(|re| re.captures(code).map(|c| c[1].to_string()));

    let Some(param_text) = captured else {
        return Verdict::fail(
            fail_text(message, format!("Function '{}' not found", name)),
            check,
        );
    };

    if !params.is_empty() {
        let normalized = param_text.split_whitespace().collect::<Vec<_>>().join(" ");
        let all_present = params
            .iter()
            .all(|p| matches_pattern(&normalized, &flexible_ws(p)));

        if !all_present {
            return Verdict::fail(
                format!(
                    "✗ Function '{}' has incorrect parameters. Expected: {}",
                    name,
                    params.join(", ")
                ),
                check,
            );
        }
    }

    Verdict::pass(
        format!("✓ Function '{}' found with correct signature", name),
        check,
    )
}

fn check_returns_type(
    code: &str,
    function: &str,
    return_type: &str,
    message: &Option<String>,
    check: &Check,
) -> Verdict {
    let pattern = format!(
        r"fn\s+{}\s*\([^)]*\)\s*->\s*{}",
        regex::escape(function),
        flexible_ws(return_type)
    );

    if matches_pattern(code, &pattern) {
        Verdict::pass(
            format!(
                "✓ Function '{}' returns correct type: {}",
                function, return_type
            ),
            check,
        )
    } else {
        Verdict::fail(
            fail_text(
                message,
                format!("Function '{}' should return {}", function, return_type),
            ),
            check,
        )
    }
}

fn check_has_attribute(
    code: &str,
    attribute: &str,
    message: &Option<String>,
    check: &Check,
) -> Verdict {
    // Trailing arguments inside the brackets are allowed: #[contracttype(..)]
    // still satisfies `contracttype`.
    let pattern = format!(r"#\[{}[^\]]*\]", regex::escape(attribute));

    if matches_pattern(code, &pattern) {
        Verdict::pass(format!("✓ Attribute #[{}] found", attribute), check)
    } else {
        Verdict::fail(
            fail_text(message, format!("Missing attribute: #[{}]", attribute)),
            check,
        )
    }
}

fn check_uses_type(
    code: &str,
    type_name: &str,
    message: &Option<String>,
    check: &Check,
) -> Verdict {
    let pattern = format!(r"\b{}\b", regex::escape(type_name));

    if matches_pattern(code, &pattern) {
        Verdict::pass(format!("✓ Type '{}' is used", type_name), check)
    } else {
        Verdict::fail(
            fail_text(message, format!("Must use type: {}", type_name)),
            check,
        )
    }
}

fn check_storage_operation(
    code: &str,
    operation: StorageOp,
    message: &Option<String>,
    check: &Check,
) -> Verdict {
    // Any of the three storage scopes satisfies the check.
    let pattern = format!(
        r"env\s*\.\s*storage\(\)\s*\.\s*(?:persistent|temporary|instance)\(\)\s*\.\s*{}",
        operation.as_str()
    );

    if matches_pattern(code, &pattern) {
        Verdict::pass(format!("✓ Storage {} operation found", operation), check)
    } else {
        Verdict::fail(
            fail_text(message, format!("Missing storage {} operation", operation)),
            check,
        )
    }
}

fn check_has_struct(code: &str, name: &str, message: &Option<String>, check: &Check) -> Verdict {
    let pattern = format!(r"(?:pub\s+)?struct\s+{}", regex::escape(name));

    if matches_pattern(code, &pattern) {
        Verdict::pass(format!("✓ Struct '{}' defined", name), check)
    } else {
        Verdict::fail(fail_text(message, format!("Missing struct: {}", name)), check)
    }
}

fn check_balanced_braces(code: &str, message: &Option<String>, check: &Check) -> Verdict {
    let mut count: i64 = 0;
    for ch in code.chars() {
        match ch {
            '{' => count += 1,
            '}' => count -= 1,
            _ => {}
        }
        // A dip below zero can never rebalance; the verdict is already known.
        if count < 0 {
            break;
        }
    }

    if count == 0 {
        Verdict::pass("✓ All braces are balanced", check)
    } else {
        Verdict::fail(
            fail_text(
                message,
                "Unbalanced braces detected - check for missing { or }".to_string(),
            ),
            check,
        )
    }
}

fn check_has_import(code: &str, module: &str, message: &Option<String>, check: &Check) -> Verdict {
    let pattern = format!(r"use\s+{}", regex::escape(module));

    if matches_pattern(code, &pattern) {
        Verdict::pass(format!("✓ Import '{}' found", module), check)
    } else {
        Verdict::fail(
            fail_text(message, format!("Missing import: use {}", module)),
            check,
        )
    }
}
