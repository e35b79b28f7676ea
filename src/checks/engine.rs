//! Validation engine: runs an ordered check list against source text.

use super::descriptor::Check;
use super::matchers::run_check;
use super::report::ValidationReport;

/// Validate source text against an ordered list of checks.
///
/// Every check runs regardless of earlier failures, so a learner sees all
/// problems at once instead of fixing them one resubmission at a time.
/// Verdict order matches check order, and identical inputs always produce an
/// identical report.
pub fn validate_code(code: &str, checks: &[Check]) -> ValidationReport {
    ValidationReport {
        verdicts: checks.iter().map(|check| run_check(code, check)).collect(),
    }
}
