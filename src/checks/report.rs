//! Verdicts and validation reports.

use super::descriptor::Check;

/// The outcome of one check applied to one piece of source text.
///
/// Verdicts are never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable outcome, suitable for direct display.
    pub message: String,
    /// The check this verdict belongs to.
    pub check: Check,
}

impl Verdict {
    pub fn pass(message: impl Into<String>, check: &Check) -> Self {
        Self {
            passed: true,
            message: message.into(),
            check: check.clone(),
        }
    }

    pub fn fail(message: impl Into<String>, check: &Check) -> Self {
        Self {
            passed: false,
            message: message.into(),
            check: check.clone(),
        }
    }
}

/// Ordered verdicts for one validation run.
///
/// Verdict order matches the order of the input checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub verdicts: Vec<Verdict>,
}

impl ValidationReport {
    /// True when every verdict passed (vacuously true for an empty run).
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.passed).count()
    }

    pub fn total_count(&self) -> usize {
        self.verdicts.len()
    }
}
