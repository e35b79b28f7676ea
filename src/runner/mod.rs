//! Test orchestrator for mission submissions.
//!
//! Wraps the validation engine with structural pre-checks and produces a
//! staged report:
//!
//! 1. Syntax basics: non-empty source, balanced `{}` and `()`
//! 2. Structure: at least one function and some Soroban SDK usage
//! 3. The mission's own check list, one stage per check
//!
//! The report is computed eagerly and is fully deterministic. Stages are an
//! ordered, replayable sequence; the CLI replays them with a delay between
//! prints for pacing, but pacing never changes the report. All stages always
//! run, even when an early pre-check fails, so the learner sees the complete
//! picture in one submission.

mod precheck;

#[cfg(test)]
mod tests;

use crate::checks::validate_code;
use crate::mission::Mission;
use precheck::{check_structure, check_syntax_basics};

/// Which part of the orchestrated run a stage belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
    /// Syntax pre-check (empty source, delimiter balance).
    Syntax,
    /// Structure pre-check (function present, Soroban markers present).
    Structure,
    /// One mission-specific check.
    Check,
}

/// One stage of an orchestrated test run.
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult {
    pub phase: StagePhase,
    /// Short progress label shown while the stage is "running".
    pub label: String,
    pub passed: bool,
    pub message: String,
}

/// Full report for one orchestrated test run.
#[derive(Debug, Clone, PartialEq)]
pub struct TestReport {
    /// Ordered stages: syntax, structure, then one per mission check.
    pub stages: Vec<StageResult>,
    /// True only when every stage passed.
    pub all_passed: bool,
    pub passed_count: usize,
    pub total_count: usize,
    /// Terminal line: celebratory on full pass, retry prompt otherwise.
    pub summary: String,
}

/// Run the full orchestrated test sequence for a mission submission.
pub fn run_tests(code: &str, mission: &Mission) -> TestReport {
    let mut stages = precheck_stages(code);
    stages.reserve(mission.checks.len());

    let validation = validate_code(code, &mission.checks);
    let check_total = validation.total_count();
    for (i, verdict) in validation.verdicts.into_iter().enumerate() {
        stages.push(StageResult {
            phase: StagePhase::Check,
            label: format!("🧪 Check {}/{}", i + 1, check_total),
            passed: verdict.passed,
            message: verdict.message,
        });
    }

    finalize(stages)
}

/// Run only the structural pre-checks, with no mission check list.
pub fn run_prechecks(code: &str) -> TestReport {
    finalize(precheck_stages(code))
}

fn precheck_stages(code: &str) -> Vec<StageResult> {
    let syntax = check_syntax_basics(code);
    let structure = check_structure(code);

    vec![
        StageResult {
            phase: StagePhase::Syntax,
            label: "🔍 Checking syntax...".to_string(),
            passed: syntax.passed,
            message: syntax.message,
        },
        StageResult {
            phase: StagePhase::Structure,
            label: "🏗️ Validating structure...".to_string(),
            passed: structure.passed,
            message: structure.message,
        },
    ]
}

fn finalize(stages: Vec<StageResult>) -> TestReport {
    let total_count = stages.len();
    let passed_count = stages.iter().filter(|s| s.passed).count();
    let all_passed = passed_count == total_count;

    let summary = if all_passed {
        format!("🎉 All {} checks passed! Mission complete!", total_count)
    } else {
        format!(
            "❌ {}/{} checks passed. Keep trying!",
            passed_count, total_count
        )
    };

    TestReport {
        stages,
        all_passed,
        passed_count,
        total_count,
        summary,
    }
}
