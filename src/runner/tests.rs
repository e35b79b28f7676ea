use super::*;
use crate::checks::Check;
use crate::mission::{Difficulty, Mission};

fn mission_with_checks(checks: Vec<Check>) -> Mission {
    Mission {
        id: "test-mission".to_string(),
        title: "Test Mission".to_string(),
        chapter: 1,
        order: 1,
        difficulty: Difficulty::Beginner,
        xp_reward: 100,
        story: String::new(),
        learning_goal: String::new(),
        template: String::new(),
        solution: String::new(),
        checks,
        hints: Vec::new(),
        concepts_introduced: Vec::new(),
    }
}

fn counter_mission() -> Mission {
    mission_with_checks(vec![
        Check::HasAttribute {
            attribute: "contractimpl".to_string(),
            message: None,
        },
        Check::HasFunction {
            name: "increment".to_string(),
            params: vec!["env".to_string()],
            message: None,
        },
        Check::ReturnsType {
            function: "increment".to_string(),
            return_type: "u32".to_string(),
            message: None,
        },
    ])
}

const COUNTER_SOLUTION: &str = r#"
#![no_std]
use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol};

const COUNTER: Symbol = symbol_short!("COUNTER");

#[contract]
pub struct CounterContract;

#[contractimpl]
impl CounterContract {
    pub fn increment(env: Env) -> u32 {
        let count: u32 = env.storage().instance().get(&COUNTER).unwrap_or(0);
        env.storage().instance().set(&COUNTER, &(count + 1));
        count + 1
    }
}
"#;

#[test]
fn passing_submission_produces_full_pass_report() {
    let report = run_tests(COUNTER_SOLUTION, &counter_mission());

    assert!(report.all_passed);
    assert_eq!(report.total_count, 5);
    assert_eq!(report.passed_count, 5);
    assert_eq!(report.summary, "🎉 All 5 checks passed! Mission complete!");
}

#[test]
fn stages_are_ordered_syntax_structure_then_checks() {
    let report = run_tests(COUNTER_SOLUTION, &counter_mission());

    let phases: Vec<StagePhase> = report.stages.iter().map(|s| s.phase).collect();
    assert_eq!(
        phases,
        vec![
            StagePhase::Syntax,
            StagePhase::Structure,
            StagePhase::Check,
            StagePhase::Check,
            StagePhase::Check,
        ]
    );
}

#[test]
fn check_stage_labels_are_numbered() {
    let report = run_tests(COUNTER_SOLUTION, &counter_mission());

    assert_eq!(report.stages[2].label, "🧪 Check 1/3");
    assert_eq!(report.stages[3].label, "🧪 Check 2/3");
    assert_eq!(report.stages[4].label, "🧪 Check 3/3");
}

#[test]
fn empty_source_fails_syntax_stage() {
    let report = run_tests("   \n  ", &counter_mission());

    assert!(!report.all_passed);
    assert!(!report.stages[0].passed);
    assert_eq!(report.stages[0].message, "✗ Code is empty - write your contract!");
}

#[test]
fn missing_closing_brace_is_reported() {
    let code = "fn main() { let x = 1;";
    let report = run_tests(code, &mission_with_checks(Vec::new()));

    assert!(!report.stages[0].passed);
    assert_eq!(report.stages[0].message, "✗ Unbalanced braces: missing }");
}

#[test]
fn early_closing_brace_gets_distinct_diagnostic() {
    let code = "} fn main() {";
    let report = run_tests(code, &mission_with_checks(Vec::new()));

    assert!(!report.stages[0].passed);
    assert_eq!(report.stages[0].message, "✗ Unexpected closing brace }");
}

#[test]
fn unbalanced_parentheses_are_reported() {
    let code = "fn main( { }";
    let report = run_tests(code, &mission_with_checks(Vec::new()));

    assert!(!report.stages[0].passed);
    assert_eq!(report.stages[0].message, "✗ Unbalanced parentheses");
}

#[test]
fn source_without_functions_fails_structure_stage() {
    let code = "use soroban_sdk::Env; const X: u32 = 1;";
    let report = run_tests(code, &mission_with_checks(Vec::new()));

    assert!(report.stages[0].passed);
    assert!(!report.stages[1].passed);
    assert_eq!(report.stages[1].message, "✗ No function definitions found");
}

#[test]
fn source_without_sdk_markers_fails_structure_with_own_diagnostic() {
    let code = "fn helper(x: u32) -> u32 { x + 1 }";
    let report = run_tests(code, &mission_with_checks(Vec::new()));

    assert!(!report.stages[1].passed);
    assert_eq!(
        report.stages[1].message,
        "✗ No Soroban SDK usage detected - this should be a Soroban contract"
    );
}

#[test]
fn mission_checks_still_run_when_prechecks_fail() {
    // Unbalanced code, but it does contain the pattern one check wants.
    let code = "use soroban_sdk::Env; fn partial(env: Env) {";
    let mission = mission_with_checks(vec![Check::HasFunction {
        name: "partial".to_string(),
        params: Vec::new(),
        message: None,
    }]);
    let report = run_tests(code, &mission);

    assert!(!report.stages[0].passed);
    assert_eq!(report.stages.len(), 3);
    assert!(report.stages[2].passed);
}

#[test]
fn partial_failure_summary_counts_passed_stages() {
    let code = "use soroban_sdk::Env; fn other(env: Env) {}";
    let report = run_tests(code, &counter_mission());

    assert!(!report.all_passed);
    assert_eq!(report.total_count, 5);
    assert_eq!(report.passed_count, 2);
    assert_eq!(report.summary, "❌ 2/5 checks passed. Keep trying!");
}

#[test]
fn mission_with_no_checks_passes_on_any_valid_contract() {
    let code = "use soroban_sdk::Env; fn noop(env: Env) {}";
    let report = run_tests(code, &mission_with_checks(Vec::new()));

    assert!(report.all_passed);
    assert_eq!(report.total_count, 2);
}

#[test]
fn prechecks_alone_report_two_stages() {
    let report = run_prechecks("use soroban_sdk::Env; fn noop(env: Env) {}");

    assert_eq!(report.total_count, 2);
    assert!(report.all_passed);
    assert_eq!(report.summary, "🎉 All 2 checks passed! Mission complete!");
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let mission = counter_mission();
    let first = run_tests(COUNTER_SOLUTION, &mission);
    let second = run_tests(COUNTER_SOLUTION, &mission);

    assert_eq!(first, second);
}
