//! The `check` command: validation with no progression side effects.

use super::load_catalog;
use super::missions::require_mission;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::context::QuestContext;
use crate::error::{QuestError, Result};
use crate::runner::{run_prechecks, run_tests, TestReport};
use std::path::Path;

pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_check(&ctx, &args.file, args.mission.as_deref())
}

pub(crate) fn run_check(ctx: &QuestContext, file: &Path, mission_id: Option<&str>) -> Result<()> {
    let code = std::fs::read_to_string(file).map_err(|e| {
        QuestError::UserError(format!(
            "could not read '{}': {}\nFix: check the path.",
            file.display(),
            e
        ))
    })?;

    let report = match mission_id {
        Some(id) => {
            let config = Config::load(ctx.config_path())?;
            let catalog = load_catalog(ctx, &config)?;
            let mission = require_mission(&catalog, id)?;
            run_tests(&code, mission)
        }
        None => run_prechecks(&code),
    };

    print_verdicts(&report);

    if report.all_passed {
        println!("✓ {}/{} checks passed", report.passed_count, report.total_count);
        Ok(())
    } else {
        Err(QuestError::ValidationError(format!(
            "{}/{} checks passed",
            report.passed_count, report.total_count
        )))
    }
}

fn print_verdicts(report: &TestReport) {
    for stage in &report.stages {
        println!("{}", stage.message);
    }
}
