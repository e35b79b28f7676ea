//! Code checks for soroquest.
//!
//! This module is the rule interpreter that inspects submitted contract
//! source for lexical evidence of correctness:
//! - `descriptor`: the declarative check descriptors missions are built from
//! - `matchers`: one pure matcher per check kind
//! - `engine`: runs an ordered check list and aggregates verdicts
//!
//! The matching is deliberately lexical, not semantic: there is no parser or
//! type checker here, and occasional false positives are an accepted trade
//! for instant, dependency-free feedback.

mod descriptor;
mod engine;
mod matchers;
mod report;


pub use descriptor::{Check, StorageOp};
pub use engine::validate_code;
pub use matchers::run_check;
pub(crate) use matchers::matches_pattern;
pub use report::{ValidationReport, Verdict};
