//! Domain logic: dependency rules, validation and progress

mod progress;
mod rules;
mod validation;


pub use progress::{report, summarize, ProgressSummary, ValidationReport, Verdict};
pub use rules::{DependencyRule, Requirement, DEPENDENCY_RULES};
pub use validation::{evaluate_rules, validate, Violation};
