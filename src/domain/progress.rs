//! Progress and verdict
//!
//! Aggregates a snapshot into counts and the tri-state verdict shown before
//! submission.

use serde::Serialize;

use crate::registry::ITEM_COUNT;
use crate::state::CompletionSnapshot;

use super::validation::{validate, Violation};

/// Completion counts for a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed_count: usize,
    pub total_count: usize,
    pub all_complete: bool,
}

impl ProgressSummary {
    /// Completion as a percentage in `0.0..=100.0`
    pub fn percent(&self) -> f64 {
        self.completed_count as f64 * 100.0 / self.total_count as f64
    }
}

/// Count completed items in a snapshot
pub fn summarize(snapshot: &CompletionSnapshot) -> ProgressSummary {
    let completed_count = snapshot.done_count();
    ProgressSummary {
        completed_count,
        total_count: ITEM_COUNT,
        all_complete: completed_count == ITEM_COUNT,
    }
}

/// Overall readiness for submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Everything done and consistent
    Valid,
    /// At least one dependency violation, regardless of completeness
    Warning,
    /// Consistent so far but not everything is done
    Incomplete,
}

impl Verdict {
    /// Derive the verdict from progress and violations
    pub fn derive(summary: &ProgressSummary, violations: &[Violation]) -> Self {
        if !violations.is_empty() {
            Verdict::Warning
        } else if summary.all_complete {
            Verdict::Valid
        } else {
            Verdict::Incomplete
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Valid => "All Items Complete & Valid",
            Verdict::Warning => "Validation Issues Detected",
            Verdict::Incomplete => "Final Validation Check",
        }
    }

    pub fn guidance(&self, total_count: usize) -> String {
        match self {
            Verdict::Valid => "All required items are complete and validated. Ready for prior authorization submission.".to_string(),
            Verdict::Warning => {
                "Some items may be out of sequence or missing dependencies.".to_string()
            }
            Verdict::Incomplete => format!(
                "Complete all {} required items to proceed with validation.",
                total_count
            ),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Warning => write!(f, "warning"),
            Verdict::Incomplete => write!(f, "incomplete"),
        }
    }
}

/// Everything derived from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub completed_count: usize,
    pub total_count: usize,
    pub violations: Vec<String>,
    pub verdict: Verdict,
}

impl ValidationReport {
    /// Whether the snapshot is ready for submission
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }

    /// Completion as a percentage in `0.0..=100.0`
    pub fn percent(&self) -> f64 {
        self.completed_count as f64 * 100.0 / self.total_count as f64
    }
}

/// Summarize, validate and judge a snapshot
pub fn report(snapshot: &CompletionSnapshot) -> ValidationReport {
    let summary = summarize(snapshot);
    let violations = validate(snapshot);
    let verdict = Verdict::derive(&summary, &violations);

    ValidationReport {
        completed_count: summary.completed_count,
        total_count: summary.total_count,
        violations: violations.iter().map(|v| v.message.to_string()).collect(),
        verdict,
    }
}
