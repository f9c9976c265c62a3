//! Dependency validation
//!
//! Pure functions that check a completion snapshot against the rule table.

use serde::Serialize;

use crate::state::CompletionSnapshot;

use super::rules::{DependencyRule, DEPENDENCY_RULES};

/// A fired dependency rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the rule that fired
    pub rule: &'static str,

    /// The item that is done
    pub precondition: &'static str,

    /// Items whose absence caused the rule to fire
    pub missing: Vec<&'static str>,

    /// Human-readable explanation
    pub message: &'static str,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

/// Evaluate every rule against the snapshot, in declaration order.
///
/// Rules are independent: all violations are reported, not just the first.
pub fn evaluate_rules(rules: &[DependencyRule], snapshot: &CompletionSnapshot) -> Vec<Violation> {
    rules
        .iter()
        .filter(|rule| rule.fires(snapshot))
        .map(|rule| Violation {
            rule: rule.name,
            precondition: rule.precondition,
            missing: rule
                .requirement
                .ids()
                .iter()
                .copied()
                .filter(|id| !snapshot.is_done(id))
                .collect(),
            message: rule.message,
        })
        .collect()
}

/// Check a snapshot against the built-in dependency rules
pub fn validate(snapshot: &CompletionSnapshot) -> Vec<Violation> {
    evaluate_rules(DEPENDENCY_RULES, snapshot)
}
