//! Text rendering for CLI output

use std::fmt::Write;

use crate::dashboard::DashboardState;
use crate::domain::{DependencyRule, Requirement, ValidationReport};
use crate::schemas::{Item, CATEGORIES};

/// Render the registry grouped by category
pub fn format_items(items: &[Item]) -> String {
    let mut out = String::new();
    for category in CATEGORIES {
        let in_category: Vec<&Item> = items.iter().filter(|i| i.category == *category).collect();
        if in_category.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}:", category);
        for item in in_category {
            let marker = if item.requestable { " [requestable]" } else { "" };
            let _ = writeln!(out, "  {:<20} {}{}", item.id, item.label, marker);
        }
    }
    out
}

/// Render the dependency rule table
pub fn format_rules(rules: &[DependencyRule]) -> String {
    let mut out = String::new();
    for rule in rules {
        let requirement = match rule.requirement {
            Requirement::Item(id) => id.to_string(),
            Requirement::AnyOf(ids) => ids.join(" or "),
        };
        let _ = writeln!(out, "{}: {} requires {}", rule.name, rule.precondition, requirement);
    }
    out
}

/// Render a validation report
pub fn format_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Progress: {} of {} completed ({:.0}%)",
        report.completed_count,
        report.total_count,
        report.percent()
    );
    let _ = writeln!(out, "Verdict: {} - {}", report.verdict, report.verdict.headline());
    let _ = writeln!(out, "{}", report.verdict.guidance(report.total_count));
    if !report.violations.is_empty() {
        let _ = writeln!(out, "Issues that need attention:");
        for violation in &report.violations {
            let _ = writeln!(out, "  - {}", violation);
        }
    }
    out
}

/// Render the checklist with completion and request markers
pub fn format_state(state: &DashboardState) -> String {
    let mut out = String::new();
    for (item, done) in state.snapshot.iter() {
        let check = if done { "[x]" } else { "[ ]" };
        let requested = if state.requested_ids.contains(&item.id) {
            " (requested)"
        } else {
            ""
        };
        let _ = writeln!(out, "{} {:<20} {}{}", check, item.id, item.label, requested);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{report, DEPENDENCY_RULES};
    use crate::registry::{CONSENT, ITEMS, MRI_SCAN, SURGERY_DATE};
    use crate::state::CompletionSnapshot;

    #[test]
    fn test_format_items_groups_by_category() {
        let text = format_items(ITEMS);
        let forms = text.find("forms:").unwrap();
        let medical = text.find("medical:").unwrap();
        assert!(forms < medical);
        assert!(text.contains("mri-scan"));
        assert!(text.contains("MRI scan [requestable]"));
        assert!(!text.contains("Consent form [requestable]"));
    }

    #[test]
    fn test_format_rules_shows_disjunction() {
        let text = format_rules(DEPENDENCY_RULES);
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("icd-codes requires mri-scan or pt-evidence"));
    }

    #[test]
    fn test_format_report_warning() {
        let report = report(&CompletionSnapshot::with_done([SURGERY_DATE]).unwrap());
        let text = format_report(&report);

        assert!(text.starts_with("Progress: 1 of 10 completed (10%)"));
        assert!(text.contains("Verdict: warning - Validation Issues Detected"));
        assert!(text.contains("Issues that need attention:"));
        assert_eq!(text.matches("  - ").count(), 4);
    }

    #[test]
    fn test_format_report_incomplete_has_no_issue_list() {
        let text = format_report(&report(&CompletionSnapshot::empty()));
        assert!(text.contains("Verdict: incomplete"));
        assert!(text.contains("Complete all 10 required items"));
        assert!(!text.contains("Issues that need attention"));
    }

    #[test]
    fn test_format_state_marks_done_and_requested() {
        let state = DashboardState {
            snapshot: CompletionSnapshot::with_done([CONSENT]).unwrap(),
            requested_ids: vec![MRI_SCAN],
        };
        let text = format_state(&state);

        assert!(text.lines().any(|l| l.starts_with("[x] consent")));
        assert!(text.lines().any(|l| l.starts_with("[ ] mri-scan") && l.ends_with("(requested)")));
        assert_eq!(text.lines().count(), ITEMS.len());
    }
}
