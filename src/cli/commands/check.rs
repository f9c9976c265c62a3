//! Check command - Validate a set of completed items

use crate::cli::output::format_report;
use crate::domain::{self, ValidationReport};
use crate::errors::Result;
use crate::state::CompletionSnapshot;

use super::to_json;

/// Build the report for a set of done item ids.
///
/// # Errors
/// * `UnknownItem` - If any id is not registered
pub fn check(done: &[String]) -> Result<ValidationReport> {
    let snapshot = CompletionSnapshot::with_done(done.iter().map(String::as_str))?;
    Ok(domain::report(&snapshot))
}

/// Print the validation report for the given done items
pub async fn run(done: &[String], json: bool) -> Result<()> {
    let report = check(done)?;
    tracing::debug!(verdict = %report.verdict, violations = report.violations.len(), "checked");

    if json {
        println!("{}", to_json(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Verdict;
    use crate::errors::PriorAuthError;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_check_nothing_done() {
        let report = check(&[]).unwrap();
        assert_eq!(report.verdict, Verdict::Incomplete);
    }

    #[test]
    fn test_check_repeated_id_counts_once() {
        let report = check(&ids(&["consent", "consent", "demographics"])).unwrap();
        assert_eq!(report.completed_count, 2);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_check_unknown_id() {
        let err = check(&ids(&["consent", "unknown-id"])).unwrap_err();
        assert!(matches!(err, PriorAuthError::UnknownItem(ref id) if id == "unknown-id"));
    }

    #[test]
    fn test_check_report_json_shape() {
        let report = check(&ids(&["icd-codes"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        assert_eq!(json["completed_count"], 1);
        assert_eq!(json["total_count"], 10);
        assert_eq!(json["verdict"], "warning");
        assert_eq!(json["violations"].as_array().unwrap().len(), 1);
    }
}
