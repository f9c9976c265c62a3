//! Rules command - List the dependency rules

use crate::cli::output::format_rules;
use crate::domain::DEPENDENCY_RULES;
use crate::errors::Result;

use super::to_json;

/// Print the dependency rule table
pub async fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(&DEPENDENCY_RULES)?);
    } else {
        print!("{}", format_rules(DEPENDENCY_RULES));
    }
    Ok(())
}
