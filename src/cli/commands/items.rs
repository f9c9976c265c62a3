//! Items command - List the tracked items

use crate::cli::output::format_items;
use crate::errors::Result;
use crate::registry::ITEMS;

use super::to_json;

/// Print the item registry
pub async fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(&ITEMS)?);
    } else {
        print!("{}", format_items(ITEMS));
    }
    Ok(())
}
