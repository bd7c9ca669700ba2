//! `shinobi filters` – print the filter chips.

use anyhow::Result;
use shinobi_core::filter::FilterTag;

pub fn run_filters() -> Result<()> {
    for tag in FilterTag::ALL_TAGS {
        println!("{}", tag.label());
    }
    Ok(())
}
