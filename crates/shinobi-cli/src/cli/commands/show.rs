//! `shinobi show <id>` – render the detail view of one character.

use anyhow::{Context, Result};
use shinobi_core::client::{load_character, ApiClient};
use shinobi_core::view::{tab_sections, ProfileHeader, Section, SectionBody};
use std::sync::Arc;

use crate::cli::TabChoice;

pub async fn run_show(client: ApiClient, default_image: &str, id: i64, tab: TabChoice) -> Result<()> {
    let character = load_character(Arc::new(client), id)
        .await
        .with_context(|| format!("could not load character {id}"))?;

    let header = ProfileHeader::new(&character, default_image);
    println!("{} (#{})", header.name, header.id);
    println!("{}", header.main_title);
    println!("  Affiliation: {}", header.affiliation);
    println!("  Rank:        {}", header.rank);
    println!("  Team:        {}", header.team);
    println!("  Image:       {}", header.image);

    for tab in tab.tabs() {
        println!();
        println!("== {} ==", tab.label());
        for section in tab_sections(&character, tab) {
            print_section(&section);
        }
    }
    Ok(())
}

fn print_section(section: &Section) {
    println!("-- {}", section.title);
    match &section.body {
        SectionBody::Text(text) => println!("   {text}"),
        SectionBody::Chips(items) => println!("   {}", items.join(" · ")),
        SectionBody::List(items) => {
            for item in items {
                println!("   - {item}");
            }
        }
        SectionBody::Fields(fields) => {
            let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (label, value) in fields {
                println!("   {:<width$}  {}", label, value, width = width);
            }
        }
        SectionBody::Milestones(ms) => {
            for m in ms {
                println!("   * {}: {}", m.title, m.subtitle);
            }
        }
        SectionBody::Empty(placeholder) => println!("   {placeholder}"),
    }
}
