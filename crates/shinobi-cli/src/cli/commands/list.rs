//! `shinobi list` – scroll the catalog page by page and print filtered cards.

use anyhow::Result;
use shinobi_core::client::ApiClient;
use shinobi_core::error::ApiError;
use shinobi_core::filter::FilterTag;
use shinobi_core::sequencer::{Completion, ListingSession};
use shinobi_core::view::CharacterCard;
use std::sync::Arc;

pub async fn run_list(
    client: ApiClient,
    default_image: &str,
    filter: FilterTag,
    max_pages: Option<u32>,
) -> Result<()> {
    let mut session = ListingSession::new(Arc::new(client));

    // Ctrl-C stops waiting at once; a blocking request still in flight
    // finishes in the background and its result is discarded.
    let failure = tokio::select! {
        failure = scroll(&mut session, max_pages) => Some(failure),
        _ = tokio::signal::ctrl_c() => None,
    };
    let failure = match failure {
        Some(failure) => failure,
        None => {
            tracing::info!("interrupted; closing listing session");
            session.close();
            None
        }
    };

    let chips: Vec<String> = FilterTag::ALL_TAGS
        .iter()
        .map(|t| {
            if *t == filter {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect();
    println!("{}", chips.join("  "));
    println!();

    let shown = session.filtered(filter);
    if shown.is_empty() {
        println!("No characters found for the selected filter.");
    } else {
        println!("{:<6} {:<32} {}", "ID", "NAME", "TEAM");
        for c in &shown {
            let card = CharacterCard::new(c, default_image);
            println!("{:<6} {:<32} {}", card.id, card.name, card.team);
            tracing::trace!(id = card.id, image = card.image, "card");
        }
    }
    println!();

    let paginator = session.paginator();
    tracing::info!(
        pages = paginator.pages().len(),
        shown = shown.len(),
        "listing finished"
    );

    if let Some(err) = failure {
        return Err(anyhow::Error::new(err).context(format!(
            "loading page {} of the character list",
            paginator.current_request_page()
        )));
    }
    if paginator.is_closed() {
        // Exit through the error path so the process does not wait on the
        // abandoned blocking request at runtime shutdown.
        anyhow::bail!("interrupted");
    }
    if paginator.has_more() {
        println!("More characters available; pass a larger --pages to keep scrolling.");
    } else {
        println!("End of the character list.");
    }
    Ok(())
}

/// Loads pages until the list ends, `max_pages` were applied, or one fails.
/// Each applied page stands for the sentinel scrolling back into view.
async fn scroll(session: &mut ListingSession<ApiClient>, max_pages: Option<u32>) -> Option<ApiError> {
    let mut loaded = 0u32;
    let mut outcome = session.start().await;
    loop {
        match outcome {
            Ok(Some(Completion::Applied)) => loaded += 1,
            Ok(_) => return None,
            Err(e) => return Some(e),
        }
        if max_pages.is_some_and(|n| loaded >= n) {
            return None;
        }
        outcome = session.on_viewport_visible().await;
    }
}
