//! CLI for the shinobi character catalog.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shinobi_core::client::ApiClient;
use shinobi_core::config;
use shinobi_core::filter::FilterTag;
use shinobi_core::view::{DetailTab, UnknownTab};
use std::fmt;
use std::str::FromStr;

use commands::{run_completions, run_filters, run_list, run_show};

/// Top-level CLI for the shinobi character catalog.
#[derive(Debug, Parser)]
#[command(name = "shinobi")]
#[command(about = "shinobi: browse the ninja character catalog from a terminal", long_about = None)]
pub struct Cli {
    /// API base URL (overrides `base_url` from the config file).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List characters page by page, like scrolling the catalog.
    List {
        /// Filter chip: All, "Team 7", Akatsuki, Kage or Jinchuriki.
        #[arg(long, default_value_t = FilterTag::All, value_name = "TAG")]
        filter: FilterTag,
        /// Stop after N pages (default: load until the last page).
        #[arg(long, value_name = "N")]
        pages: Option<u32>,
    },

    /// Show the detail view of one character.
    Show {
        /// Character identifier.
        id: i64,
        /// Tab to render: history, abilities, jutsu, stats or all.
        #[arg(long, default_value_t = TabChoice::All, value_name = "TAB")]
        tab: TabChoice,
    },

    /// Print the available filter chips.
    Filters,

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

/// `--tab` value: one detail tab or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabChoice {
    All,
    One(DetailTab),
}

impl TabChoice {
    pub fn tabs(self) -> Vec<DetailTab> {
        match self {
            TabChoice::All => DetailTab::ALL_TABS.to_vec(),
            TabChoice::One(tab) => vec![tab],
        }
    }
}

impl fmt::Display for TabChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabChoice::All => f.write_str("all"),
            TabChoice::One(tab) => f.write_str(&tab.label().to_lowercase()),
        }
    }
}

impl FromStr for TabChoice {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TabChoice::All);
        }
        s.parse().map(TabChoice::One)
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Filters => run_filters()?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            command => {
                let mut cfg = config::load_or_init()?;
                if let Some(base_url) = cli.base_url {
                    cfg.base_url = base_url;
                }
                tracing::debug!("loaded config: {:?}", cfg);
                let client = ApiClient::from_config(&cfg)?;
                match command {
                    CliCommand::List { filter, pages } => {
                        run_list(client, cfg.default_image(), filter, pages).await?
                    }
                    CliCommand::Show { id, tab } => {
                        run_show(client, cfg.default_image(), id, tab).await?
                    }
                    CliCommand::Filters | CliCommand::Completions { .. } => {}
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
