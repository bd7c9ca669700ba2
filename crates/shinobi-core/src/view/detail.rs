//! Detail view of a single character: profile header, milestones and tabs.

use std::fmt;
use std::str::FromStr;

use super::format::{FieldValue, NOT_AVAILABLE};
use crate::model::{Character, Rank};

/// Subtitle when a character has no titles at all.
pub const DEFAULT_MAIN_TITLE: &str = "Ninja";

/// Last entry of the ninja rank mapping, in upstream order.
pub fn primary_rank(rank: &Rank) -> Option<&str> {
    rank.ninja_rank.values().last().map(String::as_str)
}

/// First title mentioning "kage" (case-insensitive), else the first title,
/// else [`DEFAULT_MAIN_TITLE`].
pub fn main_title(c: &Character) -> &str {
    let titles = c.titles();
    titles
        .iter()
        .find(|t| t.to_lowercase().contains("kage"))
        .or_else(|| titles.first())
        .map(String::as_str)
        .unwrap_or(DEFAULT_MAIN_TITLE)
}

/// First non-empty image URL, or `default_image`.
pub fn primary_image<'a>(c: &'a Character, default_image: &'a str) -> &'a str {
    c.images
        .iter()
        .find(|img| !img.is_empty())
        .map(String::as_str)
        .unwrap_or(default_image)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeader {
    pub id: i64,
    pub name: String,
    pub main_title: String,
    pub image: String,
    pub affiliation: String,
    pub rank: String,
    pub team: String,
}

impl ProfileHeader {
    pub fn new(c: &Character, default_image: &str) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            main_title: main_title(c).to_string(),
            image: primary_image(c, default_image).to_string(),
            affiliation: c.affiliations().first().format(),
            rank: primary_rank(&c.rank).format(),
            team: c.teams().first().format(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub subtitle: String,
}

/// Key milestones derived from debut, rank and clan.
pub fn milestones(c: &Character) -> Vec<Milestone> {
    let mut out = Vec::new();

    let debut = c.debut.as_ref().format();
    if debut != NOT_AVAILABLE {
        out.push(Milestone {
            title: "First Appearance / Debut",
            subtitle: debut,
        });
    }

    if let Some(rank) = primary_rank(&c.rank).filter(|r| !r.is_empty()) {
        out.push(Milestone {
            title: "Achieved Primary Rank/Title",
            subtitle: rank.to_string(),
        });
    }

    let clan = c.personal.as_ref().and_then(|p| p.clan.as_ref()).format();
    if clan != NOT_AVAILABLE {
        out.push(Milestone {
            title: "Member of Clan",
            subtitle: clan,
        });
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    History,
    Abilities,
    Jutsu,
    Stats,
}

impl DetailTab {
    pub const ALL_TABS: [DetailTab; 4] = [
        DetailTab::History,
        DetailTab::Abilities,
        DetailTab::Jutsu,
        DetailTab::Stats,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::History => "History",
            DetailTab::Abilities => "Abilities",
            DetailTab::Jutsu => "Jutsu",
            DetailTab::Stats => "Stats",
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown tab '{0}' (expected history, abilities, jutsu or stats)")]
pub struct UnknownTab(pub String);

impl FromStr for DetailTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetailTab::ALL_TABS
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Content of one titled block inside a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Text(String),
    /// Short tags rendered side by side.
    Chips(Vec<String>),
    /// Longer entries rendered one per line.
    List(Vec<String>),
    /// Labelled values.
    Fields(Vec<(&'static str, String)>),
    Milestones(Vec<Milestone>),
    /// Placeholder shown instead of an empty list.
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

impl Section {
    fn new(title: &'static str, body: SectionBody) -> Self {
        Self { title, body }
    }
}

fn chips_or(items: Option<&Vec<String>>, empty: &'static str) -> SectionBody {
    match items {
        Some(v) if !v.is_empty() => SectionBody::Chips(v.clone()),
        _ => SectionBody::Empty(empty),
    }
}

fn list_or(items: Option<&Vec<String>>, empty: &'static str) -> SectionBody {
    match items {
        Some(v) if !v.is_empty() => SectionBody::List(v.clone()),
        _ => SectionBody::Empty(empty),
    }
}

/// Sections shown for `tab`.
pub fn tab_sections(c: &Character, tab: DetailTab) -> Vec<Section> {
    let personal = c.personal.as_ref();
    match tab {
        DetailTab::History => {
            let story = match c.info.as_deref() {
                Some(info) if !info.is_empty() => SectionBody::Text(info.to_string()),
                _ => SectionBody::Empty("No origin story available."),
            };
            let ms = milestones(c);
            let ms = if ms.is_empty() {
                SectionBody::Empty("No key milestones available for this character.")
            } else {
                SectionBody::Milestones(ms)
            };
            vec![Section::new("Origin Story", story), Section::new("Key Milestones", ms)]
        }
        DetailTab::Abilities => vec![
            Section::new(
                "Chakra Natures",
                chips_or(c.nature_type.as_ref(), "No chakra natures recorded."),
            ),
            Section::new(
                "Kekkei Genkai",
                chips_or(
                    personal.and_then(|p| p.kekkei_genkai.as_ref()),
                    "No kekkei genkai listed.",
                ),
            ),
            Section::new(
                "Classification",
                chips_or(
                    personal.and_then(|p| p.classification.as_ref()),
                    "No classifications listed.",
                ),
            ),
            Section::new(
                "Tailed Beasts",
                SectionBody::Text(personal.and_then(|p| p.tailed_beast.as_ref()).format()),
            ),
        ],
        DetailTab::Jutsu => vec![
            Section::new(
                "Jutsu List",
                list_or(c.jutsu.as_ref(), "No jutsu available for this character."),
            ),
            Section::new("Tools", list_or(c.tools.as_ref(), "No tools listed.")),
        ],
        DetailTab::Stats => {
            let voices = c.voice_actors.as_ref();
            vec![
                Section::new(
                    "Physical & Personal Stats",
                    SectionBody::Fields(vec![
                        ("ID", c.id.format()),
                        ("Sex", personal.and_then(|p| p.sex.as_ref()).format()),
                        ("Blood Type", personal.and_then(|p| p.blood_type.as_ref()).format()),
                        ("Birthdate", personal.and_then(|p| p.birthdate.as_ref()).format()),
                        ("Registration No.", c.rank.ninja_registration.as_ref().format()),
                        ("Occupation", personal.and_then(|p| p.occupation.as_ref()).format()),
                        ("Affiliation", personal.and_then(|p| p.affiliation.as_ref()).format()),
                        ("Clan", personal.and_then(|p| p.clan.as_ref()).format()),
                        ("Family", c.family.as_ref().format()),
                    ]),
                ),
                Section::new(
                    "Rank & Measurements",
                    SectionBody::Fields(vec![
                        ("Ninja Ranks", c.rank.ninja_rank.format()),
                        ("Age", personal.and_then(|p| p.age.as_ref()).format()),
                        ("Height", personal.and_then(|p| p.height.as_ref()).format()),
                        ("Weight", personal.and_then(|p| p.weight.as_ref()).format()),
                    ]),
                ),
                Section::new(
                    "Vocals",
                    SectionBody::Fields(vec![
                        ("Japanese V.A.", voices.and_then(|v| v.japanese.as_ref()).format()),
                        ("English V.A.", voices.and_then(|v| v.english.as_ref()).format()),
                    ]),
                ),
            ]
        }
    }
}
