//! Canonical character record, as handed to presentation code.
//!
//! Every field that downstream code reads unconditionally (`id`, `name`,
//! `images`, `rank`) is non-optional here; the normalizer synthesizes
//! defaults so callers never branch on their absence.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered label -> value mapping (period labels like "Part I", family roles).
///
/// Insertion order is the upstream key order.
pub type LabelMap = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal: Option<Personal>,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<LabelMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jutsu: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature_type: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_actors: Option<VoiceActors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debut: Option<Debut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl Character {
    /// Minimal record with only the required fields set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            images: Vec::new(),
            personal: None,
            rank: Rank::default(),
            family: None,
            jutsu: None,
            tools: None,
            nature_type: None,
            voice_actors: None,
            debut: None,
            info: None,
        }
    }

    /// Affiliations, or an empty slice when `personal` or the list is missing.
    pub fn affiliations(&self) -> &[String] {
        self.personal
            .as_ref()
            .and_then(|p| p.affiliation.as_deref())
            .unwrap_or(&[])
    }

    /// Titles, or an empty slice when `personal` or the list is missing.
    pub fn titles(&self) -> &[String] {
        self.personal
            .as_ref()
            .and_then(|p| p.titles.as_deref())
            .unwrap_or(&[])
    }

    /// Teams, or an empty slice when `personal` or the list is missing.
    pub fn teams(&self) -> &[String] {
        self.personal
            .as_ref()
            .and_then(|p| p.team.as_deref())
            .unwrap_or(&[])
    }

    pub fn tailed_beast(&self) -> Option<&str> {
        self.personal.as_ref()?.tailed_beast.as_deref()
    }
}

/// Personal details bag. All fields optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kekkei_genkai: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailed_beast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<LabelMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<LabelMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<LabelMap>,
}

/// Ninja rank per period plus the registration number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    #[serde(default)]
    pub ninja_rank: LabelMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ninja_registration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceActors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub japanese: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<Vec<String>>,
}

/// First appearance per medium.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debut {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manga: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub novel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ova: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appears_in: Option<String>,
}

impl Debut {
    /// Upstream key spellings, in display order.
    pub const KEYS: [&'static str; 7] =
        ["manga", "anime", "novel", "movie", "game", "ova", "appearsIn"];

    /// `(upstream key, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("manga", self.manga.as_deref()),
            ("anime", self.anime.as_deref()),
            ("novel", self.novel.as_deref()),
            ("movie", self.movie.as_deref()),
            ("game", self.game.as_deref()),
            ("ova", self.ova.as_deref()),
            ("appearsIn", self.appears_in.as_deref()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, v)| v.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_default_to_empty() {
        let c = Character::new(1, "Naruto");
        assert!(c.affiliations().is_empty());
        assert!(c.titles().is_empty());
        assert!(c.teams().is_empty());
        assert!(c.tailed_beast().is_none());
    }

    #[test]
    fn serializes_canonical_field_names() {
        let mut c = Character::new(7, "Kakashi");
        c.nature_type = Some(vec!["Lightning Release".into()]);
        c.rank.ninja_registration = Some("009720".into());
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["natureType"][0], "Lightning Release");
        assert_eq!(v["rank"]["ninjaRegistration"], "009720");
        assert!(v["rank"]["ninjaRank"].as_object().unwrap().is_empty());
        assert!(v.get("personal").is_none());
    }

    #[test]
    fn debut_entries_keep_display_order() {
        let d = Debut {
            anime: Some("Episode 1".into()),
            appears_in: Some("Anime, Manga".into()),
            ..Debut::default()
        };
        let keys: Vec<_> = d
            .entries()
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(keys, vec!["anime", "appearsIn"]);
        assert!(!d.is_empty());
        assert!(Debut::default().is_empty());
    }
}
