//! Filter chips over already-accumulated characters.

use std::fmt;
use std::str::FromStr;

use crate::model::Character;

/// One filter chip. Matching is case-insensitive and never fails on
/// missing optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterTag {
    #[default]
    All,
    Team7,
    Akatsuki,
    Kage,
    Jinchuriki,
}

impl FilterTag {
    /// Chips in display order.
    pub const ALL_TAGS: [FilterTag; 5] = [
        FilterTag::All,
        FilterTag::Team7,
        FilterTag::Akatsuki,
        FilterTag::Kage,
        FilterTag::Jinchuriki,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterTag::All => "All",
            FilterTag::Team7 => "Team 7",
            FilterTag::Akatsuki => "Akatsuki",
            FilterTag::Kage => "Kage",
            FilterTag::Jinchuriki => "Jinchuriki",
        }
    }

    pub fn matches(self, c: &Character) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Team7 => {
                let name = c.name.to_lowercase();
                ["naruto", "sasuke", "sakura"]
                    .iter()
                    .any(|n| name.contains(n))
            }
            FilterTag::Akatsuki => any_contains(c.affiliations(), "akatsuki"),
            FilterTag::Kage => any_contains(c.titles(), "kage"),
            FilterTag::Jinchuriki => c.tailed_beast().is_some(),
        }
    }
}

fn any_contains(items: &[String], needle: &str) -> bool {
    items.iter().any(|s| s.to_lowercase().contains(needle))
}

/// Records matching `tag`, in input order. The input is not modified.
pub fn apply<'a, I>(records: I, tag: FilterTag) -> Vec<&'a Character>
where
    I: IntoIterator<Item = &'a Character>,
{
    records.into_iter().filter(|c| tag.matches(c)).collect()
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown filter '{0}' (expected one of: All, Team 7, Akatsuki, Kage, Jinchuriki)")]
pub struct UnknownFilter(pub String);

impl FromStr for FilterTag {
    type Err = UnknownFilter;

    /// Accepts chip labels case-insensitively, ignoring spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        FilterTag::ALL_TAGS
            .into_iter()
            .find(|t| t.label().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Personal;

    fn with_personal(id: i64, name: &str, personal: Personal) -> Character {
        let mut c = Character::new(id, name);
        c.personal = Some(personal);
        c
    }

    fn roster() -> Vec<Character> {
        vec![
            Character::new(1, "Naruto Uzumaki"),
            with_personal(
                2,
                "Itachi Uchiha",
                Personal {
                    affiliation: Some(vec!["Konohagakure".into(), "AKATSUKI".into()]),
                    ..Personal::default()
                },
            ),
            with_personal(
                3,
                "Gaara",
                Personal {
                    titles: Some(vec!["Fifth Kazekage (Godaime Kazekage)".into()]),
                    tailed_beast: Some("Shukaku".into()),
                    ..Personal::default()
                },
            ),
            Character::new(4, "Rock Lee"),
            with_personal(
                5,
                "Sakura Haruno",
                Personal {
                    team: Some(vec!["Team Kakashi".into()]),
                    ..Personal::default()
                },
            ),
        ]
    }

    fn ids(v: &[&Character]) -> Vec<i64> {
        v.iter().map(|c| c.id).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let r = roster();
        assert_eq!(ids(&apply(&r, FilterTag::All)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn team7_matches_names() {
        let r = roster();
        assert_eq!(ids(&apply(&r, FilterTag::Team7)), vec![1, 5]);
    }

    #[test]
    fn akatsuki_matches_affiliation_case_insensitive() {
        let r = roster();
        assert_eq!(ids(&apply(&r, FilterTag::Akatsuki)), vec![2]);
    }

    #[test]
    fn kage_matches_titles() {
        let r = roster();
        assert_eq!(ids(&apply(&r, FilterTag::Kage)), vec![3]);
    }

    #[test]
    fn jinchuriki_requires_tailed_beast() {
        let r = roster();
        assert_eq!(ids(&apply(&r, FilterTag::Jinchuriki)), vec![3]);

        let empty_beast = with_personal(
            9,
            "Edge",
            Personal {
                tailed_beast: Some(String::new()),
                ..Personal::default()
            },
        );
        assert!(FilterTag::Jinchuriki.matches(&empty_beast));
    }

    #[test]
    fn parse_labels() {
        assert_eq!("All".parse::<FilterTag>().unwrap(), FilterTag::All);
        assert_eq!("Team 7".parse::<FilterTag>().unwrap(), FilterTag::Team7);
        assert_eq!("team7".parse::<FilterTag>().unwrap(), FilterTag::Team7);
        assert_eq!("team-7".parse::<FilterTag>().unwrap(), FilterTag::Team7);
        assert_eq!("jinchuriki".parse::<FilterTag>().unwrap(), FilterTag::Jinchuriki);
        assert!("Sannin".parse::<FilterTag>().is_err());
    }

    #[test]
    fn labels_round_trip_through_display() {
        for tag in FilterTag::ALL_TAGS {
            assert_eq!(tag.to_string().parse::<FilterTag>().unwrap(), tag);
        }
    }
}
