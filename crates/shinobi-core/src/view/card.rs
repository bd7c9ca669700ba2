//! Listing card for one character.

use super::detail::primary_image;
use crate::model::Character;

/// Team line for characters without a team.
pub const NO_TEAM: &str = "No team";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard<'a> {
    pub id: i64,
    pub name: &'a str,
    pub image: &'a str,
    pub team: &'a str,
}

impl<'a> CharacterCard<'a> {
    pub fn new(c: &'a Character, default_image: &'a str) -> Self {
        Self {
            id: c.id,
            name: &c.name,
            image: primary_image(c, default_image),
            team: c.teams().first().map(String::as_str).unwrap_or(NO_TEAM),
        }
    }
}
