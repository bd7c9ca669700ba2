//! Display-ready projections of canonical characters.

mod card;
mod detail;
mod format;

pub use card::{CharacterCard, NO_TEAM};
pub use detail::{
    main_title, milestones, primary_image, primary_rank, tab_sections, DetailTab, Milestone,
    ProfileHeader, Section, SectionBody, UnknownTab, DEFAULT_MAIN_TITLE,
};
pub use format::{display_key, FieldValue, NOT_AVAILABLE};
