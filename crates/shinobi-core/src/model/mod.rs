//! Canonical data model shared by the normalizer, sequencer and views.

mod character;
mod envelope;

pub use character::{Character, Debut, LabelMap, Personal, Rank, VoiceActors};
pub use envelope::PageEnvelope;
