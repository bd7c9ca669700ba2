//! Upstream payload normalization.
//!
//! The upstream service has served two envelope schemas and loosely typed
//! records. Everything here is a pure transformation from `serde_json::Value`
//! into the canonical model; shape irregularities fall back to defaults
//! instead of failing.

mod coerce;
mod envelope;
mod record;

pub use envelope::{normalize_envelope, EnvelopeSchema, DEFAULT_CURRENT_PAGE, DEFAULT_PAGE_SIZE};
pub use record::{normalize_record, normalize_single, unwrap_single};
