//! Page envelope normalization through an explicit field-resolution table.

use serde_json::{Map, Value};

use super::coerce::{count_u32, first_of};
use super::record::normalize_record;
use crate::error::ApiError;
use crate::model::PageEnvelope;

pub const DEFAULT_CURRENT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upstream spellings per canonical field, in resolution order (first present wins).
/// Canonical spellings come first wherever they exist so normalization is idempotent.
const RESULTS_KEYS: &[&str] = &["characters", "results"];
const CURRENT_PAGE_KEYS: &[&str] = &["currentPage", "page"];
const PAGE_SIZE_KEYS: &[&str] = &["pageSize", "limit"];
const TOTAL_PAGES_KEYS: &[&str] = &["totalPages"];
const TOTAL_RESULTS_KEYS: &[&str] = &["totalResults", "total", "count"];

/// Known upstream envelope shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeSchema {
    /// `characters`, `page`, `limit`, `total`.
    Legacy,
    /// `results`, `currentPage`, `pageSize`, `totalPages`, `totalResults`.
    Paged,
    /// Neither list key present, or both.
    Unknown,
}

impl EnvelopeSchema {
    pub fn detect(obj: &Map<String, Value>) -> Self {
        match (obj.contains_key("characters"), obj.contains_key("results")) {
            (true, false) => EnvelopeSchema::Legacy,
            (false, true) => EnvelopeSchema::Paged,
            _ => EnvelopeSchema::Unknown,
        }
    }
}

/// Normalizes one raw page payload.
///
/// Records that cannot be normalized (no usable id) are dropped with a
/// warning; only a non-object payload fails.
pub fn normalize_envelope(raw: &Value) -> Result<PageEnvelope, ApiError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ApiError::Malformed("page payload is not a JSON object".to_string()))?;
    let schema = EnvelopeSchema::detect(obj);

    let raw_results: &[Value] = RESULTS_KEYS
        .iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let mut results = Vec::with_capacity(raw_results.len());
    for (index, item) in raw_results.iter().enumerate() {
        match normalize_record(item) {
            Ok(c) => results.push(c),
            Err(e) => tracing::warn!(index, error = %e, "dropping unreadable character record"),
        }
    }

    let current_page = first_of(obj, CURRENT_PAGE_KEYS, count_u32).unwrap_or(DEFAULT_CURRENT_PAGE);
    let limit = first_of(obj, PAGE_SIZE_KEYS, count_u32);
    let total = first_of(obj, TOTAL_RESULTS_KEYS, count_u32);
    let total_pages = first_of(obj, TOTAL_PAGES_KEYS, count_u32)
        .or_else(|| total.map(|t| pages_for(t, limit)))
        .unwrap_or(0);

    tracing::debug!(
        ?schema,
        current_page,
        total_pages,
        records = results.len(),
        "normalized page envelope"
    );

    Ok(PageEnvelope {
        results,
        current_page,
        page_size: limit.unwrap_or(DEFAULT_PAGE_SIZE),
        total_pages,
        total_results: total.unwrap_or(0),
    })
}

/// `ceil(total / limit)`; a missing or zero limit uses [`DEFAULT_PAGE_SIZE`].
fn pages_for(total: u32, limit: Option<u32>) -> u32 {
    let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_SIZE);
    total.div_ceil(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_schema_scenario() {
        let raw = json!({
            "characters": [{"id": "1", "name": "Naruto", "images": []}],
            "page": 1, "limit": 20, "total": 1
        });
        let e = normalize_envelope(&raw).unwrap();
        let expected = json!({
            "results": [{"id": 1, "name": "Naruto", "images": [], "rank": {"ninjaRank": {}}}],
            "currentPage": 1, "pageSize": 20, "totalPages": 1, "totalResults": 1
        });
        assert_eq!(serde_json::to_value(&e).unwrap(), expected);
        assert!(!e.has_next_page());
    }

    #[test]
    fn both_schemas_yield_same_envelope() {
        let legacy = json!({
            "characters": [{"id": 1, "name": "Naruto"}, {"id": 2, "name": "Sasuke"}],
            "page": 2, "limit": 2, "total": 6
        });
        let paged = json!({
            "results": [{"id": 1, "name": "Naruto"}, {"id": 2, "name": "Sasuke"}],
            "currentPage": 2, "pageSize": 2, "totalPages": 3, "totalResults": 6
        });
        assert_eq!(
            EnvelopeSchema::detect(legacy.as_object().unwrap()),
            EnvelopeSchema::Legacy
        );
        assert_eq!(
            EnvelopeSchema::detect(paged.as_object().unwrap()),
            EnvelopeSchema::Paged
        );
        assert_eq!(
            normalize_envelope(&legacy).unwrap(),
            normalize_envelope(&paged).unwrap()
        );
    }

    #[test]
    fn empty_object_gets_all_defaults() {
        let e = normalize_envelope(&json!({})).unwrap();
        assert!(e.results.is_empty());
        assert_eq!(e.current_page, 1);
        assert_eq!(e.page_size, 20);
        assert_eq!(e.total_pages, 0);
        assert_eq!(e.total_results, 0);
        assert!(!e.has_next_page());
    }

    #[test]
    fn total_pages_derived_with_default_limit() {
        let e = normalize_envelope(&json!({"characters": [], "total": 41})).unwrap();
        assert_eq!(e.total_pages, 3);
        assert_eq!(e.page_size, 20);
    }

    #[test]
    fn zero_limit_uses_default_for_derivation() {
        let e = normalize_envelope(&json!({"total": 21, "limit": 0})).unwrap();
        assert_eq!(e.total_pages, 2);
        assert_eq!(e.page_size, 0);
    }

    #[test]
    fn count_is_last_resort_total() {
        let e = normalize_envelope(&json!({"results": [], "count": 45, "pageSize": 10})).unwrap();
        assert_eq!(e.total_results, 45);
        assert_eq!(e.total_pages, 5);
    }

    #[test]
    fn characters_key_wins_over_results() {
        let raw = json!({"characters": [{"id": 1}], "results": [{"id": 2}, {"id": 3}]});
        let e = normalize_envelope(&raw).unwrap();
        assert_eq!(e.results.len(), 1);
        assert_eq!(e.results[0].id, 1);
    }

    #[test]
    fn non_array_characters_falls_through_to_results() {
        let raw = json!({"characters": null, "results": [{"id": 2}]});
        assert_eq!(normalize_envelope(&raw).unwrap().results[0].id, 2);
    }

    #[test]
    fn unreadable_records_are_dropped() {
        let raw = json!({"results": [{"id": 1}, {"name": "no id"}, "junk", {"id": "3"}]});
        let ids: Vec<_> = normalize_envelope(&raw)
            .unwrap()
            .results
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn non_object_payload_is_malformed() {
        assert!(matches!(
            normalize_envelope(&json!([{"id": 1}])),
            Err(ApiError::Malformed(_))
        ));
    }

    #[test]
    fn normalizing_canonical_envelope_is_idempotent() {
        let raw = json!({
            "characters": [{
                "id": "12",
                "name": "Jiraiya",
                "images": ["j.png", 3],
                "personal": {"titles": "Toad Sage", "age": {"Part I": "50"}, "clan": null},
                "rank": {"ninjaRank": {"Part I": "Sannin"}},
                "family": {"godson": "Naruto Uzumaki"},
                "debut": {"manga": "Chapter #90"}
            }],
            "page": "3", "limit": 20, "total": 1431
        });
        let once = normalize_envelope(&raw).unwrap();
        let canonical = serde_json::to_value(&once).unwrap();
        let twice = normalize_envelope(&canonical).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.total_pages, 72);
        assert_eq!(twice.current_page, 3);
    }
}
