//! Per-record normalization into [`Character`].

use serde_json::{Map, Value};

use super::coerce::{field, id, label_map, text, text_list};
use crate::error::ApiError;
use crate::model::{Character, Debut, Personal, Rank, VoiceActors};

/// Wrapper key used by the single-character endpoint.
const SINGLE_WRAPPER_KEY: &str = "character";

/// Normalizes one raw record.
///
/// Fails only when the record is not an object or its id cannot be read as
/// an integer; every other field falls back to a default.
pub fn normalize_record(raw: &Value) -> Result<Character, ApiError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ApiError::Malformed(format!("expected character object, got {}", kind(raw))))?;
    let id = field(obj, "id", id)
        .ok_or_else(|| ApiError::Malformed("character record has no integer id".to_string()))?;

    Ok(Character {
        id,
        name: field(obj, "name", text).unwrap_or_default(),
        images: images(obj),
        personal: field(obj, "personal", personal),
        rank: field(obj, "rank", rank).unwrap_or_default(),
        family: field(obj, "family", label_map),
        jutsu: field(obj, "jutsu", text_list),
        tools: field(obj, "tools", text_list),
        nature_type: field(obj, "natureType", text_list),
        voice_actors: field(obj, "voiceActors", voice_actors),
        debut: field(obj, "debut", debut),
        info: field(obj, "info", text),
    })
}

/// Unwraps `{ "character": {...} }` to the inner record; bare records pass through.
pub fn unwrap_single(raw: &Value) -> &Value {
    match raw.get(SINGLE_WRAPPER_KEY) {
        Some(inner) if inner.is_object() => inner,
        _ => raw,
    }
}

/// Normalizes a single-character response in either wrapped or bare form.
pub fn normalize_single(raw: &Value) -> Result<Character, ApiError> {
    normalize_record(unwrap_single(raw))
}

/// Only arrays count; a lone string is not promoted, matching the listing view.
fn images(obj: &Map<String, Value>) -> Vec<String> {
    match obj.get("images") {
        Some(Value::Array(items)) => items.iter().filter_map(text).collect(),
        _ => Vec::new(),
    }
}

fn personal(v: &Value) -> Option<Personal> {
    let p = v.as_object()?;
    Some(Personal {
        affiliation: field(p, "affiliation", text_list),
        team: field(p, "team", text_list),
        titles: field(p, "titles", text_list),
        classification: field(p, "classification", text_list),
        occupation: field(p, "occupation", text_list),
        kekkei_genkai: field(p, "kekkeiGenkai", text_list),
        clan: field(p, "clan", text),
        tailed_beast: field(p, "tailedBeast", text),
        sex: field(p, "sex", text),
        blood_type: field(p, "bloodType", text),
        birthdate: field(p, "birthdate", text),
        age: field(p, "age", label_map),
        height: field(p, "height", label_map),
        weight: field(p, "weight", label_map),
    })
}

fn rank(v: &Value) -> Option<Rank> {
    let r = v.as_object()?;
    Some(Rank {
        ninja_rank: field(r, "ninjaRank", label_map).unwrap_or_default(),
        ninja_registration: field(r, "ninjaRegistration", text),
    })
}

fn voice_actors(v: &Value) -> Option<VoiceActors> {
    let va = v.as_object()?;
    Some(VoiceActors {
        japanese: field(va, "japanese", text_list),
        english: field(va, "english", text_list),
    })
}

fn debut(v: &Value) -> Option<Debut> {
    let d = v.as_object()?;
    let [manga, anime, novel, movie, game, ova, appears_in] =
        Debut::KEYS.map(|key| field(d, key, text));
    Some(Debut {
        manga,
        anime,
        novel,
        movie,
        game,
        ova,
        appears_in,
    })
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
