//! Lenient JSON body handling shared by the POST endpoints.

use crate::engine::types::SubsectionRequest;
use crate::error::ApiError;
use axum::body::Bytes;
use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

pub const SUBSECTION_FIELDS: [&str; 4] = ["topic", "chapter_title", "section_title", "subsection_title"];

/// Parses the body as a non-empty JSON object. Anything else (empty,
/// malformed, `null`, arrays, scalars, `{}`) is treated as no data at all.
pub fn parse_object(body: &Bytes) -> Option<Object> {
    match serde_json::from_slice::<Value>(body).ok()? {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

/// Reads a field as text. Absent and `null` fields are missing; strings are
/// taken as-is and any other value as its JSON text.
pub fn field_text(data: &Object, name: &str) -> Option<String> {
    match data.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Fails with every missing field listed in `names` order.
pub fn require_fields(data: &Object, names: &[&str]) -> Result<Vec<String>, ApiError> {
    let mut values = Vec::with_capacity(names.len());
    let mut missing = Vec::new();

    for name in names {
        match field_text(data, name) {
            Some(value) => values.push(value),
            None => missing.push(name.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(values)
    } else {
        Err(ApiError::MissingFields(missing))
    }
}

pub fn subsection_request(body: &Bytes) -> Result<SubsectionRequest, ApiError> {
    let data = parse_object(body).ok_or(ApiError::MissingData)?;
    let mut fields = require_fields(&data, &SUBSECTION_FIELDS)?.into_iter();

    let mut next = || fields.next().unwrap_or_default();
    Ok(SubsectionRequest {
        topic: next(),
        chapter_title: next(),
        section_title: next(),
        subsection_title: next(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(s: &str) -> Bytes {
        Bytes::from(s.to_string())
    }

    #[test]
    fn no_data_shapes() {
        for raw in ["", "not json", "null", "[1,2]", "\"topic\"", "{}"] {
            assert!(parse_object(&bytes(raw)).is_none(), "{:?}", raw);
        }
        assert!(parse_object(&bytes(r#"{"topic":"x"}"#)).is_some());
    }

    #[test]
    fn null_and_absent_are_missing() {
        let data = parse_object(&bytes(r#"{"topic": null, "chapter_title": "C", "section_title": 3}"#)).unwrap();
        let err = require_fields(&data, &SUBSECTION_FIELDS).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: topic, subsection_title"
        );
    }

    #[test]
    fn non_string_values_use_json_text() {
        let body = bytes(r#"{"topic": "Python", "chapter_title": 1, "section_title": "", "subsection_title": true}"#);
        let req = subsection_request(&body).unwrap();
        assert_eq!(req.chapter_title, "1");
        assert_eq!(req.section_title, "");
        assert_eq!(req.subsection_title, "true");
    }

    #[test]
    fn empty_body_is_missing_data() {
        assert!(matches!(subsection_request(&bytes("")), Err(ApiError::MissingData)));
    }
}
