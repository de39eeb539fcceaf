//! Tag document decoding.
//!
//! The master serves tags as
//!
//! ```json
//! {"id": "tag://t1", "last-modified": "...", "urls": [["http://a/1", "http://b/1"], ["http://c/2"]]}
//! ```
//!
//! Any other top-level keys are ignored. Attributes are never read from the
//! payload; decoded tags always have an empty attribute list.

use ddfs_types::{BlobSet, DdfsError, Result, Tag, Uri};
use serde_json::{Map, Value};

pub fn decode(value: &Value) -> Result<Tag> {
    let object = value.as_object().ok_or_else(|| {
        DdfsError::unexpected_json(format!("tag: expected object, got {}", kind(value)))
    })?;

    let id = string_field(object, "id")?;
    let last_modified = string_field(object, "last-modified")?;
    let urls = field(object, "urls")?;
    let groups = urls.as_array().ok_or_else(|| {
        DdfsError::unexpected_json(format!("urls: expected array, got {}", kind(urls)))
    })?;

    let replica_groups: Vec<BlobSet> =
        groups.iter().enumerate().map(|(idx, group)| decode_group(idx, group)).collect::<Result<_>>()?;

    Ok(Tag::new(id, last_modified, replica_groups))
}

/// Parse `body` as JSON, then [`decode`] it.
pub fn decode_str(body: &str) -> Result<Tag> {
    let value: Value = serde_json::from_str(body).map_err(|e| DdfsError::from_json_error(&e))?;
    decode(&value)
}

pub fn decode_slice(body: &[u8]) -> Result<Tag> {
    let value: Value = serde_json::from_slice(body).map_err(|e| DdfsError::from_json_error(&e))?;
    decode(&value)
}

fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    object.get(name).ok_or_else(|| DdfsError::unexpected_json(format!("missing field {:?}", name)))
}

fn string_field(object: &Map<String, Value>, name: &str) -> Result<String> {
    let value = field(object, name)?;
    value.as_str().map(str::to_string).ok_or_else(|| {
        DdfsError::unexpected_json(format!("{}: expected string, got {}", name, kind(value)))
    })
}

fn decode_group(idx: usize, group: &Value) -> Result<BlobSet> {
    let entries = group.as_array().ok_or_else(|| {
        DdfsError::unexpected_json(format!("urls[{}]: expected array, got {}", idx, kind(group)))
    })?;

    let replicas = entries
        .iter()
        .enumerate()
        .map(|(pos, entry)| {
            let raw = entry.as_str().ok_or_else(|| {
                DdfsError::unexpected_json(format!(
                    "urls[{}][{}]: expected string, got {}",
                    idx,
                    pos,
                    kind(entry)
                ))
            })?;
            Uri::parse(raw)
        })
        .collect::<Result<Vec<_>>>()?;

    BlobSet::new(replicas).ok_or_else(|| {
        DdfsError::unexpected_json(format!("urls[{}]: replica group is empty", idx))
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: DdfsError) -> String {
        match err {
            DdfsError::UnexpectedJson { message } => message,
            other => panic!("expected UnexpectedJson, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_tag() {
        let tag = decode(&json!({
            "id": "t1",
            "last-modified": "now",
            "urls": [["http://a/1", "http://b/1"], ["http://c/2"]]
        }))
        .unwrap();

        assert_eq!(tag.id, "t1");
        assert_eq!(tag.last_modified, "now");
        assert!(tag.attributes.is_empty());
        assert_eq!(tag.replica_groups.len(), 2);
        let first: Vec<String> = tag.replica_groups[0].iter().map(ToString::to_string).collect();
        assert_eq!(first, ["http://a/1", "http://b/1"]);
        assert_eq!(tag.replica_groups[1].len(), 1);
    }

    #[test]
    fn test_attributes_in_payload_are_ignored() {
        let tag = decode(&json!({
            "id": "t1",
            "last-modified": "now",
            "urls": [],
            "user-data": {"owner": "me"},
            "attributes": {"k": "v"}
        }))
        .unwrap();
        assert!(tag.attributes.is_empty());
        assert!(tag.replica_groups.is_empty());
    }

    #[test]
    fn test_missing_urls() {
        let err = decode(&json!({"id": "t1", "last-modified": "now"})).unwrap_err();
        assert!(message(err).contains("urls"));
    }

    #[test]
    fn test_mistyped_fields() {
        let cases = [
            (json!(["not", "an", "object"]), "tag"),
            (json!({"id": 7, "last-modified": "now", "urls": []}), "id"),
            (json!({"id": "t", "last-modified": null, "urls": []}), "last-modified"),
            (json!({"id": "t", "last-modified": "now", "urls": "http://a/1"}), "urls"),
            (json!({"id": "t", "last-modified": "now", "urls": ["http://a/1"]}), "urls[0]"),
            (json!({"id": "t", "last-modified": "now", "urls": [["http://a/1", 3]]}), "urls[0][1]"),
            (json!({"id": "t", "last-modified": "now", "urls": [["http://a/1"], []]}), "urls[1]"),
        ];

        for (value, expected) in cases {
            let msg = message(decode(&value).unwrap_err());
            assert!(msg.contains(expected), "{:?} should mention {}: {}", value, expected, msg);
        }
    }

    #[test]
    fn test_malformed_uri() {
        let err = decode(&json!({
            "id": "t1",
            "last-modified": "now",
            "urls": [["http://a/1"], ["http://[broken/2"]]
        }))
        .unwrap_err();
        match err {
            DdfsError::InvalidUri { uri, .. } => assert_eq!(uri, "http://[broken/2"),
            other => panic!("expected InvalidUri, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_text() {
        assert!(matches!(decode_str("<html>not found</html>"), Err(DdfsError::InvalidJson { .. })));
        assert!(matches!(decode_slice(b"{\"id\":"), Err(DdfsError::InvalidJson { .. })));
    }
}
