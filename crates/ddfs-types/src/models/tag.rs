//! Tags and their replica groups.

use serde::{Deserialize, Serialize};

use super::uri::Uri;

/// Ordered, non-empty list of replicas of one blob. Index 0 is preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Uri>", into = "Vec<Uri>")]
pub struct BlobSet(Vec<Uri>);

impl BlobSet {
    /// Returns `None` for an empty replica list.
    pub fn new(replicas: Vec<Uri>) -> Option<Self> {
        if replicas.is_empty() {
            None
        } else {
            Some(Self(replicas))
        }
    }

    pub fn replicas(&self) -> &[Uri] {
        &self.0
    }

    pub fn preferred(&self) -> &Uri {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Uri> {
        self.0.iter()
    }
}

impl TryFrom<Vec<Uri>> for BlobSet {
    type Error = String;

    fn try_from(replicas: Vec<Uri>) -> Result<Self, Self::Error> {
        Self::new(replicas).ok_or_else(|| "blob set must contain at least one replica".to_string())
    }
}

impl From<BlobSet> for Vec<Uri> {
    fn from(set: BlobSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a BlobSet {
    type Item = &'a Uri;
    type IntoIter = std::slice::Iter<'a, Uri>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A named, versioned pointer to groups of replicated blobs.
///
/// `replica_groups` order is meaningful: later groups are other blobs (or
/// older versions) of the same tag, not load-balancing alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    /// Opaque timestamp token as sent by the master
    pub last_modified: String,
    /// Always empty when produced by the decoder
    pub attributes: Vec<(String, String)>,
    pub replica_groups: Vec<BlobSet>,
}

impl Tag {
    pub fn new(
        id: impl Into<String>,
        last_modified: impl Into<String>,
        replica_groups: Vec<BlobSet>,
    ) -> Self {
        Self {
            id: id.into(),
            last_modified: last_modified.into(),
            attributes: Vec::new(),
            replica_groups,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_blob_set_rejects_empty() {
        assert!(BlobSet::new(Vec::new()).is_none());
        assert!(serde_json::from_str::<BlobSet>("[]").is_err());
    }

    #[test]
    fn test_blob_set_keeps_order() {
        let set = BlobSet::new(vec![uri("http://a/1"), uri("http://b/1")]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.preferred().to_string(), "http://a/1");
        let rendered: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["http://a/1", "http://b/1"]);
    }

    #[test]
    fn test_tag_serializes_uris_as_strings() {
        let set = BlobSet::new(vec![uri("disco://node1/ddfs/blob")]).unwrap();
        let tag = Tag::new("t1", "now", vec![set]);
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json["replica_groups"][0][0], "disco://node1/ddfs/blob");
        assert_eq!(json["attributes"], serde_json::json!([]));
    }
}
