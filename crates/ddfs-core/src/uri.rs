//! URI normalization.
//!
//! | Input scheme      | Normalized form                           |
//! |-------------------|-------------------------------------------|
//! | (none)            | `file`, path unchanged                    |
//! | `dir`, `disco`    | `http`, authority port = master port      |
//! | anything else     | unchanged                                 |

use ddfs_types::{Authority, Config, Uri};

/// Rewrite `uri` into a form that can be dereferenced directly.
///
/// Pure and idempotent. Already concrete addresses (`http`, `https`, `tag`,
/// `file`, ...) are returned as they are.
pub fn normalize(config: &Config, uri: &Uri) -> Uri {
    match uri.scheme() {
        None => Uri { scheme: Some("file".to_string()), ..uri.clone() },
        Some("dir" | "disco") => Uri {
            scheme: Some("http".to_string()),
            authority: uri
                .authority
                .as_ref()
                .map(|a| Authority::new(a.host.clone(), Some(config.master_port))),
            path: uri.path.clone(),
        },
        Some(_) => uri.clone(),
    }
}

pub fn is_tag_uri(uri: &Uri) -> bool {
    uri.scheme() == Some("tag")
}

/// Name of the tag a `tag://` URI points at.
///
/// # Panics
///
/// Panics if `uri` is not a tag URI or has no name. Check with
/// [`is_tag_uri`] first.
pub fn tag_name_of(uri: &Uri) -> &str {
    assert!(is_tag_uri(uri), "not a tag URI: {}", uri);
    assert!(!uri.path.is_empty(), "tag URI without a name: {:?}", uri);
    &uri.path
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::new("master", 8990)
    }

    fn uri(s: &str) -> Uri {
        Uri::parse(s).unwrap()
    }

    #[test]
    fn test_bare_path_becomes_file() {
        let normalized = normalize(&cfg(), &uri("/data/x"));
        assert_eq!(normalized.scheme(), Some("file"));
        assert_eq!(normalized.authority, None);
        assert_eq!(normalized.path, "/data/x");
        assert_eq!(normalized.to_string(), "file:///data/x");

        let relative = normalize(&cfg(), &uri("rel/path"));
        assert_eq!(relative.to_string(), "file:rel/path");
        assert_eq!(uri(&relative.to_string()), relative);
    }

    #[test]
    fn test_node_relative_schemes_use_master_port() {
        for raw in ["dir://node1/ddfs/vol0/x", "disco://node1/ddfs/vol0/x", "disco://node1:1234/ddfs/vol0/x"] {
            let normalized = normalize(&cfg(), &uri(raw));
            assert_eq!(normalized.scheme(), Some("http"), "{}", raw);
            assert_eq!(normalized.host(), Some("node1"), "{}", raw);
            assert_eq!(normalized.port(), Some(8990), "{}", raw);
            assert_eq!(normalized.to_string(), "http://node1:8990/ddfs/vol0/x");
        }
    }

    #[test]
    fn test_node_relative_without_authority_stays_without() {
        let raw = Uri { scheme: Some("dir".to_string()), authority: None, path: "/x".to_string() };
        let normalized = normalize(&cfg(), &raw);
        assert_eq!(normalized.scheme(), Some("http"));
        assert_eq!(normalized.authority, None);
        assert_eq!(normalized.path, "/x");
    }

    #[test]
    fn test_concrete_schemes_unchanged() {
        for raw in ["http://a:81/1", "https://b/2", "tag://data:chekhov", "file:///tmp/z"] {
            let u = uri(raw);
            assert_eq!(normalize(&cfg(), &u), u, "{}", raw);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["/data/x", "rel/path", "dir://n/x", "disco://n:1/x", "http://a/1", "tag://t"] {
            let once = normalize(&cfg(), &uri(raw));
            assert_eq!(normalize(&cfg(), &once), once, "{}", raw);
        }
    }

    #[test]
    fn test_tag_name_of() {
        let u = uri("tag://data:chekhov");
        assert!(is_tag_uri(&u));
        assert_eq!(tag_name_of(&u), "data:chekhov");
        assert!(!is_tag_uri(&uri("http://a/1")));
    }

    #[test]
    #[should_panic(expected = "not a tag URI")]
    fn test_tag_name_of_rejects_other_schemes() {
        tag_name_of(&uri("http://a/1"));
    }
}
