//! Blob and tag addresses.
//!
//! DDFS hands out addresses in several schemes: bare local paths, node-relative
//! `dir://` and `disco://` URIs, concrete `http(s)://` URLs and `tag://` names.
//! [`Uri`] keeps the pieces apart so they can be rewritten before use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::{Position, Url};

use crate::error::DdfsError;

/// Host and optional port of a URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Authority {
    pub host: String,
    pub port: Option<u16>,
}

impl Authority {
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Self { host: host.into(), port }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

/// A parsed address.
///
/// `path` holds everything after the authority, query string included.
/// For `tag` URIs it holds the tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri {
    pub scheme: Option<String>,
    pub authority: Option<Authority>,
    pub path: String,
}

impl Uri {
    /// Parse an address string.
    ///
    /// Schemes are lowercased. `tag:` URIs are opaque: whatever follows
    /// `tag://` (or `tag:`) is the name, colons included. Other URIs whose
    /// scheme is not followed by `/` (`file:rel/path`, `foo:bar`) keep the
    /// rest as their path and have no authority.
    pub fn parse(raw: &str) -> Result<Self, DdfsError> {
        match split_scheme(raw) {
            None => parse_local_path(raw),
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("tag") => {
                let name = rest.strip_prefix("//").unwrap_or(rest);
                if name.is_empty() {
                    return Err(DdfsError::invalid_uri(raw, "tag URI has no name"));
                }
                Ok(Self { scheme: Some("tag".to_string()), authority: None, path: name.to_string() })
            },
            Some((scheme, rest)) if !rest.starts_with('/') => parse_opaque(raw, scheme, rest),
            Some(_) => parse_with_url(raw),
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.authority.as_ref().map(|a| a.host.as_str())
    }

    pub fn port(&self) -> Option<u16> {
        self.authority.as_ref().and_then(|a| a.port)
    }
}

/// `scheme ":"` where scheme is `ALPHA *(ALPHA / DIGIT / "+" / "-" / ".")`.
fn split_scheme(raw: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = raw.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, rest))
}

fn parse_local_path(raw: &str) -> Result<Uri, DdfsError> {
    if raw.is_empty() {
        return Err(DdfsError::invalid_uri(raw, "empty URI"));
    }
    if let Some(c) = raw.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(DdfsError::invalid_uri(raw, format!("invalid character {:?} in path", c)));
    }
    Ok(Uri { scheme: None, authority: None, path: raw.to_string() })
}

/// `scheme:path` with no `//` authority part, e.g. `file:rel/path`.
fn parse_opaque(raw: &str, scheme: &str, path: &str) -> Result<Uri, DdfsError> {
    if path.is_empty() {
        return Err(DdfsError::invalid_uri(raw, "empty path after scheme"));
    }
    if let Some(c) = path.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(DdfsError::invalid_uri(raw, format!("invalid character {:?} in path", c)));
    }
    Ok(Uri { scheme: Some(scheme.to_ascii_lowercase()), authority: None, path: path.to_string() })
}

fn parse_with_url(raw: &str) -> Result<Uri, DdfsError> {
    let url = Url::parse(raw).map_err(|e| DdfsError::invalid_uri(raw, e.to_string()))?;
    let authority = url
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| Authority::new(host, url.port()));
    Ok(Uri {
        scheme: Some(url.scheme().to_string()),
        authority,
        path: url[Position::BeforePath..Position::AfterQuery].to_string(),
    })
}

impl FromStr for Uri {
    type Err = DdfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = DdfsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.to_string()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(scheme) = &self.scheme else {
            return f.write_str(&self.path);
        };
        match &self.authority {
            Some(authority) => write!(f, "{}://{}{}", scheme, authority, self.path),
            None if scheme == "tag" || self.path.starts_with('/') => {
                write!(f, "{}://{}", scheme, self.path)
            },
            None => write!(f, "{}:{}", scheme, self.path),
        }
    }
}
