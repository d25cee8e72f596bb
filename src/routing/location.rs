//! Navigation target normalization.
//!
//! Targets may be bare paths, paths with a query string or hash, relative
//! paths, or absolute URLs on the router's own origin. Only the path takes
//! part in route matching.

use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::Url;

use crate::routing::matcher::Params;

/// Errors produced while normalizing a navigation target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("invalid navigation target {target:?}: {reason}")]
    Invalid { target: String, reason: String },

    #[error("navigation target {target:?} leaves origin {origin}")]
    CrossOrigin { target: String, origin: String },
}

/// A resolved location, as observed by views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteLocation {
    /// Percent-decoded path used for matching (no query or hash).
    pub path: String,
    /// Encoded path plus query string and hash.
    pub full_path: String,
    /// Decoded query pairs, in order.
    pub query: Vec<(String, String)>,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
    /// Parameters captured by the matched route.
    pub params: Params,
}

impl RouteLocation {
    /// A location with only a path.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            full_path: path.clone(),
            path,
            ..Self::default()
        }
    }
}

/// Normalize `target` against `base`.
pub fn parse(target: &str, base: &Url) -> Result<RouteLocation, LocationError> {
    let url = base.join(target).map_err(|e| LocationError::Invalid {
        target: target.to_string(),
        reason: e.to_string(),
    })?;

    if url.origin() != base.origin() {
        return Err(LocationError::CrossOrigin {
            target: target.to_string(),
            origin: base.origin().ascii_serialization(),
        });
    }

    let path = percent_decode_str(url.path())
        .decode_utf8_lossy()
        .into_owned();
    let query = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let hash = url.fragment().map(|f| format!("#{f}")).unwrap_or_default();

    let mut full_path = url.path().to_string();
    if let Some(q) = url.query() {
        full_path.push('?');
        full_path.push_str(q);
    }
    full_path.push_str(&hash);

    Ok(RouteLocation {
        path,
        full_path,
        query,
        hash,
        params: Params::new(),
    })
}
