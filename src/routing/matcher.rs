//! Route pattern parsing and path matching.
//!
//! # Responsibilities
//! - Parse route patterns (literal paths, catch-all captures)
//! - Match a request path against a compiled pattern
//! - Capture the unmatched remainder for catch-all routes
//!
//! # Design Decisions
//! - Literal matching is exact by default; case and trailing slash
//!   relaxations are opt-in through [`MatchOptions`]
//! - The only dynamic pattern is `/:name(.*)`, which matches everything
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

use crate::config::RouterConfig;

/// Parameters captured while matching.
pub type Params = BTreeMap<String, String>;

/// Errors produced when a route pattern cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern {0:?} has an empty catch-all parameter name")]
    EmptyParam(String),

    #[error("pattern {0:?} uses unsupported syntax")]
    Unsupported(String),
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches one exact path.
    Literal(String),
    /// Matches any path, capturing it under `param`.
    CatchAll { param: String },
}

impl RoutePattern {
    /// Parse a pattern string such as `/dashboard` or `/:catchAll(.*)`.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        if let Some(rest) = raw.strip_prefix("/:") {
            let param = rest
                .strip_suffix("(.*)")
                .ok_or_else(|| PatternError::Unsupported(raw.to_string()))?;
            if param.is_empty() {
                return Err(PatternError::EmptyParam(raw.to_string()));
            }
            if !param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(PatternError::Unsupported(raw.to_string()));
            }
            return Ok(RoutePattern::CatchAll {
                param: param.to_string(),
            });
        }

        let dynamic_segment = raw.split('/').any(|segment| segment.starts_with(':'));
        if dynamic_segment || raw.contains(['*', '(', ')', '?', '#']) {
            return Err(PatternError::Unsupported(raw.to_string()));
        }

        // Locations are matched decoded, so literals are stored decoded too.
        let decoded = percent_decode_str(raw).decode_utf8_lossy().into_owned();
        Ok(RoutePattern::Literal(decoded))
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, RoutePattern::CatchAll { .. })
    }
}

/// Options controlling literal path comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare case-sensitively.
    pub sensitive: bool,
    /// Treat a trailing slash as significant.
    pub strict: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            sensitive: true,
            strict: true,
        }
    }
}

impl From<&RouterConfig> for MatchOptions {
    fn from(config: &RouterConfig) -> Self {
        Self {
            sensitive: config.sensitive,
            strict: config.strict,
        }
    }
}

/// Reduce a path to the form literal comparison is performed on.
///
/// Two literal paths collide exactly when their normalized forms are equal.
pub fn normalize_path(path: &str, options: MatchOptions) -> String {
    let trimmed = if !options.strict && path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };

    if options.sensitive {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

/// Trait for matching paths against a compiled pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the captured parameters if the path matches.
    fn matches(&self, path: &str) -> Option<Params>;
}

/// Matches one literal path.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    expected: String,
    options: MatchOptions,
}

impl LiteralMatcher {
    /// Create a new literal matcher.
    /// The path is normalized once so matching only normalizes the input.
    pub fn new(path: impl AsRef<str>, options: MatchOptions) -> Self {
        Self {
            expected: normalize_path(path.as_ref(), options),
            options,
        }
    }
}

impl Matcher for LiteralMatcher {
    fn matches(&self, path: &str) -> Option<Params> {
        (normalize_path(path, self.options) == self.expected).then(Params::new)
    }
}

/// Matches every path.
#[derive(Debug, Clone)]
pub struct CatchAllMatcher {
    param: String,
}

impl CatchAllMatcher {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }
}

impl Matcher for CatchAllMatcher {
    fn matches(&self, path: &str) -> Option<Params> {
        let rest = path.strip_prefix('/').unwrap_or(path);
        let mut params = Params::new();
        params.insert(self.param.clone(), rest.to_string());
        Some(params)
    }
}

/// Build the matcher for a parsed pattern.
pub fn compile(pattern: &RoutePattern, options: MatchOptions) -> Box<dyn Matcher> {
    match pattern {
        RoutePattern::Literal(path) => Box::new(LiteralMatcher::new(path, options)),
        RoutePattern::CatchAll { param } => Box::new(CatchAllMatcher::new(param.clone())),
    }
}
