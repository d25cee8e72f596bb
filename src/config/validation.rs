//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce route table ordering (one catch-all, declared last)
//! - Detect conflicting literal paths and route names
//! - Check the mount selector and base URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Backend credentials are opaque and never checked here

use std::collections::{HashMap, HashSet};

use url::Url;

use crate::config::schema::{AppConfig, RouteConfig};
use crate::routing::matcher::{normalize_path, MatchOptions, PatternError, RoutePattern};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("route table is empty")]
    EmptyRouteTable,

    #[error("route #{index} ({path:?}): {source}")]
    InvalidPattern {
        index: usize,
        path: String,
        source: PatternError,
    },

    #[error("route table has no catch-all entry")]
    MissingCatchAll,

    #[error("route #{index} ({path:?}) is a second catch-all entry")]
    MultipleCatchAll { index: usize, path: String },

    #[error("catch-all route #{index} ({path:?}) must be declared last")]
    CatchAllNotLast { index: usize, path: String },

    #[error("route #{index} ({path:?}) duplicates route #{first}")]
    DuplicatePath {
        index: usize,
        first: usize,
        path: String,
    },

    #[error("route name {0:?} is used more than once")]
    DuplicateName(String),

    #[error("route #{index} ({path:?}) has an empty view name")]
    EmptyView { index: usize, path: String },

    #[error("mount selector {0:?} must have the form '#id'")]
    InvalidMountSelector(String),

    #[error("base url {url:?} is not an absolute URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("base url {0:?} must be a bare origin with path '/'")]
    BaseUrlNotOrigin(String),
}

/// Validate the whole configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(route_errors) = validate_routes(&config.routes, MatchOptions::from(&config.router)) {
        errors.extend(route_errors);
    }

    if mount_id(&config.mount.selector).is_none() {
        errors.push(ValidationError::InvalidMountSelector(
            config.mount.selector.clone(),
        ));
    }

    match Url::parse(&config.router.base_url) {
        Ok(url) if url.cannot_be_a_base() => errors.push(ValidationError::InvalidBaseUrl {
            url: config.router.base_url.clone(),
            reason: "cannot be a base".to_string(),
        }),
        Ok(url) if !is_origin(&url) => errors.push(ValidationError::BaseUrlNotOrigin(
            config.router.base_url.clone(),
        )),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.router.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate an ordered route table.
pub fn validate_routes(
    routes: &[RouteConfig],
    options: MatchOptions,
) -> Result<(), Vec<ValidationError>> {
    if routes.is_empty() {
        return Err(vec![ValidationError::EmptyRouteTable]);
    }

    let mut errors = Vec::new();
    let mut catch_alls = Vec::new();
    let mut literal_paths: HashMap<String, usize> = HashMap::new();
    let mut names = HashSet::new();

    for (index, route) in routes.iter().enumerate() {
        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView {
                index,
                path: route.path.clone(),
            });
        }

        if let Some(name) = &route.name {
            if !names.insert(name.as_str()) {
                errors.push(ValidationError::DuplicateName(name.clone()));
            }
        }

        match RoutePattern::parse(&route.path) {
            Ok(RoutePattern::CatchAll { .. }) => catch_alls.push(index),
            Ok(RoutePattern::Literal(path)) => {
                let key = normalize_path(&path, options);
                if let Some(&first) = literal_paths.get(&key) {
                    errors.push(ValidationError::DuplicatePath {
                        index,
                        first,
                        path: route.path.clone(),
                    });
                } else {
                    literal_paths.insert(key, index);
                }
            }
            Err(source) => errors.push(ValidationError::InvalidPattern {
                index,
                path: route.path.clone(),
                source,
            }),
        }
    }

    match catch_alls.split_first() {
        None => errors.push(ValidationError::MissingCatchAll),
        Some((&first, rest)) => {
            for &index in rest {
                errors.push(ValidationError::MultipleCatchAll {
                    index,
                    path: routes[index].path.clone(),
                });
            }
            if first != routes.len() - 1 {
                errors.push(ValidationError::CatchAllNotLast {
                    index: first,
                    path: routes[first].path.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Render a list of errors as one line.
pub fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether `url` is an origin only: path `/`, no query or fragment.
///
/// Route paths are matched against the whole URL path, so a base with a
/// path of its own would put every declared route out of reach.
pub fn is_origin(url: &Url) -> bool {
    url.path() == "/" && url.query().is_none() && url.fragment().is_none()
}

/// Extract the element id from a `#id` selector.
pub fn mount_id(selector: &str) -> Option<&str> {
    selector
        .strip_prefix('#')
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
}
