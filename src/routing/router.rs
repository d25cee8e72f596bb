//! Route lookup and navigation.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Resolve a path to the view of the first matching entry
//! - Drive navigations through the history stack
//! - Publish the active route to observers
//!
//! # Design Decisions
//! - Immutable table after construction
//! - The catch-all entry is held apart from the literal entries, so
//!   resolution is total by construction and always evaluated last
//! - O(n) literal scan (acceptable for typical route counts)
//! - Navigating to the current full path is a no-op

use std::sync::Arc;

use serde::{Serialize, Serializer};
use tokio::sync::watch;
use url::Url;
use uuid::Uuid;

use crate::config::validation::{describe, is_origin, validate_routes, ValidationError};
use crate::config::{AppConfig, RouteConfig};
use crate::routing::history::History;
use crate::routing::location::{self, LocationError, RouteLocation};
use crate::routing::matcher::{self, MatchOptions, Matcher, Params, PatternError, RoutePattern};
use crate::view::{View, ViewRegistry};

/// Errors raised while building a router.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid route table: {}", describe(.0))]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("route {path:?} refers to unknown view {view:?}")]
    UnknownView { path: String, view: String },

    #[error("invalid base url {url:?}: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("base url {0:?} must be a bare origin with path '/'")]
    BaseUrlNotOrigin(String),

    #[error("invalid initial location: {0}")]
    InitialLocation(#[from] LocationError),
}

/// Errors raised by a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error(transparent)]
    Location(#[from] LocationError),
}

/// One compiled route.
#[derive(Debug)]
pub struct RouteEntry {
    path: String,
    name: Option<String>,
    pattern: RoutePattern,
    matcher: Box<dyn Matcher>,
    view: Arc<dyn View>,
}

impl RouteEntry {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }
}

/// Result of resolving a path against the table.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Declaration index of the matched entry.
    pub index: usize,
    pub name: Option<String>,
    pub view: Arc<dyn View>,
    pub params: Params,
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    literals: Vec<RouteEntry>,
    fallback: RouteEntry,
}

impl RouteTable {
    /// Validate `routes` and bind each one to its registered view.
    pub fn compile(
        routes: &[RouteConfig],
        options: MatchOptions,
        views: &ViewRegistry,
    ) -> Result<Self, RoutingError> {
        validate_routes(routes, options).map_err(RoutingError::Invalid)?;

        let mut literals = Vec::with_capacity(routes.len());
        let mut fallback = None;

        for route in routes {
            let pattern = RoutePattern::parse(&route.path)?;
            let view = views.get(&route.view).ok_or_else(|| RoutingError::UnknownView {
                path: route.path.clone(),
                view: route.view.clone(),
            })?;

            let entry = RouteEntry {
                path: route.path.clone(),
                name: route.name.clone(),
                matcher: matcher::compile(&pattern, options),
                pattern,
                view,
            };

            if entry.pattern.is_catch_all() {
                fallback = Some(entry);
            } else {
                literals.push(entry);
            }
        }

        let fallback = fallback
            .ok_or_else(|| RoutingError::Invalid(vec![ValidationError::MissingCatchAll]))?;

        Ok(Self { literals, fallback })
    }

    /// Resolve `path` to the first matching entry. Always succeeds.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        self.entries()
            .enumerate()
            .find_map(|(index, entry)| {
                entry.matcher.matches(path).map(|params| RouteMatch {
                    index,
                    name: entry.name.clone(),
                    view: entry.view.clone(),
                    params,
                })
            })
            .unwrap_or_else(|| RouteMatch {
                index: self.literals.len(),
                name: self.fallback.name.clone(),
                view: self.fallback.view.clone(),
                params: Params::new(),
            })
    }

    /// Entries in evaluation order; the catch-all is always last.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.literals.iter().chain(std::iter::once(&self.fallback))
    }

    pub fn fallback(&self) -> &RouteEntry {
        &self.fallback
    }

    /// Number of entries, the catch-all included.
    pub fn route_count(&self) -> usize {
        self.literals.len() + 1
    }
}

/// Navigation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationState {
    Idle,
    Resolving,
}

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A new route became active.
    Navigated,
    /// The target was already active; nothing changed.
    Duplicated,
    /// The history has no entry in the requested direction.
    OutOfHistory,
}

/// The route currently shown.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveRoute {
    pub location: RouteLocation,
    pub name: Option<String>,
    #[serde(serialize_with = "serialize_view")]
    pub view: Arc<dyn View>,
    pub navigation_id: Uuid,
}

impl ActiveRoute {
    pub fn view_name(&self) -> &str {
        self.view.name()
    }

    pub fn render(&self) -> String {
        self.view.render(&self.location)
    }
}

fn serialize_view<S: Serializer>(view: &Arc<dyn View>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(view.name())
}

/// Client-side router.
///
/// Owned by whoever builds it; the active route is published on a watch
/// channel so the application can re-render on change.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    base: Url,
    history: History,
    state: NavigationState,
    current: watch::Sender<Option<ActiveRoute>>,
}

impl Router {
    /// Create a router positioned at `initial` without navigating yet.
    ///
    /// The active route stays `None` until [`Router::initial_navigation`].
    pub fn new(table: RouteTable, base: Url, initial: &str) -> Result<Self, RoutingError> {
        if !is_origin(&base) {
            return Err(RoutingError::BaseUrlNotOrigin(base.to_string()));
        }
        let start = location::parse(initial, &base)?;
        let (current, _) = watch::channel(None);

        Ok(Self {
            table,
            base,
            history: History::new(start.full_path),
            state: NavigationState::Idle,
            current,
        })
    }

    /// Build a router from configuration.
    pub fn from_config(
        config: &AppConfig,
        views: &ViewRegistry,
        initial: &str,
    ) -> Result<Self, RoutingError> {
        let table = RouteTable::compile(
            &config.routes,
            MatchOptions::from(&config.router),
            views,
        )?;
        let base = Url::parse(&config.router.base_url).map_err(|source| RoutingError::BaseUrl {
            url: config.router.base_url.clone(),
            source,
        })?;
        Self::new(table, base, initial)
    }

    /// Pure lookup of a path; does not touch navigation state.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        self.table.resolve(path)
    }

    /// Resolve a full navigation target without navigating.
    pub fn resolve_location(&self, target: &str) -> Result<ActiveRoute, NavigationError> {
        let location = location::parse(target, &self.base)?;
        Ok(self.build_active(location, Uuid::new_v4()))
    }

    /// Activate the location the history starts at.
    pub fn initial_navigation(&mut self) -> Result<NavigationOutcome, NavigationError> {
        if self.current.borrow().is_some() {
            return Ok(NavigationOutcome::Duplicated);
        }
        let location = location::parse(self.history.location(), &self.base)?;
        self.commit(location);
        Ok(NavigationOutcome::Navigated)
    }

    /// Navigate to `target`, adding a history entry.
    pub fn push(&mut self, target: &str) -> Result<NavigationOutcome, NavigationError> {
        let location = location::parse(target, &self.base)?;
        if self.is_current(&location.full_path) {
            tracing::debug!(full_path = %location.full_path, "Duplicated navigation ignored");
            return Ok(NavigationOutcome::Duplicated);
        }
        self.history.push(location.full_path.clone());
        self.commit(location);
        Ok(NavigationOutcome::Navigated)
    }

    /// Navigate to `target`, overwriting the current history entry.
    pub fn replace(&mut self, target: &str) -> Result<NavigationOutcome, NavigationError> {
        let location = location::parse(target, &self.base)?;
        if self.is_current(&location.full_path) {
            tracing::debug!(full_path = %location.full_path, "Duplicated navigation ignored");
            return Ok(NavigationOutcome::Duplicated);
        }
        self.history.replace(location.full_path.clone());
        self.commit(location);
        Ok(NavigationOutcome::Navigated)
    }

    /// Move through history by `delta` entries.
    pub fn go(&mut self, delta: isize) -> Result<NavigationOutcome, NavigationError> {
        let Some(target) = self.history.go(delta).map(str::to_string) else {
            tracing::debug!(delta, position = self.history.position(), "No history entry");
            return Ok(NavigationOutcome::OutOfHistory);
        };
        let location = location::parse(&target, &self.base)?;
        self.commit(location);
        Ok(NavigationOutcome::Navigated)
    }

    pub fn back(&mut self) -> Result<NavigationOutcome, NavigationError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<NavigationOutcome, NavigationError> {
        self.go(1)
    }

    /// Snapshot of the active route (`None` before the first navigation).
    pub fn current(&self) -> Option<ActiveRoute> {
        self.current.borrow().clone()
    }

    /// Observe active route changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<ActiveRoute>> {
        self.current.subscribe()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    fn is_current(&self, full_path: &str) -> bool {
        self.current
            .borrow()
            .as_ref()
            .is_some_and(|active| active.location.full_path == full_path)
    }

    fn commit(&mut self, location: RouteLocation) {
        let navigation_id = self.begin(&location);
        let active = self.build_active(location, navigation_id);
        self.finish(active);
    }

    fn begin(&mut self, location: &RouteLocation) -> Uuid {
        let navigation_id = Uuid::new_v4();
        self.state = NavigationState::Resolving;
        tracing::debug!(
            navigation_id = %navigation_id,
            path = %location.path,
            "Resolving navigation"
        );
        navigation_id
    }

    fn build_active(&self, location: RouteLocation, navigation_id: Uuid) -> ActiveRoute {
        let matched = self.table.resolve(&location.path);
        ActiveRoute {
            location: RouteLocation {
                params: matched.params,
                ..location
            },
            name: matched.name,
            view: matched.view,
            navigation_id,
        }
    }

    fn finish(&mut self, active: ActiveRoute) {
        tracing::info!(
            navigation_id = %active.navigation_id,
            path = %active.location.path,
            view = %active.view_name(),
            route = ?active.name,
            "Navigation resolved"
        );
        self.current.send_replace(Some(active));
        self.state = NavigationState::Idle;
    }
}
