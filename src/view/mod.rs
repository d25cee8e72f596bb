//! Presentational views rendered by the router.
//!
//! Views are looked up by name when the route table is compiled, so the
//! config file can refer to them as plain strings.

use std::collections::HashMap;
use std::sync::Arc;

use crate::routing::location::RouteLocation;

/// A component the router can activate.
pub trait View: Send + Sync + std::fmt::Debug {
    /// Registry name, as referenced by route configuration.
    fn name(&self) -> &str;

    /// Render the view for the active location.
    fn render(&self, location: &RouteLocation) -> String;
}

/// Landing view for the dashboard paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dashboard;

impl View for Dashboard {
    fn name(&self) -> &str {
        "Dashboard"
    }

    fn render(&self, _location: &RouteLocation) -> String {
        "<section class=\"dashboard\"><h1>Dashboard</h1></section>".to_string()
    }
}

/// Fallback view for unmatched paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotFound;

impl View for NotFound {
    fn name(&self) -> &str {
        "NotFound"
    }

    fn render(&self, location: &RouteLocation) -> String {
        format!(
            "<section class=\"not-found\"><h1>404</h1><p>No page at {}</p></section>",
            escape_html(&location.path)
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Views available to the route table, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct ViewRegistry {
    views: HashMap<String, Arc<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with [`Dashboard`] and [`NotFound`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Dashboard));
        registry.register(Arc::new(NotFound));
        registry
    }

    /// Register a view under its own name, replacing any previous one.
    pub fn register(&mut self, view: Arc<dyn View>) {
        self.views.insert(view.name().to_string(), view);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn View>> {
        self.views.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_registered() {
        let registry = ViewRegistry::with_defaults();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(ViewRegistry::new().is_empty());
        assert_eq!(registry.get("Dashboard").unwrap().name(), "Dashboard");
        assert_eq!(registry.get("NotFound").unwrap().name(), "NotFound");
        assert!(registry.get("Login").is_none());
    }

    #[test]
    fn test_not_found_escapes_path() {
        let location = RouteLocation::from_path("/<script>");
        let html = NotFound.render(&location);
        assert!(html.contains("/&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
