//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the dashboard.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the dashboard client.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the application tree is attached.
    pub mount: MountConfig,

    /// Matching options for the route table.
    pub router: RouterConfig,

    /// Ordered route table. The catch-all entry must come last.
    pub routes: Vec<RouteConfig>,

    /// Opaque backend-as-a-service credentials.
    pub backend: BackendConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount: MountConfig::default(),
            router: RouterConfig::default(),
            routes: default_routes(),
            backend: BackendConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// The stock route table: two dashboard paths and a not-found fallback.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "Dashboard"),
        RouteConfig::new("/dashboard", "Dashboard"),
        RouteConfig::new("/:catchAll(.*)", "NotFound"),
    ]
}

/// Mount point configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MountConfig {
    /// Element selector (e.g., "#app").
    pub selector: String,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            selector: "#app".to_string(),
        }
    }
}

/// Router matching options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Literal paths are compared case-sensitively.
    pub sensitive: bool,

    /// A trailing slash is significant.
    pub strict: bool,

    /// Origin that navigation targets are resolved against.
    pub base_url: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            sensitive: true,
            strict: true,
            base_url: "http://localhost/".to_string(),
        }
    }
}

/// Route configuration mapping a path pattern to a view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path ("/dashboard") or catch-all pattern ("/:catchAll(.*)").
    pub path: String,

    /// Name of the registered view to render.
    pub view: String,

    /// Optional route identifier for logging.
    #[serde(default)]
    pub name: Option<String>,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            view: view.into(),
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Backend-as-a-service options.
///
/// Passed as-is to [`crate::backend::BackendRegistry::initialize_app`];
/// nothing here is interpreted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of the pretty format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
