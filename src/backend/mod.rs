//! Backend-as-a-service initialization.
//!
//! # Responsibilities
//! - Register named backend apps from opaque options
//! - Return the existing app when the same options are registered twice
//! - Look up and delete apps by name
//!
//! # Design Decisions
//! - The registry is owned by the entry point; there is no global default app
//! - Options are stored untouched and never validated
//! - Only the project id is logged

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::BackendConfig;

/// Name used when no app name is given.
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// Errors raised by backend initialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("backend app {0:?} already exists with different options")]
    DuplicateApp(String),

    #[error("backend app name must not be empty")]
    InvalidAppName,

    #[error("no backend app named {0:?} has been initialized")]
    NoApp(String),
}

/// An initialized backend app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendApp {
    name: String,
    options: Arc<BackendConfig>,
}

impl BackendApp {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &BackendConfig {
        &self.options
    }
}

/// Set of initialized backend apps.
#[derive(Debug, Default)]
pub struct BackendRegistry {
    apps: HashMap<String, BackendApp>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize an app under `name` (or [`DEFAULT_APP_NAME`]).
    pub fn initialize_app(
        &mut self,
        options: BackendConfig,
        name: Option<&str>,
    ) -> Result<BackendApp, BackendError> {
        let name = name.unwrap_or(DEFAULT_APP_NAME);
        if name.trim().is_empty() {
            return Err(BackendError::InvalidAppName);
        }

        if let Some(existing) = self.apps.get(name) {
            if *existing.options == options {
                return Ok(existing.clone());
            }
            return Err(BackendError::DuplicateApp(name.to_string()));
        }

        let app = BackendApp {
            name: name.to_string(),
            options: Arc::new(options),
        };
        tracing::info!(
            app = %app.name,
            project_id = %app.options.project_id,
            "Backend app initialized"
        );
        self.apps.insert(app.name.clone(), app.clone());
        Ok(app)
    }

    /// Look up an app; `None` means the default app.
    pub fn app(&self, name: Option<&str>) -> Result<&BackendApp, BackendError> {
        let name = name.unwrap_or(DEFAULT_APP_NAME);
        self.apps
            .get(name)
            .ok_or_else(|| BackendError::NoApp(name.to_string()))
    }

    pub fn delete_app(&mut self, name: &str) -> Result<BackendApp, BackendError> {
        let app = self
            .apps
            .remove(name)
            .ok_or_else(|| BackendError::NoApp(name.to_string()))?;
        tracing::info!(app = %app.name, "Backend app deleted");
        Ok(app)
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(project_id: &str) -> BackendConfig {
        BackendConfig {
            api_key: "test-key".into(),
            project_id: project_id.into(),
            ..BackendConfig::default()
        }
    }

    #[test]
    fn test_default_app() {
        let mut registry = BackendRegistry::new();
        let app = registry.initialize_app(options("bank-demo"), None).unwrap();

        assert_eq!(app.name(), DEFAULT_APP_NAME);
        assert_eq!(app.options().project_id, "bank-demo");
        assert_eq!(registry.app(None).unwrap(), &app);
    }

    #[test]
    fn test_options_are_not_validated() {
        let mut registry = BackendRegistry::new();
        let app = registry
            .initialize_app(BackendConfig::default(), None)
            .unwrap();
        assert!(app.options().api_key.is_empty());
    }

    #[test]
    fn test_reinitialize_same_options_returns_existing() {
        let mut registry = BackendRegistry::new();
        let first = registry.initialize_app(options("a"), Some("main")).unwrap();
        let second = registry.initialize_app(options("a"), Some("main")).unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_app_with_different_options() {
        let mut registry = BackendRegistry::new();
        registry.initialize_app(options("a"), None).unwrap();

        let err = registry.initialize_app(options("b"), None).unwrap_err();
        assert_eq!(err, BackendError::DuplicateApp(DEFAULT_APP_NAME.into()));
    }

    #[test]
    fn test_invalid_name_and_missing_app() {
        let mut registry = BackendRegistry::new();
        assert_eq!(
            registry.initialize_app(options("a"), Some("  ")),
            Err(BackendError::InvalidAppName)
        );
        assert_eq!(
            registry.app(Some("other")),
            Err(BackendError::NoApp("other".into()))
        );
    }

    #[test]
    fn test_delete_app() {
        let mut registry = BackendRegistry::new();
        registry.initialize_app(options("a"), Some("main")).unwrap();

        assert_eq!(registry.delete_app("main").unwrap().name(), "main");
        assert!(registry.is_empty());
        assert_eq!(
            registry.delete_app("main"),
            Err(BackendError::NoApp("main".into()))
        );
    }
}
