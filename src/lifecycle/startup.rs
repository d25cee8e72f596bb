//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize the backend app from its opaque options
//! - Compile the route table and create the router
//! - Create the application, install the router and mount it
//!
//! # Design Decisions
//! - Fail fast: any startup error is returned to the caller
//! - Steps run in order: backend, router, application, mount
//! - Every object is owned by the caller; nothing is stored globally

use crate::app::{AppError, Application, Document};
use crate::backend::{BackendError, BackendRegistry};
use crate::config::AppConfig;
use crate::routing::{Router, RoutingError};
use crate::view::ViewRegistry;

/// Errors raised while bootstrapping.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("backend initialization failed: {0}")]
    Backend(#[from] BackendError),

    #[error("router setup failed: {0}")]
    Routing(#[from] RoutingError),

    #[error("application setup failed: {0}")]
    App(#[from] AppError),
}

/// Everything the entry point owns after a successful bootstrap.
#[derive(Debug)]
pub struct Bootstrapped {
    pub backend: BackendRegistry,
    pub app: Application,
}

/// Bootstrap with the built-in views.
pub fn bootstrap(
    config: &AppConfig,
    initial_url: &str,
    document: &mut Document,
) -> Result<Bootstrapped, StartupError> {
    bootstrap_with_views(config, &ViewRegistry::with_defaults(), initial_url, document)
}

/// Run the startup sequence against `document`.
pub fn bootstrap_with_views(
    config: &AppConfig,
    views: &ViewRegistry,
    initial_url: &str,
    document: &mut Document,
) -> Result<Bootstrapped, StartupError> {
    let mut backend = BackendRegistry::new();
    backend.initialize_app(config.backend.clone(), None)?;

    let router = Router::from_config(config, views, initial_url)?;
    tracing::info!(
        routes = router.table().route_count(),
        fallback = %router.table().fallback().path(),
        "Route table compiled"
    );
    tracing::info!(
        path = %router.history().location(),
        active = router.current().is_some(),
        "Initial route"
    );

    let mut app = Application::new();
    app.use_router(router)?;
    app.mount(document, &config.mount.selector)?;

    if let Some(active) = app.current_route() {
        tracing::info!(
            path = %active.location.path,
            view = %active.view_name(),
            "Route path"
        );
    }

    Ok(Bootstrapped { backend, app })
}
