//! Application root: installs the router and renders into a mount point.

use tokio::sync::watch;

use crate::app::document::Document;
use crate::routing::{ActiveRoute, NavigationError, NavigationOutcome, Router};

/// Errors raised by the application lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("a router is already installed")]
    RouterAlreadyInstalled,

    #[error("no router installed")]
    RouterNotInstalled,

    #[error("mount target {0:?} not found")]
    MountTargetNotFound(String),

    #[error("application is already mounted at {0:?}")]
    AlreadyMounted(String),

    #[error("application is not mounted")]
    NotMounted,

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// The root application instance.
#[derive(Debug, Default)]
pub struct Application {
    router: Option<Router>,
    route_rx: Option<watch::Receiver<Option<ActiveRoute>>>,
    mounted_at: Option<String>,
}

impl Application {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the router. Only one router can be installed.
    pub fn use_router(&mut self, router: Router) -> Result<&mut Self, AppError> {
        if self.router.is_some() {
            return Err(AppError::RouterAlreadyInstalled);
        }
        self.route_rx = Some(router.subscribe());
        self.router = Some(router);
        tracing::debug!("Router installed");
        Ok(self)
    }

    /// Attach to the element matching `selector`, run the initial
    /// navigation and render.
    pub fn mount(&mut self, document: &mut Document, selector: &str) -> Result<(), AppError> {
        if let Some(existing) = &self.mounted_at {
            return Err(AppError::AlreadyMounted(existing.clone()));
        }
        if document.query_selector(selector).is_none() {
            return Err(AppError::MountTargetNotFound(selector.to_string()));
        }

        self.router_mut()?.initial_navigation()?;
        self.mounted_at = Some(selector.to_string());
        self.render(document)?;

        tracing::info!(selector = %selector, "Application mounted");
        Ok(())
    }

    /// Detach from the document, clearing the mount point.
    pub fn unmount(&mut self, document: &mut Document) -> Result<(), AppError> {
        let selector = self.mounted_at.take().ok_or(AppError::NotMounted)?;
        if let Some(element) = document.query_selector_mut(&selector) {
            element.set_inner_html("");
        }
        tracing::info!(selector = %selector, "Application unmounted");
        Ok(())
    }

    pub fn navigate(
        &mut self,
        document: &mut Document,
        target: &str,
    ) -> Result<NavigationOutcome, AppError> {
        let outcome = self.router_mut()?.push(target)?;
        self.sync(document)?;
        Ok(outcome)
    }

    pub fn replace(
        &mut self,
        document: &mut Document,
        target: &str,
    ) -> Result<NavigationOutcome, AppError> {
        let outcome = self.router_mut()?.replace(target)?;
        self.sync(document)?;
        Ok(outcome)
    }

    pub fn go(&mut self, document: &mut Document, delta: isize) -> Result<NavigationOutcome, AppError> {
        let outcome = self.router_mut()?.go(delta)?;
        self.sync(document)?;
        Ok(outcome)
    }

    pub fn back(&mut self, document: &mut Document) -> Result<NavigationOutcome, AppError> {
        self.go(document, -1)
    }

    pub fn forward(&mut self, document: &mut Document) -> Result<NavigationOutcome, AppError> {
        self.go(document, 1)
    }

    pub fn router(&self) -> Option<&Router> {
        self.router.as_ref()
    }

    pub fn current_route(&self) -> Option<ActiveRoute> {
        self.router.as_ref().and_then(Router::current)
    }

    pub fn mounted_at(&self) -> Option<&str> {
        self.mounted_at.as_deref()
    }

    fn router_mut(&mut self) -> Result<&mut Router, AppError> {
        self.router.as_mut().ok_or(AppError::RouterNotInstalled)
    }

    /// Re-render if the router published a new route.
    fn sync(&mut self, document: &mut Document) -> Result<(), AppError> {
        let changed = self
            .route_rx
            .as_ref()
            .is_some_and(|rx| rx.has_changed().unwrap_or(false));
        if changed && self.mounted_at.is_some() {
            self.render(document)?;
        }
        Ok(())
    }

    fn render(&mut self, document: &mut Document) -> Result<(), AppError> {
        let selector = self.mounted_at.as_deref().ok_or(AppError::NotMounted)?;
        let rx = self.route_rx.as_mut().ok_or(AppError::RouterNotInstalled)?;
        let html = rx.borrow_and_update().as_ref().map(render_root).unwrap_or_default();

        let element = document
            .query_selector_mut(selector)
            .ok_or_else(|| AppError::MountTargetNotFound(selector.to_string()))?;
        element.set_inner_html(html);
        Ok(())
    }
}

fn render_root(active: &ActiveRoute) -> String {
    format!(
        "<div class=\"app\" data-view=\"{}\">{}</div>",
        active.view_name(),
        active.render()
    )
}
