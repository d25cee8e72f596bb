//! Application instance and host document.
//!
//! # Data Flow
//! ```text
//! Application::new()
//!     → use_router(router)      (router becomes the route observer source)
//!     → mount(document, "#app") (initial navigation, first render)
//!     → navigate / back / forward
//!         → router publishes ActiveRoute
//!         → application re-renders the mount point
//! ```

pub mod application;
pub mod document;

pub use application::{AppError, Application};
pub use document::{Document, Element};
