//! Bank dashboard client: router table, application bootstrap and backend
//! initialization.

pub mod app;
pub mod backend;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod view;

pub use app::Application;
pub use config::schema::AppConfig;
pub use lifecycle::Shutdown;
pub use routing::Router;
