//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!       (navigation_id, path, view, selector, project_id)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Navigation ID flows through every log line of one navigation
//! - Library code only emits events; the binary installs the subscriber

pub mod logging;

pub use logging::{init_logging, LoggingError};
