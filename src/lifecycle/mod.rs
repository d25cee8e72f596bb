//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Backend app → Router → Application → use_router → mount
//!
//! Running (events.rs):
//!     Input line → NavigationCommand → Application → rendered mount point
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl-C / quit / end of input → leave event loop → unmount → exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: backend first, mount last
//! - The bootstrap runs once per process
//! - Commands are processed sequentially on a single-threaded runtime

pub mod events;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use events::{run_event_loop, NavigationCommand, OutputFormat};
pub use shutdown::Shutdown;
pub use startup::{bootstrap, Bootstrapped, StartupError};
