//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (push / replace / back / forward)
//!     → location.rs (normalize target: path, query, hash)
//!     → history.rs (record or move through entries)
//!     → router.rs (route lookup, state Idle → Resolving → Idle)
//!     → matcher.rs (evaluate patterns in declaration order)
//!     → ActiveRoute published on a watch channel
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Validate (one catch-all, declared last; unique literals)
//!     → Bind view names through the ViewRegistry
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod history;
pub mod location;
pub mod matcher;
pub mod router;

pub use history::History;
pub use location::{LocationError, RouteLocation};
pub use matcher::{MatchOptions, RoutePattern};
pub use router::{
    ActiveRoute, NavigationError, NavigationOutcome, NavigationState, RouteMatch, RouteTable,
    Router, RoutingError,
};
