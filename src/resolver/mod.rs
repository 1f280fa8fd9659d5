//! Request resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (method, path)
//!     → path.rs (validate and split: service token + remainder)
//!     → RouteQuery "<namespace>.<token>" scoped by ResolveOptions.network
//!     → RouteLookup (candidates) → RouteSelector (one route)
//!     → Endpoint { name, method, host, path, network }
//! ```
//!
//! # Design Decisions
//! - Malformed paths never reach the routing fabric
//! - Collaborator errors are wrapped, not retried or cached
//! - Endpoint network is the selected route's, not the requested filter

pub mod error;
pub mod options;
pub mod path;
pub mod web;

pub use error::{ErrorKind, ResolveError};
pub use options::{Endpoint, ResolveOptions};
pub use path::{parse_path, ParsedPath};
pub use web::WebResolver;
