//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, network override)
//!     → resolver (Endpoint or ResolveError)
//!     → request.rs (rewrite destination) → upstream
//!     → response.rs (error → status) → client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{X_GATEWAY_NETWORK, X_REQUEST_ID};
pub use server::{HttpServer, ResolverState};
