//! API gateway request resolution library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resolver;
pub mod routing;
pub mod selector;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use resolver::{Endpoint, ErrorKind, ResolveError, ResolveOptions, WebResolver};
