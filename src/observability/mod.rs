//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Resolver and HTTP layer produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout log aggregation
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through log events and upstream headers
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
