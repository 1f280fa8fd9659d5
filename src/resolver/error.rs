//! Resolution error taxonomy.

use thiserror::Error;

use crate::routing::RouterError;
use crate::selector::SelectError;

/// Coarse classification of a [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownService,
    InvalidPath,
    Lookup,
    Selection,
    Cancelled,
}

impl ErrorKind {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownService => "unknown_service",
            ErrorKind::InvalidPath => "invalid_path",
            ErrorKind::Lookup => "lookup",
            ErrorKind::Selection => "selection",
            ErrorKind::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while resolving a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The path has no service segment.
    #[error("unknown service")]
    UnknownService,

    /// The service segment is not a valid service token.
    #[error("invalid path")]
    InvalidPath,

    /// The routing fabric failed to answer.
    #[error("route lookup failed: {0}")]
    Lookup(#[source] RouterError),

    /// No route could be selected from the candidates.
    #[error("route selection failed: {0}")]
    Selection(#[source] SelectError),

    /// The caller cancelled the resolution.
    #[error("resolution cancelled")]
    Cancelled,
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::UnknownService => ErrorKind::UnknownService,
            ResolveError::InvalidPath => ErrorKind::InvalidPath,
            ResolveError::Lookup(_) => ErrorKind::Lookup,
            ResolveError::Selection(_) => ErrorKind::Selection,
            ResolveError::Cancelled => ErrorKind::Cancelled,
        }
    }
}
