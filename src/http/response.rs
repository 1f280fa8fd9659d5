//! Response handling and transformation.
//!
//! # Responsibilities
//! - Map resolution errors to HTTP status codes
//! - Map upstream failures to 502 Bad Gateway
//!
//! # Design Decisions
//! - Client-caused failures (bad path, unknown service) are 4xx
//! - Fabric failures are 502, empty or unselectable route sets are 503

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::http::request::UpstreamError;
use crate::resolver::{ErrorKind, ResolveError};

/// Status returned to the client for a resolution failure.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::UnknownService => StatusCode::NOT_FOUND,
        ErrorKind::InvalidPath => StatusCode::BAD_REQUEST,
        ErrorKind::Lookup => StatusCode::BAD_GATEWAY,
        ErrorKind::Selection | ErrorKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        (status_for(self.kind()), self.to_string()).into_response()
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SelectError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ResolveError::UnknownService.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ResolveError::InvalidPath.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ResolveError::Selection(SelectError::NoAvailableRoute)
                .into_response()
                .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(status_for(ErrorKind::Lookup), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(ErrorKind::Cancelled), StatusCode::SERVICE_UNAVAILABLE);
    }
}
