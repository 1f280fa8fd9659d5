//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Extract per-request resolution overrides from headers
//! - Rewrite the request destination onto a resolved endpoint
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Only the resolved host, path and the original query reach the upstream URI

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::uri::InvalidUri;
use axum::http::{Request, Uri};
use thiserror::Error;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use url::Url;
use uuid::Uuid;

use crate::resolver::Endpoint;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Header that overrides the configured network filter for one request.
pub const X_GATEWAY_NETWORK: &str = "x-gateway-network";

const HOP_BY_HOP: [&str; 7] = [
    "connection",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Generates `x-request-id` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Assigns a request ID unless the client supplied one.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

/// The request ID, or "unknown" if none was assigned.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Network filter requested by the client, if any. A blank header keeps
/// the configured default; use `*` to widen the lookup explicitly.
pub fn network_override(headers: &HeaderMap) -> Option<String> {
    headers
        .get(X_GATEWAY_NETWORK)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Remove connection-scoped headers before forwarding.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}

/// Failure to build or send the upstream request.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid upstream uri: {0}")]
    Uri(#[from] InvalidUri),

    #[error("invalid host header: {0}")]
    Host(#[from] header::InvalidHeaderValue),

    #[error("invalid upstream request: {0}")]
    Build(#[from] axum::http::Error),

    #[error("upstream request failed: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),
}

/// `http://{host}{path}[?query]` for `endpoint`.
pub fn upstream_uri(endpoint: &Endpoint, query: Option<&str>) -> Result<Uri, UpstreamError> {
    let mut url = Url::parse(&format!("http://{}", endpoint.host))?;
    url.set_path(&endpoint.path);
    url.set_query(query);
    Ok(url.as_str().parse::<Uri>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    fn endpoint(host: &str, path: &str) -> Endpoint {
        Endpoint {
            name: "greeter".into(),
            method: Method::GET,
            host: host.into(),
            path: path.into(),
            network: "local".into(),
        }
    }

    #[test]
    fn test_upstream_uri() {
        let uri = upstream_uri(&endpoint("10.0.0.1:8080", "/say/hello"), None).unwrap();
        assert_eq!(uri.to_string(), "http://10.0.0.1:8080/say/hello");

        let uri = upstream_uri(&endpoint("10.0.0.1:8080", "/"), Some("name=bob&x=1")).unwrap();
        assert_eq!(uri.to_string(), "http://10.0.0.1:8080/?name=bob&x=1");
    }

    #[test]
    fn test_upstream_uri_rejects_bad_host() {
        assert!(upstream_uri(&endpoint("not a host", "/"), None).is_err());
    }

    #[test]
    fn test_header_helpers() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_id(&headers), "unknown");
        assert_eq!(network_override(&headers), None);

        headers.insert(X_REQUEST_ID, HeaderValue::from_static("abc"));
        headers.insert(X_GATEWAY_NETWORK, HeaderValue::from_static(" edge "));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));

        assert_eq!(request_id(&headers), "abc");
        assert_eq!(network_override(&headers).as_deref(), Some("edge"));

        strip_hop_by_hop(&mut headers);
        assert!(headers.get(header::CONNECTION).is_none());
        assert!(headers.get(header::ACCEPT).is_some());
    }

    #[test]
    fn test_blank_network_header_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(X_GATEWAY_NETWORK, HeaderValue::from_static(""));
        assert_eq!(network_override(&headers), None);

        headers.insert(X_GATEWAY_NETWORK, HeaderValue::from_static("   "));
        assert_eq!(network_override(&headers), None);

        headers.insert(X_GATEWAY_NETWORK, HeaderValue::from_static("*"));
        assert_eq!(network_override(&headers).as_deref(), Some("*"));
    }

    #[test]
    fn test_make_request_id() {
        let req = Request::builder().body(()).unwrap();
        let id = MakeRequestUuid.make_request_id(&req).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }
}
