//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the gateway handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Resolve each request and forward it once to the resolved endpoint
//! - Apply configuration updates by swapping the resolver atomically

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{header, request::Parts, HeaderValue, Request, Version},
    response::{IntoResponse, Response},
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::request::{self, UpstreamError};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::resolver::{Endpoint, ResolveOptions, WebResolver};

/// The resolver together with the default options it was configured with.
///
/// Replaced as a unit on reload so a request never mixes old and new settings.
#[derive(Debug)]
pub struct ResolverState {
    pub resolver: WebResolver,
    pub defaults: ResolveOptions,
}

impl ResolverState {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            resolver: WebResolver::from_config(config),
            defaults: ResolveOptions::new().with_network(config.resolver.network.clone()),
        }
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ArcSwap<ResolverState>>,
    pub client: Client<HttpConnector, Body>,
    pub shutdown: Shutdown,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    config: GatewayConfig,
    resolver: Arc<ArcSwap<ResolverState>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let resolver = Arc::new(ArcSwap::from_pointee(ResolverState::from_config(&config)));
        Self { config, resolver }
    }

    /// Handle to the live resolver, shared with the request handlers.
    pub fn resolver(&self) -> Arc<ArcSwap<ResolverState>> {
        self.resolver.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .fallback(gateway_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(request::set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(request::propagate_request_id_layer())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// Run the server until `shutdown` triggers.
    ///
    /// Configs received on `config_updates` replace the resolver; listener
    /// and timeout settings only take effect on restart.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<GatewayConfig>,
        shutdown: Shutdown,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            namespace = %self.config.resolver.namespace,
            "HTTP server starting"
        );

        let reload_target = self.resolver.clone();
        let reload_shutdown = shutdown.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    update = config_updates.recv() => match update {
                        Some(config) => {
                            reload_target.store(Arc::new(ResolverState::from_config(&config)));
                            tracing::info!(
                                namespace = %config.resolver.namespace,
                                routes = config.routes.len(),
                                "Resolver reloaded"
                            );
                        }
                        None => break,
                    },
                    _ = reload_shutdown.wait() => break,
                }
            }
        });

        let state = AppState {
            resolver: self.resolver.clone(),
            client: Client::builder(TokioExecutor::new()).build(HttpConnector::new()),
            shutdown: shutdown.clone(),
        };
        let app = Self::build_router(&self.config, state);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main gateway handler.
/// Resolves the request to an endpoint and forwards it.
async fn gateway_handler(State(state): State<AppState>, req: Request<Body>) -> Response {
    let start_time = Instant::now();
    let (mut parts, body) = req.into_parts();
    let request_id = request::request_id(&parts.headers).to_string();
    let method = parts.method.to_string();

    let active = state.resolver.load_full();
    let options = match request::network_override(&parts.headers) {
        Some(network) => active.defaults.clone().with_network(network),
        None => active.defaults.clone(),
    };

    let cancel = state.shutdown.child_token();
    let endpoint = match active.resolver.resolve(&parts, &options, &cancel).await {
        Ok(endpoint) => {
            metrics::record_resolve(Ok(()));
            endpoint
        }
        Err(e) => {
            metrics::record_resolve(Err(&e));
            tracing::warn!(
                request_id = %request_id,
                path = %parts.uri.path(),
                kind = %e.kind(),
                error = %e,
                "Resolution failed"
            );
            let response = e.into_response();
            metrics::record_request(&method, response.status().as_u16(), start_time);
            return response;
        }
    };

    tracing::debug!(
        request_id = %request_id,
        service = %endpoint.name,
        host = %endpoint.host,
        path = %endpoint.path,
        network = %endpoint.network,
        "Forwarding request"
    );

    let response = match forward(&state.client, &mut parts, body, &endpoint).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                host = %endpoint.host,
                error = %e,
                "Upstream error"
            );
            e.into_response()
        }
    };

    metrics::record_request(&method, response.status().as_u16(), start_time);
    response
}

async fn forward(
    client: &Client<HttpConnector, Body>,
    parts: &mut Parts,
    body: Body,
    endpoint: &Endpoint,
) -> Result<Response, UpstreamError> {
    let uri = request::upstream_uri(endpoint, parts.uri.query())?;
    let host = HeaderValue::from_str(&endpoint.host)?;

    let mut builder = Request::builder()
        .method(endpoint.method.clone())
        .uri(uri)
        .version(Version::HTTP_11);
    if let Some(headers) = builder.headers_mut() {
        *headers = std::mem::take(&mut parts.headers);
        request::strip_hop_by_hop(headers);
        headers.insert(header::HOST, host);
    }
    let upstream = builder.body(body)?;

    let response = client.request(upstream).await?;
    let (mut resp_parts, resp_body): (_, hyper::body::Incoming) = response.into_parts();
    request::strip_hop_by_hop(&mut resp_parts.headers);
    Ok(Response::from_parts(resp_parts, Body::new(resp_body)))
}
