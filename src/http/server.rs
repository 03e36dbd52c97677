//! HTTP server setup and the forwarding handler.
//!
//! # Responsibilities
//! - Create the Axum Router with a catch-all forwarding route
//! - Wire up request tracing
//! - Serve on an already-bound listener until shutdown
//! - Forward every request to the single configured upstream

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::http::request::rewrite_request;
use crate::http::response::{relay_response, ForwardError};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub client: Client<HttpConnector, Body>,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            config: Arc::new(config),
            client,
        }
    }
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: Arc<ProxyConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let state = AppState::new(config);
        let config = state.config.clone();
        let router = Self::build_router(state);
        Self { router, config }
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(forward))
            .route("/", any(forward))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream,
            "Listening"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Forwarding handler: rewrite, send upstream, relay.
async fn forward(State(state): State<AppState>, request: Request<Body>) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info!(
        remote_addr = %remote_addr,
        method = %request.method(),
        url = %request.uri(),
        "Receive http request"
    );

    match send_upstream(&state, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, upstream = %state.config.upstream, "Got error from upstream");
            e.into_response()
        }
    }
}

async fn send_upstream(state: &AppState, request: Request<Body>) -> Result<Response, ForwardError> {
    let config = &state.config;
    let request = rewrite_request(request, &config.upstream, config.credentials())?;
    let response = state.client.request(request).await?;
    Ok(relay_response(response))
}
