//! Router assembly and server lifecycle.

use std::any::Any;
use std::future::IntoFuture;
use std::sync::Arc;

use axum::{
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::cors_layer, metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::request_id_middleware,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::error::{RelayError, GENERIC_ERROR_MESSAGE};
use crate::handlers;
use crate::services::Gateway;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        let gateway = Gateway::new(config.supabase.url.clone());
        Self {
            config: Arc::new(config),
            gateway,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .route("/supabase", post(handlers::supabase))
        .route("/youtube", post(handlers::youtube))
        .route("/:service", post(handlers::service_echo))
        .with_state(state);

    apply_middleware(router, &config)
}

/// Wrap `router` in the relay's middleware stack: panic recovery, request
/// metrics, tracing spans, request ids, security headers and CORS.
pub fn apply_middleware(router: Router, config: &RelayConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors_layer(&config.cors.allowed_origins))
}

/// A panicking handler becomes a 500 envelope instead of a dropped
/// connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        GENERIC_ERROR_MESSAGE.to_string()
    };

    RelayError::Internal(anyhow::anyhow!(message)).into_response()
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Bind the listener. Port 0 picks a free port, which tests rely on.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let address = config.common.bind_address();
        let state = AppState::new(config);
        let app = build_router(state);

        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
