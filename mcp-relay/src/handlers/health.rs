use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;
use service_core::observability::render_metrics;

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "MCP Server is running"
    }))
}

/// GET /
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "MCP Supabase Server",
        "endpoints": {
            "/health": "Health check",
            "/supabase": "Supabase MCP endpoint",
            "/youtube": "YouTube transcript mock endpoint",
            "/:service": "Generic mock endpoint for any other service"
        }
    }))
}

/// GET /metrics
pub async fn metrics() -> Result<impl IntoResponse, AppError> {
    let body = render_metrics().ok_or(AppError::ServiceUnavailable)?;
    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        body,
    ))
}
