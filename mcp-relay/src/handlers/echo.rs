use axum::{extract::Path, Json};

use crate::models::Envelope;
use crate::services::{echo, EchoResponse};

/// POST /:service
pub async fn service_echo(
    Path(service): Path<String>,
    Envelope(envelope): Envelope,
) -> Json<EchoResponse> {
    Json(echo(&service, envelope))
}
