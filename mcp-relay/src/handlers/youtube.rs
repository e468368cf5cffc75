use axum::Json;
use serde_json::Value;

use crate::error::RelayError;
use crate::models::Envelope;
use crate::services::get_transcript;

/// POST /youtube
pub async fn youtube(Envelope(envelope): Envelope) -> Result<Json<Value>, RelayError> {
    get_transcript(&envelope.action(), envelope.parameters()).map(Json)
}
