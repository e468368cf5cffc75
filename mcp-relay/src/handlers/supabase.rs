use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::RelayError;
use crate::models::Envelope;
use crate::AppState;

/// POST /supabase
pub async fn supabase(
    State(state): State<AppState>,
    Envelope(envelope): Envelope,
) -> Result<Json<Value>, RelayError> {
    let action = envelope.action();
    tracing::info!(action = %action, parameters = ?envelope.parameters, "Received request");

    state
        .gateway
        .handle(&action, envelope.parameters())
        .map(Json)
}
