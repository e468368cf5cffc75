use serde::Serialize;
use serde_json::Value;

use crate::models::RequestEnvelope;

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// Catch-all for services without a dedicated mock. Never fails.
pub fn echo(service: &str, envelope: RequestEnvelope) -> EchoResponse {
    let message = format!("Mock response for {}/{}", service, envelope.action());
    tracing::info!(service = %service, action = %envelope.action(), "Mock request");

    EchoResponse {
        message,
        parameters: envelope.parameters,
    }
}
