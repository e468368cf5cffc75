//! The `{ action, parameters }` body shared by every POST endpoint.

use std::borrow::Cow;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::RelayError;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub action: Option<Value>,
    /// `None` when the key is absent; an explicit `null` is kept as
    /// `Some(Value::Null)` so it can be echoed back.
    #[serde(default, deserialize_with = "present_value")]
    pub parameters: Option<Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RequestEnvelope {
    /// Parse a raw body.
    ///
    /// An empty body, or a JSON value that is not an object, yields an
    /// envelope with neither action nor parameters. Only syntactically
    /// invalid JSON is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value =
            serde_json::from_slice(body).map_err(|e| RelayError::MalformedBody(e.to_string()))?;

        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| RelayError::MalformedBody(e.to_string())),
            _ => Ok(Self::default()),
        }
    }

    /// The action name; absent or null renders as the empty string, so
    /// templates read `Unsupported action: ` rather than naming
    /// `undefined` or `null`.
    pub fn action(&self) -> Cow<'_, str> {
        match &self.action {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(value) => display_value(value),
        }
    }

    /// Parameters as a lookup view. Missing or non-object parameters behave
    /// as an empty mapping.
    pub fn parameters(&self) -> Parameters<'_> {
        Parameters {
            fields: self.parameters.as_ref().and_then(Value::as_object),
        }
    }
}

/// Extracts a [`RequestEnvelope`] regardless of `Content-Type`.
pub struct Envelope(pub RequestEnvelope);

#[async_trait]
impl<S> FromRequest<S> for Envelope
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| RelayError::MalformedBody(e.body_text()))?;

        RequestEnvelope::from_slice(&body).map(Envelope)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parameters<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Parameters<'a> {
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }

    /// Like [`Parameters::get`], but treats "empty" values as absent.
    pub fn present(&self, key: &str) -> Option<&'a Value> {
        self.get(key).filter(|value| is_present(value))
    }
}

/// Whether a parameter counts as supplied: not null, `false`, zero or `""`.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a value for message templates: strings verbatim, anything
/// else as JSON.
///
/// Non-strings keep their JSON text: `[1,2]` stays `[1,2]` and an object
/// stays `{"a":1}`, not the `1,2` or `[object Object]` of a string coercion.
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
