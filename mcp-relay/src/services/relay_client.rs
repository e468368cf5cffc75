//! Outbound client for a running relay.
//!
//! Posts `{ action, parameters }` to `{base_url}/{service}` with trace
//! context propagated.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use service_core::observability::TracedClientExt;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct RelayClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for RelayClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{service}/{action} failed with status {status}: {message}")]
    Status {
        service: String,
        action: String,
        status: u16,
        message: String,
        body: Value,
    },
}

impl RelayClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RelayClientError::Status { status, .. } => Some(*status),
            RelayClientError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

pub struct RelayClient {
    client: Client,
    config: RelayClientConfig,
}

impl RelayClient {
    pub fn new(config: RelayClientConfig) -> Result<Self, RelayClientError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    /// Invoke `action` on `service`. `None` parameters are sent as `{}`.
    pub async fn call(
        &self,
        service: &str,
        action: &str,
        parameters: Option<Value>,
    ) -> Result<Value, RelayClientError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), service);
        let payload = json!({
            "action": action,
            "parameters": parameters.unwrap_or_else(|| json!({})),
        });

        let response = self
            .client
            .traced_post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                RelayClientError::Transport(e)
            })?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(RelayClientError::Status {
                service: service.to_string(),
                action: action.to_string(),
                status: status.as_u16(),
                message,
                body,
            });
        }

        Ok(body)
    }

    pub async fn list_tables(&self) -> Result<Vec<String>, RelayClientError> {
        let body = self.call("supabase", "list_tables", None).await?;
        Ok(body["tables"]
            .as_array()
            .map(|tables| {
                tables
                    .iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default())
    }

    pub async fn read_records(
        &self,
        table: &str,
        filter: Option<Value>,
    ) -> Result<Value, RelayClientError> {
        let mut parameters = json!({ "table": table });
        if let Some(filter) = filter {
            parameters["filter"] = filter;
        }
        self.call("supabase", "read_records", Some(parameters)).await
    }

    pub async fn get_transcript(
        &self,
        url: &str,
        lang: Option<&str>,
    ) -> Result<Value, RelayClientError> {
        let mut parameters = json!({ "url": url });
        if let Some(lang) = lang {
            parameters["lang"] = json!(lang);
        }
        self.call("youtube", "get_transcript", Some(parameters)).await
    }
}
