use mcp_relay::config::{
    CorsConfig, RelayConfig, SupabaseConfig, TelemetryConfig, DEFAULT_SUPABASE_URL,
};
use mcp_relay::services::{RelayClient, RelayClientConfig};
use mcp_relay::startup::Application;
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use service_core::observability::init_metrics;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub http: reqwest::Client,
}

/// Configuration that never touches the environment.
pub fn test_config() -> RelayConfig {
    RelayConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port for testing
        },
        supabase: SupabaseConfig {
            url: DEFAULT_SUPABASE_URL.to_string(),
            key: Secret::new("test-key".to_string()),
        },
        telemetry: TelemetryConfig {
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        },
        cors: CorsConfig::default(),
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        init_metrics();

        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let http = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if http.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            http,
        }
    }

    pub fn relay_client(&self) -> RelayClient {
        RelayClient::new(RelayClientConfig {
            base_url: self.address.clone(),
            request_timeout: Duration::from_secs(5),
        })
        .expect("Failed to build relay client")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.http
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.http
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.http
            .post(format!("{}{}", self.address, path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
