use mcp_relay::config::RelayConfig;
use mcp_relay::startup::Application;
use service_core::observability::{init_metrics, init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RelayConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "mcp-relay",
        &config.telemetry.log_level,
        config.telemetry.otlp_endpoint.as_deref(),
    );
    init_metrics();

    info!(
        port = config.common.port,
        supabase_url = %config.supabase.url,
        "Starting MCP relay"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
