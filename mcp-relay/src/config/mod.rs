use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_SUPABASE_URL: &str = "https://example.supabase.co";

/// Process-wide configuration, read once at startup and handed to the
/// router as state.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub supabase: SupabaseConfig,
    pub telemetry: TelemetryConfig,
    pub cors: CorsConfig,
}

/// Upstream data service. Only reported at startup; every response is mocked.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// OTLP collector endpoint. Unset disables span export.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let mut common = core_config::Config::load()?;
        if let Some(port) = env::var("PORT").ok().filter(|p| !p.is_empty()) {
            common.port = parse_port(&port)?;
        }

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(RelayConfig {
            common,
            supabase: SupabaseConfig {
                url: get_env("SUPABASE_URL", Some(DEFAULT_SUPABASE_URL), is_prod)?,
                key: Secret::new(get_env("SUPABASE_KEY", Some(""), is_prod)?),
            },
            telemetry: TelemetryConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|e| !e.is_empty()),
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref()),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    resolve(key, env::var(key).ok(), default, is_prod)
}

fn resolve(
    key: &str,
    value: Option<String>,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match value {
        Some(val) => Ok(val),
        None if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        None => default.map(str::to_string).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
        }),
    }
}

fn parse_port(raw: &str) -> Result<u16, AppError> {
    raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("PORT must be a valid port number: {}", e))
    })
}

fn parse_origins(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_explicit_value() {
        let value = resolve("SUPABASE_URL", Some("https://x.test".into()), Some("d"), true);
        assert_eq!(value.unwrap(), "https://x.test");
    }

    #[test]
    fn resolve_uses_default_outside_production() {
        let value = resolve("SUPABASE_URL", None, Some(DEFAULT_SUPABASE_URL), false);
        assert_eq!(value.unwrap(), DEFAULT_SUPABASE_URL);
    }

    #[test]
    fn resolve_requires_value_in_production() {
        let err = resolve("SUPABASE_KEY", None, Some(""), true).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("SUPABASE_KEY"));
    }

    #[test]
    fn resolve_without_default_fails() {
        assert!(resolve("SOMETHING", None, None, false).is_err());
    }

    #[test]
    fn parse_port_rejects_garbage() {
        assert_eq!(parse_port(" 3000 ").unwrap(), 3000);
        assert!(parse_port("eighty").is_err());
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn parse_origins_splits_and_trims() {
        assert!(parse_origins(None).is_empty());
        assert!(parse_origins(Some(" , ")).is_empty());
        assert_eq!(
            parse_origins(Some("https://a.test, https://b.test")),
            vec!["https://a.test".to_string(), "https://b.test".to_string()]
        );
    }
}
