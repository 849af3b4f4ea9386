use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without one the service keeps submissions in memory.
    pub database_url: Option<String>,
    pub transactions_api_url: String,
    pub api_key: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub http_timeout_secs: u64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let transactions_api_url = env_required("TRANSACTIONS_API_URL")?;
        let api_key = env_required("CHS_API_KEY")?;

        let host: IpAddr = env_or("REA_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid REA_HOST: {e}"))?;

        let port: u16 = env_or("REA_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid REA_PORT: {e}"))?;

        let max_body_size: usize = env_or("REA_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid REA_MAX_BODY_SIZE: {e}"))?;

        let http_timeout_secs: u64 = env_or("REA_HTTP_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid REA_HTTP_TIMEOUT_SECS: {e}"))?;

        let log_level = env_or("REA_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            transactions_api_url,
            api_key,
            host,
            port,
            max_body_size,
            http_timeout_secs,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
