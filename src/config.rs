//! Environment-driven configuration (`MGNREGA_*` variables, `.env` aware).

use std::env;

use anyhow::{Context, Result};

/// The fixed data.gov.in resource holding district-wise MGNREGA records.
pub const DEFAULT_API_BASE_URL: &str =
    "https://api.data.gov.in/resource/ee03643a-ee4c-48c2-ac30-9f2ff26ab722";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RECORD_LIMIT: u32 = 1000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub api_key: String,
    pub http_timeout_secs: u64,
    pub record_limit: u32,
}

impl AppConfig {
    /// Reads configuration from the process environment. The API key is the
    /// only required value; everything else falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let bind_addr =
            env::var("MGNREGA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let api_base_url =
            env::var("MGNREGA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_key = env::var("MGNREGA_API_KEY")
            .context("MGNREGA_API_KEY is not set; supply the data.gov.in key via the environment or .env")?;
        let http_timeout_secs =
            parsed_var("MGNREGA_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
        let record_limit = parsed_var("MGNREGA_RECORD_LIMIT", DEFAULT_RECORD_LIMIT)?;

        Ok(Self {
            bind_addr,
            api_base_url,
            api_key,
            http_timeout_secs,
            record_limit,
        })
    }
}

fn parsed_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {key}={raw}: {e}")),
        Err(_) => Ok(default),
    }
}
