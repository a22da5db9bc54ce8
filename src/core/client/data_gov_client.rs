use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::core::client::district_records_gateway::DistrictRecordsGateway;

/// Client for the data.gov.in MGNREGA district-records resource.
pub struct DataGovClient {
    client: Client,
    base_url: String,
    api_key: String,
    record_limit: u32,
}

impl DataGovClient {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            record_limit: config.record_limit,
        })
    }
}

#[async_trait]
impl DistrictRecordsGateway for DataGovClient {
    async fn fetch_state_records(&self, state_name: &str) -> Result<Value> {
        let limit = self.record_limit.to_string();

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api-key", self.api_key.as_str()),
                ("format", "json"),
                ("limit", limit.as_str()),
                ("filters[state_name]", state_name),
            ])
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call data.gov.in (url={}): {}", self.base_url, e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!(
                "data.gov.in returned {}: {} (url={})",
                status,
                text,
                self.base_url
            ));
        }

        let json: Value = resp.json().await.map_err(|e| {
            anyhow!(
                "Failed to decode data.gov.in response: {} (url={})",
                e,
                self.base_url
            )
        })?;

        debug!(state = state_name, "fetched upstream payload");

        Ok(json)
    }
}
