use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Gateway to the upstream district-records resource. The service layer
/// depends on this trait so tests can script the upstream payload.
#[async_trait]
pub trait DistrictRecordsGateway: Send + Sync {
    /// Fetch the raw upstream payload for one `state_name` filter value.
    async fn fetch_state_records(&self, state_name: &str) -> Result<Value>;
}
