use serde_json::Value;
use tracing::{info, warn};

use crate::api::dto::district_dto::DashboardData;
use crate::core::client::district_records_gateway::DistrictRecordsGateway;
use crate::errors::{upstream_error, AppError};

/// State queried for the dashboard payload, regardless of request input.
pub const DASHBOARD_STATE: &str = "KARNATAKA";

/// Provenance label attached to dashboard payloads.
pub const DASHBOARD_SOURCE: &str = "MGNREGA API";

pub struct DistrictService<G> {
    gateway: G,
}

impl<G: DistrictRecordsGateway> DistrictService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Records for one state. The filter value is always uppercased; the
    /// upstream stores `state_name` in capitals.
    pub async fn districts_for_state(&self, state_name: &str) -> Result<Value, AppError> {
        self.state_records(&state_name.to_uppercase()).await
    }

    /// Fixed-state payload for the dashboard page.
    pub async fn dashboard_data(&self) -> Result<DashboardData, AppError> {
        let records = self.state_records(DASHBOARD_STATE).await?;

        Ok(DashboardData {
            records,
            source: DASHBOARD_SOURCE,
        })
    }

    async fn state_records(&self, state_name: &str) -> Result<Value, AppError> {
        let mut data = self
            .gateway
            .fetch_state_records(state_name)
            .await
            .map_err(|e| {
                warn!(state = state_name, error = %e, "upstream fetch failed");
                upstream_error(e)
            })?;

        match data.get_mut("records") {
            Some(records) => {
                info!(
                    state = state_name,
                    count = records.as_array().map_or(0, |r| r.len()),
                    "records fetched"
                );
                Ok(records.take())
            }
            None => {
                warn!(state = state_name, "upstream response has no records key");
                Err(AppError::NoRecordsFound)
            }
        }
    }
}
