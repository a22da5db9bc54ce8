use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::client::data_gov_client::DataGovClient;
use crate::domain::district::service::district_service::DistrictService;

#[derive(Clone)]
pub struct AppState {
    pub district_service: Arc<DistrictService<DataGovClient>>,
}

pub fn build_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let gateway = DataGovClient::from_config(config)?;

    Ok(AppState {
        district_service: Arc::new(DistrictService::new(gateway)),
    })
}
