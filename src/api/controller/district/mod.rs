//! District controller: connects routes to district usecases

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::district_dto::DashboardData;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct DistrictController;

impl DistrictController {
    /// `GET /api/districts/{state}` — upstream records for one state.
    pub async fn get_districts(
        State(state): State<AppState>,
        Path(state_name): Path<String>,
    ) -> Result<Json<Value>, AppError> {
        Ok(Json(
            state
                .district_service
                .districts_for_state(&state_name)
                .await?,
        ))
    }

    /// `GET|POST /get_data` — fixed-state payload for the dashboard page.
    /// Any request body is ignored.
    pub async fn get_data(
        State(state): State<AppState>,
    ) -> Result<Json<DashboardData>, AppError> {
        Ok(Json(state.district_service.dashboard_data().await?))
    }
}
