//! District routes (e.g., /api/districts/*)

use axum::{routing::get, Router};

use crate::api::controller::district::DistrictController;
use crate::app_state::AppState;

pub fn district_routes() -> Router<AppState> {
    Router::new().route("/{state}", get(DistrictController::get_districts))
}
