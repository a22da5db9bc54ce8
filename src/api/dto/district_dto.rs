//! District API DTOs

use serde::Serialize;
use serde_json::Value;

/// Payload consumed by the dashboard page script. `records` is the upstream
/// sequence passed through opaquely.
#[derive(Serialize, Debug)]
pub struct DashboardData {
    pub records: Value,
    pub source: &'static str,
}
