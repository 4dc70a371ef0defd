use axum::Json;
use chrono::Utc;

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is up", body = HealthDto),
    ),
)]
pub async fn get_health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}
