use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::PhysicianResponseData;
use crate::domain::physician::models::PhysicianId;
use crate::domain::physician::ports::PhysicianServicePort;
use crate::inbound::http::router::AppState;

/// Fetch one physician by id. Deactivated physicians are still returned.
pub async fn get_physician(
    State(state): State<AppState>,
    Path(physician_id): Path<String>,
) -> Result<ApiSuccess<PhysicianResponseData>, ApiError> {
    let physician_id =
        PhysicianId::from_string(&physician_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .physician_service
        .get_physician(&physician_id)
        .await
        .map_err(ApiError::from)
        .map(|ref physician| ApiSuccess::new(StatusCode::OK, physician.into()))
}
