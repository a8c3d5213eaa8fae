use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::physician::models::PhysicianId;
use crate::domain::physician::ports::PhysicianServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Soft delete: the physician disappears from listings but keeps its record.
pub async fn deactivate_physician(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(physician_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let physician_id =
        PhysicianId::from_string(&physician_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .physician_service
        .deactivate_physician(&physician_id)
        .await
        .map_err(ApiError::from)?;

    tracing::debug!(
        physician_id = %physician_id,
        performed_by = %user.login,
        "Physician deactivated over HTTP"
    );

    Ok(StatusCode::NO_CONTENT)
}
