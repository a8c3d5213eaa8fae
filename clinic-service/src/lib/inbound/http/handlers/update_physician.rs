use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AddressRequest;
use super::ApiError;
use super::ApiSuccess;
use super::PhysicianResponseData;
use crate::domain::physician::models::DocumentNumber;
use crate::domain::physician::models::EmailAddress;
use crate::domain::physician::models::PhoneNumber;
use crate::domain::physician::models::PhysicianId;
use crate::domain::physician::models::PhysicianName;
use crate::domain::physician::models::UpdatePhysicianCommand;
use crate::domain::physician::ports::PhysicianServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

/// Partially update a physician. Absent fields keep their stored values.
pub async fn update_physician(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(physician_id): Path<String>,
    Json(body): Json<UpdatePhysicianRequest>,
) -> Result<ApiSuccess<PhysicianResponseData>, ApiError> {
    let physician_id =
        PhysicianId::from_string(&physician_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = body.try_into_command()?;

    let physician = state
        .physician_service
        .update_physician(&physician_id, command)
        .await
        .map_err(ApiError::from)?;

    tracing::debug!(
        physician_id = %physician.id,
        performed_by = %user.login,
        "Physician updated over HTTP"
    );

    Ok(ApiSuccess::new(StatusCode::OK, (&physician).into()))
}

/// HTTP request body for updating a physician (raw JSON).
///
/// Unknown fields, `id` included, are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePhysicianRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub address: Option<AddressRequest>,
    /// Accepted only to be rejected; specialty is fixed at registration.
    pub specialty: Option<serde_json::Value>,
}

impl UpdatePhysicianRequest {
    fn try_into_command(self) -> Result<UpdatePhysicianCommand, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.optional("name", self.name, PhysicianName::new);
        let email = errors.optional("email", self.email, EmailAddress::new);
        let phone = errors.optional("phone", self.phone, PhoneNumber::new);
        let document = errors.optional("document", self.document, DocumentNumber::new);
        let address = self
            .address
            .and_then(|address| address.parse("address", &mut errors));

        if self.specialty.is_some() {
            errors.add("specialty", "cannot be changed after registration");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UpdatePhysicianCommand {
            name,
            email,
            phone,
            document,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> UpdatePhysicianRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_only_supplied_fields_are_set() {
        let command = request(serde_json::json!({ "email": "x@clinic.com" }))
            .try_into_command()
            .unwrap();

        assert_eq!(command.email.unwrap().as_str(), "x@clinic.com");
        assert!(command.name.is_none());
        assert!(command.phone.is_none());
        assert!(command.document.is_none());
        assert!(command.address.is_none());
    }

    #[test]
    fn test_empty_body_is_valid() {
        let command = request(serde_json::json!({})).try_into_command().unwrap();

        assert!(command.name.is_none());
        assert!(command.email.is_none());
    }

    #[test]
    fn test_supplied_blank_field_is_rejected() {
        let errors = request(serde_json::json!({ "name": "   ", "document": "abc" }))
            .try_into_command()
            .unwrap_err();
        let fields: Vec<&str> = errors.violations().iter().map(|v| v.field.as_str()).collect();

        assert_eq!(fields, vec!["name", "document"]);
    }

    #[test]
    fn test_partial_address_is_rejected() {
        let errors = request(serde_json::json!({ "address": { "city": "Cusco" } }))
            .try_into_command()
            .unwrap_err();

        assert_eq!(errors.violations().len(), 4);
        assert!(errors.violations().iter().all(|v| v.field != "address.city"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_value::<UpdatePhysicianRequest>(
            serde_json::json!({ "id": 99, "name": "Zed" }),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_specialty_change_is_rejected() {
        let errors = request(serde_json::json!({ "specialty": "DERMATOLOGY" }))
            .try_into_command()
            .unwrap_err();

        assert_eq!(errors.violations()[0].field, "specialty");
    }
}
