use axum::extract::State;
use axum::http::header;
use axum::http::HeaderName;
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
use crate::domain::physician::models::PhysicianName;
use crate::domain::physician::models::RegisterPhysicianCommand;
use crate::domain::physician::models::Specialty;
use crate::domain::physician::ports::PhysicianServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

/// Register a physician and point the client at its canonical URL.
pub async fn register_physician(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<RegisterPhysicianRequest>,
) -> Result<([(HeaderName, String); 1], ApiSuccess<PhysicianResponseData>), ApiError> {
    let command = body.try_into_command()?;

    let physician = state
        .physician_service
        .register_physician(command)
        .await
        .map_err(ApiError::from)?;

    tracing::debug!(
        physician_id = %physician.id,
        performed_by = %user.login,
        "Physician registered over HTTP"
    );

    let location = format!("/api/physicians/{}", physician.id);

    Ok((
        [(header::LOCATION, location)],
        ApiSuccess::new(StatusCode::CREATED, (&physician).into()),
    ))
}

/// HTTP request body for registering a physician (raw JSON)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterPhysicianRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub specialty: Option<String>,
    pub address: Option<AddressRequest>,
}

impl RegisterPhysicianRequest {
    fn try_into_command(self) -> Result<RegisterPhysicianCommand, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.required("name", self.name, PhysicianName::new);
        let email = errors.required("email", self.email, EmailAddress::new);
        let phone = errors.required("phone", self.phone, PhoneNumber::new);
        let document = errors.required("document", self.document, DocumentNumber::new);
        let specialty = errors.required("specialty", self.specialty, |s| s.parse::<Specialty>());
        let address = match self.address {
            Some(address) => address.parse("address", &mut errors),
            None => {
                errors.add("address", "must not be null");
                None
            }
        };

        match (name, email, phone, document, specialty, address) {
            (Some(name), Some(email), Some(phone), Some(document), Some(specialty), Some(address)) => {
                Ok(RegisterPhysicianCommand {
                    name,
                    email,
                    phone,
                    document,
                    specialty,
                    address,
                })
            }
            _ => Err(errors),
        }
    }
}
