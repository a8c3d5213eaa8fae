use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::validation::FieldViolation;
use super::validation::ValidationErrors;
use crate::domain::authentication::errors::AuthError;
use crate::domain::physician::models::Address;
use crate::domain::physician::models::Physician;
use crate::domain::physician::models::RequiredText;
use crate::physician::errors::PhysicianError;

pub mod authenticate;
pub mod deactivate_physician;
pub mod get_physician;
pub mod list_physicians;
pub mod register_physician;
pub mod update_physician;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Vec::new(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, Vec::new()),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed".to_string(),
                errors.into_violations(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, Vec::new()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, Vec::new()),
        };

        (
            status,
            Json(ApiResponseBody::new_error(status, message, errors)),
        )
            .into_response()
    }
}

impl From<PhysicianError> for ApiError {
    fn from(err: PhysicianError) -> Self {
        match err {
            PhysicianError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PhysicianError::DocumentAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            PhysicianError::InvalidId(_) => ApiError::BadRequest(err.to_string()),
            PhysicianError::BlankField(_)
            | PhysicianError::InvalidEmail(_)
            | PhysicianError::InvalidDocument(_)
            | PhysicianError::InvalidSpecialty(_)
            | PhysicianError::InvalidPageRequest(_) => ApiError::UnprocessableEntity(err.to_string()),
            PhysicianError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::Password(_) | AuthError::Token(_) | AuthError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String, errors: Vec<FieldViolation>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message, errors },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

/// Address as it appears in request bodies; every part is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressRequest {
    street: Option<String>,
    district: Option<String>,
    city: Option<String>,
    number: Option<String>,
    complement: Option<String>,
}

impl AddressRequest {
    /// Validate every part, reporting violations as `{prefix}.{part}`.
    fn parse(self, prefix: &str, errors: &mut ValidationErrors) -> Option<Address> {
        let mut part = |name: &str, value: Option<String>| {
            errors.required(&format!("{}.{}", prefix, name), value, RequiredText::new)
        };

        let street = part("street", self.street);
        let district = part("district", self.district);
        let city = part("city", self.city);
        let number = part("number", self.number);
        let complement = part("complement", self.complement);

        Some(Address {
            street: street?,
            district: district?,
            city: city?,
            number: number?,
            complement: complement?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressData {
    pub street: String,
    pub district: String,
    pub city: String,
    pub number: String,
    pub complement: String,
}

impl From<&Address> for AddressData {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.as_str().to_string(),
            district: address.district.as_str().to_string(),
            city: address.city.as_str().to_string(),
            number: address.number.as_str().to_string(),
            complement: address.complement.as_str().to_string(),
        }
    }
}

/// Physician as returned by every physician endpoint. The active flag stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhysicianResponseData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub specialty: String,
    pub address: AddressData,
}

impl From<&Physician> for PhysicianResponseData {
    fn from(physician: &Physician) -> Self {
        Self {
            id: physician.id.0,
            name: physician.name.as_str().to_string(),
            email: physician.email.as_str().to_string(),
            phone: physician.phone.as_str().to_string(),
            document: physician.document.as_str().to_string(),
            specialty: physician.specialty.as_str().to_string(),
            address: (&physician.address).into(),
        }
    }
}
