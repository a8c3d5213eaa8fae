use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::models::Login;
use crate::domain::authentication::models::Secret;
use crate::domain::authentication::ports::AuthenticatorPort;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

const TOKEN_TYPE: &str = "Bearer";

pub async fn authenticate(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let credentials = body.try_into_credentials()?;

    let token = state
        .authenticator
        .authenticate(credentials)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            token: token.access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_at: token.expires_at,
        },
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    login: Option<String>,
    password: Option<String>,
}

impl AuthenticateRequestBody {
    fn try_into_credentials(self) -> Result<Credentials, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let login = errors.required("login", self.login, Login::new);
        let secret = errors.required("password", self.password, Secret::new);

        match (login, secret) {
            (Some(login), Some(secret)) => Ok(Credentials::new(login, secret)),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateResponseData {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}
