use std::sync::Arc;
use std::time::Duration;

use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::deactivate_physician::deactivate_physician;
use super::handlers::get_physician::get_physician;
use super::handlers::list_physicians::list_physicians;
use super::handlers::register_physician::register_physician;
use super::handlers::update_physician::update_physician;
use super::middleware::authenticate as auth_middleware;
use crate::config::PaginationConfig;
use crate::domain::authentication::service::Authenticator;
use crate::domain::physician::service::PhysicianService;
use crate::outbound::repositories::PostgresCredentialStore;
use crate::outbound::repositories::PostgresPhysicianRepository;

#[derive(Clone)]
pub struct AppState {
    pub physician_service: Arc<PhysicianService<PostgresPhysicianRepository>>,
    pub authenticator: Arc<Authenticator<PostgresCredentialStore>>,
    pub token_codec: Arc<TokenCodec>,
    pub pagination: PaginationConfig,
}

pub fn create_router(
    physician_service: Arc<PhysicianService<PostgresPhysicianRepository>>,
    authenticator: Arc<Authenticator<PostgresCredentialStore>>,
    token_codec: Arc<TokenCodec>,
    pagination: PaginationConfig,
) -> Router {
    let state = AppState {
        physician_service,
        authenticator,
        token_codec,
        pagination,
    };

    let public_routes = Router::new().route("/api/auth/login", post(authenticate));

    let protected_routes = Router::new()
        .route(
            "/api/physicians",
            get(list_physicians).post(register_physician),
        )
        .route(
            "/api/physicians/:physician_id",
            get(get_physician)
                .put(update_physician)
                .delete(deactivate_physician),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
