use std::sync::Arc;

use auth::TokenCodec;
use clinic_service::config::Config;
use clinic_service::domain::authentication::models::Login;
use clinic_service::domain::authentication::models::Secret;
use clinic_service::domain::authentication::service::Authenticator;
use clinic_service::domain::physician::service::PhysicianService;
use clinic_service::inbound::http::router::create_router;
use clinic_service::outbound::repositories::PostgresCredentialStore;
use clinic_service::outbound::repositories::PostgresPhysicianRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "clinic-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_issuer = %config.jwt.issuer,
        jwt_expiration_hours = config.jwt.expiration_hours,
        default_page_size = config.pagination.default_page_size,
        max_page_size = config.pagination.max_page_size,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let credential_store = Arc::new(PostgresCredentialStore::new(pg_pool.clone())?);

    if let Some(bootstrap_user) = &config.bootstrap_user {
        let login = Login::new(bootstrap_user.login.clone())?;
        let secret = Secret::new(bootstrap_user.password.clone())?;

        if credential_store.ensure_user(&login, &secret).await? {
            tracing::info!(login = %login, "Bootstrap user created");
        } else {
            tracing::debug!(login = %login, "Bootstrap user already present");
        }
    }

    let token_codec = Arc::new(
        TokenCodec::new(config.jwt.secret.as_bytes(), config.jwt.token_lifetime()?)
            .with_issuer(&config.jwt.issuer),
    );

    let authenticator = Arc::new(Authenticator::new(
        credential_store,
        Arc::clone(&token_codec),
    ));
    let physician_repository = Arc::new(PostgresPhysicianRepository::new(pg_pool));
    let physician_service = Arc::new(PhysicianService::new(physician_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        physician_service,
        authenticator,
        token_codec,
        config.pagination,
    );

    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
