use async_trait::async_trait;
use auth::PasswordHasher;
use auth::Principal;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::models::Login;
use crate::domain::authentication::models::Secret;
use crate::domain::authentication::ports::CredentialStore;

/// Credential store over the `users` table.
///
/// Passwords are stored as Argon2id PHC strings.
pub struct PostgresCredentialStore {
    pool: PgPool,
    password_hasher: PasswordHasher,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    login: String,
    password_hash: String,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Result<Self, AuthError> {
        Ok(Self {
            pool,
            password_hasher: PasswordHasher::new()?,
        })
    }

    /// Insert an active user unless the login is already taken.
    ///
    /// # Returns
    /// `true` if a user was created
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    pub async fn ensure_user(&self, login: &Login, secret: &Secret) -> Result<bool, AuthError> {
        let password_hash = self.password_hasher.hash(secret.expose())?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, login, password_hash, active)
            VALUES ($1, $2, $3, TRUE)
            ON CONFLICT (login) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(login.as_str())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, login, password_hash
            FROM users
            WHERE login = $1 AND active
            "#,
        )
        .bind(credentials.login.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        self.check_secret(row, &credentials.secret)
    }
}

impl PostgresCredentialStore {
    /// Compare `secret` with the looked-up user, if any.
    ///
    /// A missing user still costs one Argon2 verification.
    fn check_secret(
        &self,
        row: Option<UserRow>,
        secret: &Secret,
    ) -> Result<Principal, AuthError> {
        let matched = match &row {
            Some(user) => self
                .password_hasher
                .verify(secret.expose(), &user.password_hash)?,
            None => self.password_hasher.verify_decoy(secret.expose()),
        };

        match row {
            Some(user) if matched => Ok(Principal::new(user.id, user.login)),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
