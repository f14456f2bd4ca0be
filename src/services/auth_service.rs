//! Authentication service - registration and login workflows.
//!
//! Registration is the one place in the system with a real transactional
//! invariant: the user write and the conditional employee provisioning
//! write share a single Unit of Work transaction, so an employee-role user
//! can never exist without its employee counterpart. The notification
//! event is published strictly after commit and on a separate failure
//! boundary: a publish error is logged and swallowed, never unwound into
//! the caller's result.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, EmployeeDefaults, USER_EVENTS_CHANNEL};
use crate::domain::{Employee, NotificationEvent, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{EventPublisher, TransactionContext, UnitOfWork, UserRepository};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username (token subject)
    pub sub: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT authentication token
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub token: String,
    /// User's unique id
    #[schema(example = 101)]
    pub id: i64,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "ROLE_EMPLOYEE")]
    pub role: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user, provisioning a linked employee record for
    /// employee-role users
    async fn register(&self, username: String, password: String) -> AppResult<User>;

    /// Verify credentials and return a signed token plus user identity
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a JWT for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.username.clone(),
        user_id: user.id,
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Verify a JWT and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Provision the employee record linked to a freshly created user.
///
/// Idempotent: an existing record with the user's id is skipped silently.
/// Runs inside the registration transaction; any store failure maps to
/// `Provisioning` and rolls the whole registration back.
pub async fn provision_employee(
    ctx: &TransactionContext<'_>,
    user: &User,
    defaults: &EmployeeDefaults,
) -> AppResult<()> {
    if ctx.employees().find_by_id(user.id).await?.is_some() {
        tracing::debug!(
            user_id = user.id,
            "employee record already exists, skipping provisioning"
        );
        return Ok(());
    }

    let record = Employee {
        id: Some(user.id),
        firstname: user.username.clone(),
        lastname: String::new(),
        email: format!("{}@{}", user.username, defaults.email_domain),
        department_id: defaults.department_id.clone(),
        role_id: defaults.role_id.clone(),
    };

    ctx.employees()
        .create(record)
        .await
        .map_err(|e| AppError::provisioning(e.to_string()))?;

    tracing::info!(user_id = user.id, "employee record provisioned");
    Ok(())
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    publisher: Arc<dyn EventPublisher>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance
    pub fn new(uow: Arc<U>, publisher: Arc<dyn EventPublisher>, config: Config) -> Self {
        Self {
            uow,
            publisher,
            config,
        }
    }

    /// Publish a notification event, swallowing any failure.
    ///
    /// Delivery is at-most-once by contract; a lost event must never change
    /// the outcome of the registration or login that triggered it.
    async fn publish_event(&self, event: NotificationEvent) {
        if let Err(e) = self.publisher.publish(USER_EVENTS_CHANNEL, &event).await {
            tracing::warn!(
                error = %e,
                event_type = %event.event_type,
                user_id = event.user_id,
                "failed to publish notification event"
            );
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, username: String, password: String) -> AppResult<User> {
        // Hash before entering the transaction; plaintext never goes further
        let password_hash = Password::new(&password)?.into_string();
        let defaults = self.config.employee_defaults.clone();

        let user = self
            .uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    if ctx.users().find_by_username(&username).await?.is_some() {
                        return Err(AppError::DuplicateUsername);
                    }

                    let user = ctx.users().create(username, password_hash).await?;

                    if user.role.is_employee() {
                        provision_employee(&ctx, &user, &defaults).await?;
                    }

                    Ok(user)
                })
            })
            .await?;

        // Outside the transaction boundary: best-effort only
        self.publish_event(NotificationEvent::user_registered(&user))
            .await;

        Ok(user)
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.uow.users().find_by_username(&username).await?;

        // Verify against a dummy hash when the user doesn't exist so the
        // response does not leak which usernames are registered.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Unknown user and wrong password are deliberately the same outcome
        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since we verified user_exists is true
        let user = user_result.as_ref().unwrap();
        let token = generate_token(user, &self.config)?;

        self.publish_event(NotificationEvent::user_logged_in(user))
            .await;

        Ok(TokenResponse {
            token,
            id: user.id,
            username: user.username.clone(),
            role: user.role.to_string(),
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}
