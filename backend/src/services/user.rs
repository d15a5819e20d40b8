//! User service for signup, login, and profile lookup
//!
//! Each operation is a stateless validation chain:
//! validate -> lookup/create -> hash/verify -> issue token -> respond.
//! No partial state is left behind on any failure path; signup's single
//! durable write is the atomic user insert.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, UserRepository};
use sqlx::PgPool;
use uuid::Uuid;
use yoga_trainer_shared::types::AuthResponse;
use yoga_trainer_shared::validation::{validate_email, validate_password};
use yoga_trainer_shared::User;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Password hashing is offloaded to the blocking thread pool via
    /// `spawn_blocking`.
    pub async fn signup(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<AuthResponse, ApiError> {
        if password != confirm_password {
            return Err(ApiError::Validation("Passwords do not match".to_string()));
        }

        validate_email(email).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;

        // Precondition check; the store's unique constraint still guards the
        // concurrent-signup race below.
        if UserRepository::email_exists(pool, email).await? {
            return Err(ApiError::Conflict("User already exists".to_string()));
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = match UserRepository::create(pool, email, &password_hash).await {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e) => {
                return Err(ApiError::Conflict("User already exists".to_string()));
            }
            Err(e) => return Err(ApiError::Database(e)),
        };

        // Mint token (uses pre-computed keys - fast)
        let token = jwt_service
            .generate_token(user.id, &user.email)
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            result: user.into(),
            token,
        })
    }

    /// Login with email and password
    ///
    /// Password verification is offloaded to the blocking thread pool.
    /// Failure paths leave no side effects.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or_else(|| ApiError::NotFound("User does not exist".to_string()))?;

        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Authentication("Invalid credentials".to_string()));
        }

        let token = jwt_service
            .generate_token(user.id, &user.email)
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            result: user.into(),
            token,
        })
    }

    /// Resolve the authenticated user's record
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<User, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User does not exist".to_string()))?;

        Ok(user.into())
    }
}
