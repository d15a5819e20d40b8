//! Authentication routes
//!
//! Provides the signup, login, and profile endpoints.
//!
//! Password hashing and verification run on the blocking thread pool;
//! token operations use the pre-computed keys held in AppState.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use yoga_trainer_shared::types::{AuthResponse, LoginRequest, SignupRequest};
use yoga_trainer_shared::User;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
}

/// Register a new user
///
/// POST /api/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = UserService::signup(
        &state.db,
        state.jwt(),
        &req.email,
        &req.password,
        &req.confirm_password,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /api/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = UserService::login(&state.db, state.jwt(), &req.email, &req.password).await?;
    Ok(Json(response))
}

/// Get the authenticated user (requires a valid Bearer token)
///
/// GET /api/me
async fn me(State(state): State<AppState>, auth_user: AuthUser) -> ApiResult<Json<User>> {
    let user = UserService::get_profile(&state.db, auth_user.user_id).await?;
    Ok(Json(user))
}
