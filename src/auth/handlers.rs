use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{Credentials, LoginResponse, RegisterResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::{store_error, ApiError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::Internal("Failed to register user")
    })?;

    // A duplicate username surfaces here as a unique violation and maps to
    // the same generic 500 as any other store failure.
    let user = User::create(&state.db, &payload.username, &hash)
        .await
        .map_err(store_error("Failed to register user"))?;

    info!(user_id = user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully",
            user,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = User::find_by_username(&state.db, &payload.username)
        .await
        .map_err(store_error("Failed to login"))?
        .ok_or_else(|| {
            warn!(username = %payload.username, "login unknown username");
            ApiError::BadRequest("User not found")
        })?;

    let ok = verify_password(&payload.password, &user.password).map_err(|e| {
        error!(error = %e, "verify_password failed");
        ApiError::Internal("Failed to login")
    })?;

    if !ok {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::BadRequest("Invalid password"));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.username).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        ApiError::Internal("Failed to login")
    })?;

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
    }))
}
