//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use tracing::warn;

use super::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, UserInfo,
};
use crate::domain::guest::{Guest, GuestRepository, UserRole};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub guests: Arc<dyn GuestRepository>,
    pub jwt_config: JwtConfig,
}

type HandlerError<T> = (StatusCode, Json<ApiResponse<T>>);

fn internal<T>(e: impl std::fmt::Display) -> HandlerError<T> {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(e.to_string())),
    )
}

fn user_info(guest: &Guest) -> UserInfo {
    UserInfo {
        id: guest.id.clone(),
        email: guest.email.clone(),
        first_name: guest.first_name.clone(),
        last_name: guest.last_name.clone(),
        role: guest.role.as_str().to_string(),
    }
}

fn token_response(
    guest: &Guest,
    jwt_config: &JwtConfig,
) -> Result<LoginResponse, jsonwebtoken::errors::Error> {
    let token = create_token(&guest.id, &guest.email, guest.role.as_str(), jwt_config)?;
    Ok(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: jwt_config.expiration_hours * 3600,
        user: user_info(guest),
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = ApiResponse<LoginResponse>),
        (status = 409, description = "Email or personal number already registered"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, HandlerError<LoginResponse>> {
    if !request.personal_number.chars().all(|c| c.is_ascii_digit()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("personal number must be 11 digits")),
        ));
    }

    let existing = state
        .guests
        .find_by_email(&request.email)
        .await
        .map_err(internal)?;
    if existing.is_some() {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error("Email already registered")),
        ));
    }

    let existing = state
        .guests
        .find_by_personal_number(&request.personal_number)
        .await
        .map_err(internal)?;
    if existing.is_some() {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error("Personal number already registered")),
        ));
    }

    let password_hash = hash_password(&request.password).map_err(internal)?;
    let guest = Guest::new(
        request.email,
        request.first_name,
        request.last_name,
        request.personal_number,
        request.phone_number,
        password_hash,
        UserRole::Guest,
    );

    state.guests.insert(guest.clone()).await.map_err(internal)?;

    let response = token_response(&guest, &state.jwt_config).map_err(internal)?;
    Ok(Json(ApiResponse::success(response)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, HandlerError<LoginResponse>> {
    let guest = state
        .guests
        .find_by_email(&request.email)
        .await
        .map_err(internal)?;

    let Some(guest) = guest else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    };

    if !guest.is_active {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Account is disabled")),
        ));
    }

    let password_valid = verify_password(&request.password, &guest.password_hash).unwrap_or(false);
    if !password_valid {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    }

    if let Err(e) = state.guests.record_login(&guest.id, Utc::now()).await {
        warn!(guest_id = %guest.id, error = %e, "Failed to stamp login time");
    }

    let response = token_response(&guest, &state.jwt_config).map_err(internal)?;
    Ok(Json(ApiResponse::success(response)))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current account", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserInfo>>, HandlerError<UserInfo>> {
    let guest = state
        .guests
        .find_by_id(&user.guest_id)
        .await
        .map_err(internal)?;

    let Some(guest) = guest else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Account not found")),
        ));
    };

    Ok(Json(ApiResponse::success(user_info(&guest))))
}

#[utoipa::path(
    put,
    path = "/api/v1/auth/change-password",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<EmptyData>),
        (status = 401, description = "Current password is wrong")
    )
)]
pub async fn change_password(
    State(state): State<AuthHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError<EmptyData>> {
    let guest = state
        .guests
        .find_by_id(&user.guest_id)
        .await
        .map_err(internal)?;

    let Some(mut guest) = guest else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Account not found")),
        ));
    };

    let current_valid =
        verify_password(&request.current_password, &guest.password_hash).unwrap_or(false);
    if !current_valid {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Current password is incorrect")),
        ));
    }

    guest.password_hash = hash_password(&request.new_password).map_err(internal)?;
    state.guests.update(guest).await.map_err(internal)?;

    Ok(Json(ApiResponse::success(EmptyData {})))
}
