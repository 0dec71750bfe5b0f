//! Guest HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::*;
use crate::domain::guest::{GuestRepository, UserRole};
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Application state for guest handlers.
#[derive(Clone)]
pub struct GuestAppState {
    pub guests: Arc<dyn GuestRepository>,
}

type HandlerError<T> = (StatusCode, Json<ApiResponse<T>>);

fn internal<T>(e: impl std::fmt::Display) -> HandlerError<T> {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(e.to_string())),
    )
}

fn forbidden<T>() -> HandlerError<T> {
    (
        StatusCode::FORBIDDEN,
        Json(ApiResponse::error("Insufficient permissions")),
    )
}

fn not_found<T>(id: &str) -> HandlerError<T> {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(format!("Guest {} not found", id))),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/guests",
    tag = "Guests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Guests list", body = ApiResponse<Vec<GuestDto>>),
        (status = 403, description = "Admin or manager only")
    )
)]
pub async fn list_guests(
    State(state): State<GuestAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<GuestDto>>>, HandlerError<Vec<GuestDto>>> {
    if !user.is_staff() {
        return Err(forbidden());
    }

    let guests = state.guests.find_all().await.map_err(internal)?;
    Ok(Json(ApiResponse::success(
        guests.into_iter().map(GuestDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/guests/{id}",
    tag = "Guests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Guest ID")),
    responses(
        (status = 200, description = "Guest details", body = ApiResponse<GuestDto>),
        (status = 403, description = "Own account or staff only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_guest(
    State(state): State<GuestAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<GuestDto>>, HandlerError<GuestDto>> {
    if user.guest_id != id && !user.is_staff() {
        return Err(forbidden());
    }

    let guest = state.guests.find_by_id(&id).await.map_err(internal)?;
    let Some(guest) = guest else {
        return Err(not_found(&id));
    };

    Ok(Json(ApiResponse::success(guest.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/guests/{id}",
    tag = "Guests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Guest ID")),
    request_body = UpdateGuestRequest,
    responses(
        (status = 200, description = "Guest updated", body = ApiResponse<GuestDto>),
        (status = 403, description = "Own account or admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_guest(
    State(state): State<GuestAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGuestRequest>,
) -> Result<Json<ApiResponse<GuestDto>>, HandlerError<GuestDto>> {
    if user.guest_id != id && !user.is_admin() {
        return Err(forbidden());
    }

    let guest = state.guests.find_by_id(&id).await.map_err(internal)?;
    let Some(mut guest) = guest else {
        return Err(not_found(&id));
    };

    guest.first_name = request.first_name;
    guest.last_name = request.last_name;
    guest.phone_number = request.phone_number;

    // Role and activation changes are an admin capability.
    if user.is_admin() {
        if let Some(role) = request.role {
            guest.role = UserRole::from_str(&role);
        }
        if let Some(is_active) = request.is_active {
            guest.is_active = is_active;
        }
    }

    state.guests.update(guest.clone()).await.map_err(internal)?;
    Ok(Json(ApiResponse::success(guest.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/guests/{id}",
    tag = "Guests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Guest ID")),
    responses(
        (status = 200, description = "Guest deleted", body = ApiResponse<EmptyData>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_guest(
    State(state): State<GuestAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError<EmptyData>> {
    if !user.is_admin() {
        return Err(forbidden());
    }

    let guest = state.guests.find_by_id(&id).await.map_err(internal)?;
    if guest.is_none() {
        return Err(not_found(&id));
    }

    state.guests.delete(&id).await.map_err(internal)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
