//! Manager HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::*;
use crate::domain::hotel::HotelRepository;
use crate::domain::manager::{Manager, ManagerRepository, NewManager};
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Application state for manager handlers.
#[derive(Clone)]
pub struct ManagerAppState {
    pub managers: Arc<dyn ManagerRepository>,
    pub hotels: Arc<dyn HotelRepository>,
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

fn not_found<T>(id: i32) -> HandlerError<T> {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(format!("Manager {} not found", id))),
    )
}

async fn check_hotel_exists<T>(
    state: &ManagerAppState,
    hotel_id: Option<i32>,
) -> Result<(), HandlerError<T>> {
    if let Some(hotel_id) = hotel_id {
        let hotel = state.hotels.find_by_id(hotel_id).await.map_err(internal)?;
        if hotel.is_none() {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error(format!("Hotel {} not found", hotel_id))),
            ));
        }
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/v1/managers",
    tag = "Managers",
    security(("bearer_auth" = [])),
    request_body = CreateManagerRequest,
    responses(
        (status = 200, description = "Manager created", body = ApiResponse<ManagerDto>),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Email or personal number already registered")
    )
)]
pub async fn create_manager(
    State(state): State<ManagerAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateManagerRequest>,
) -> Result<Json<ApiResponse<ManagerDto>>, HandlerError<ManagerDto>> {
    if !user.is_admin() {
        return Err(forbidden());
    }

    if !request.personal_number.chars().all(|c| c.is_ascii_digit()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("personal number must be 11 digits")),
        ));
    }

    let existing = state
        .managers
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
        .managers
        .find_by_personal_number(&request.personal_number)
        .await
        .map_err(internal)?;
    if existing.is_some() {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error("Personal number already registered")),
        ));
    }

    check_hotel_exists(&state, request.hotel_id).await?;

    let manager = state
        .managers
        .create(NewManager {
            first_name: request.first_name,
            last_name: request.last_name,
            personal_number: request.personal_number,
            email: request.email,
            phone_number: request.phone_number,
            hotel_id: request.hotel_id,
        })
        .await
        .map_err(internal)?;

    Ok(Json(ApiResponse::success(manager.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/managers",
    tag = "Managers",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Managers list", body = ApiResponse<Vec<ManagerDto>>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn list_managers(
    State(state): State<ManagerAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<ManagerDto>>>, HandlerError<Vec<ManagerDto>>> {
    if !user.is_admin() {
        return Err(forbidden());
    }

    let managers = state.managers.find_all().await.map_err(internal)?;
    Ok(Json(ApiResponse::success(
        managers.into_iter().map(ManagerDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/managers/{id}",
    tag = "Managers",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Manager details", body = ApiResponse<ManagerDto>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_manager(
    State(state): State<ManagerAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ManagerDto>>, HandlerError<ManagerDto>> {
    if !user.is_admin() {
        return Err(forbidden());
    }

    let manager = state.managers.find_by_id(id).await.map_err(internal)?;
    let Some(manager) = manager else {
        return Err(not_found(id));
    };

    Ok(Json(ApiResponse::success(manager.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/managers/{id}",
    tag = "Managers",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Manager ID")),
    request_body = UpdateManagerRequest,
    responses(
        (status = 200, description = "Manager updated", body = ApiResponse<ManagerDto>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_manager(
    State(state): State<ManagerAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateManagerRequest>,
) -> Result<Json<ApiResponse<ManagerDto>>, HandlerError<ManagerDto>> {
    if !user.is_admin() {
        return Err(forbidden());
    }

    let existing = state.managers.find_by_id(id).await.map_err(internal)?;
    let Some(existing) = existing else {
        return Err(not_found(id));
    };

    check_hotel_exists(&state, request.hotel_id).await?;

    let updated = Manager {
        id,
        first_name: request.first_name,
        last_name: request.last_name,
        personal_number: existing.personal_number,
        email: request.email,
        phone_number: request.phone_number,
        hotel_id: request.hotel_id,
        created_at: existing.created_at,
    };
    state
        .managers
        .update(updated.clone())
        .await
        .map_err(internal)?;

    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/managers/{id}",
    tag = "Managers",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Manager deleted", body = ApiResponse<EmptyData>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_manager(
    State(state): State<ManagerAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError<EmptyData>> {
    if !user.is_admin() {
        return Err(forbidden());
    }

    let manager = state.managers.find_by_id(id).await.map_err(internal)?;
    if manager.is_none() {
        return Err(not_found(id));
    }

    state.managers.delete(id).await.map_err(internal)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
