//! Hotel HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::*;
use crate::domain::hotel::{Hotel, HotelRepository, NewHotel};
use crate::domain::room::RoomRepository;
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::shared::{validate_pagination, PaginatedResult};

/// Application state for hotel handlers.
#[derive(Clone)]
pub struct HotelAppState {
    pub hotels: Arc<dyn HotelRepository>,
    pub rooms: Arc<dyn RoomRepository>,
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

#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    request_body = CreateHotelRequest,
    responses(
        (status = 200, description = "Hotel created", body = ApiResponse<HotelDto>),
        (status = 403, description = "Admin only"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_hotel(
    State(state): State<HotelAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateHotelRequest>,
) -> Result<Json<ApiResponse<HotelDto>>, HandlerError<HotelDto>> {
    if !user.is_admin() {
        return Err(forbidden());
    }

    let hotel = state
        .hotels
        .create(NewHotel {
            name: request.name,
            rating: request.rating,
            country: request.country,
            city: request.city,
            address: request.address,
            manager_id: request.manager_id,
        })
        .await
        .map_err(internal)?;

    Ok(Json(ApiResponse::success(hotel.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "Hotels",
    params(HotelsQuery),
    responses(
        (status = 200, description = "Hotels list", body = ApiResponse<HotelListResponse>)
    )
)]
pub async fn list_hotels(
    State(state): State<HotelAppState>,
    Query(query): Query<HotelsQuery>,
) -> Result<Json<ApiResponse<HotelListResponse>>, HandlerError<HotelListResponse>> {
    let (page, limit) = validate_pagination(query.page, query.limit);

    let (hotels, total) = state
        .hotels
        .find_page(page, limit, query.filter.as_deref())
        .await
        .map_err(internal)?;

    let result = PaginatedResult::new(
        hotels.into_iter().map(HotelDto::from).collect(),
        total,
        page,
        limit,
    );
    Ok(Json(ApiResponse::success(HotelListResponse {
        items: result.items,
        total: result.total,
        page: result.page,
        limit: result.limit,
        total_pages: result.total_pages,
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = ApiResponse<HotelDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_hotel(
    State(state): State<HotelAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<HotelDto>>, HandlerError<HotelDto>> {
    let hotel = state.hotels.find_by_id(id).await.map_err(internal)?;

    let Some(hotel) = hotel else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Hotel {} not found", id))),
        ));
    };

    Ok(Json(ApiResponse::success(hotel.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/hotels/{id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = UpdateHotelRequest,
    responses(
        (status = 200, description = "Hotel updated", body = ApiResponse<HotelDto>),
        (status = 403, description = "Admin or manager only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_hotel(
    State(state): State<HotelAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateHotelRequest>,
) -> Result<Json<ApiResponse<HotelDto>>, HandlerError<HotelDto>> {
    if !user.is_staff() {
        return Err(forbidden());
    }

    let existing = state.hotels.find_by_id(id).await.map_err(internal)?;
    let Some(existing) = existing else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Hotel {} not found", id))),
        ));
    };

    let updated = Hotel {
        id,
        name: request.name,
        rating: request.rating,
        country: request.country,
        city: request.city,
        address: request.address,
        manager_id: request.manager_id,
        created_at: existing.created_at,
    };
    state.hotels.update(updated.clone()).await.map_err(internal)?;

    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/hotels/{id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel deleted", body = ApiResponse<EmptyData>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Hotel still has rooms")
    )
)]
pub async fn delete_hotel(
    State(state): State<HotelAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError<EmptyData>> {
    if !user.is_admin() {
        return Err(forbidden());
    }

    let hotel = state.hotels.find_by_id(id).await.map_err(internal)?;
    if hotel.is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Hotel {} not found", id))),
        ));
    }

    let room_count = state.rooms.count_for_hotel(id).await.map_err(internal)?;
    if room_count > 0 {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error(
                "Unable to delete hotel; it still has rooms",
            )),
        ));
    }

    state.hotels.delete(id).await.map_err(internal)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
