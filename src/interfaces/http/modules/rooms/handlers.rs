//! Room HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use rust_decimal::Decimal;

use super::dto::*;
use crate::application::booking::AvailabilityChecker;
use crate::domain::hotel::HotelRepository;
use crate::domain::reservation::{ReservationRepository, StayRange};
use crate::domain::room::{NewRoom, Room, RoomFilter, RoomRepository};
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Application state for room handlers.
#[derive(Clone)]
pub struct RoomAppState {
    pub rooms: Arc<dyn RoomRepository>,
    pub hotels: Arc<dyn HotelRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub availability: Arc<AvailabilityChecker>,
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

fn bad_request<T>(message: impl Into<String>) -> HandlerError<T> {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

fn check_price<T>(price: Decimal) -> Result<(), HandlerError<T>> {
    if price < Decimal::ONE || price > Decimal::from(100_000) {
        return Err(bad_request("price must be between 1 and 100,000"));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoomRequest,
    responses(
        (status = 200, description = "Room created", body = ApiResponse<RoomDto>),
        (status = 403, description = "Admin or manager only"),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn create_room(
    State(state): State<RoomAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> Result<Json<ApiResponse<RoomDto>>, HandlerError<RoomDto>> {
    if !user.is_staff() {
        return Err(forbidden());
    }
    check_price(request.price)?;

    let hotel = state
        .hotels
        .find_by_id(request.hotel_id)
        .await
        .map_err(internal)?;
    if hotel.is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Hotel {} not found",
                request.hotel_id
            ))),
        ));
    }

    let room = state
        .rooms
        .create(NewRoom {
            name: request.name,
            price: request.price,
            hotel_id: request.hotel_id,
        })
        .await
        .map_err(internal)?;

    Ok(Json(ApiResponse::success(room.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "Rooms",
    params(RoomsQuery),
    responses(
        (status = 200, description = "Rooms list", body = ApiResponse<Vec<RoomDto>>),
        (status = 400, description = "Malformed availability window")
    )
)]
pub async fn list_rooms(
    State(state): State<RoomAppState>,
    Query(query): Query<RoomsQuery>,
) -> Result<Json<ApiResponse<Vec<RoomDto>>>, HandlerError<Vec<RoomDto>>> {
    let window = match (query.check_in, query.check_out) {
        (None, None) => None,
        (Some(check_in), Some(check_out)) => {
            if check_in >= check_out {
                return Err(bad_request("check_out must be after check_in"));
            }
            Some(StayRange::new(check_in, check_out))
        }
        _ => {
            return Err(bad_request(
                "check_in and check_out must be provided together",
            ));
        }
    };

    let rooms = state
        .rooms
        .find_filtered(&RoomFilter {
            hotel_id: query.hotel_id,
            min_price: query.min_price,
            max_price: query.max_price,
        })
        .await
        .map_err(internal)?;

    let mut dtos: Vec<RoomDto> = Vec::with_capacity(rooms.len());
    for room in rooms {
        if let Some(window) = &window {
            let availability = state
                .availability
                .check(room.id, window)
                .await
                .map_err(internal)?;
            if !availability.available {
                continue;
            }
        }
        dtos.push(room.into());
    }

    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}",
    tag = "Rooms",
    params(("room_id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room(
    State(state): State<RoomAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomDto>>, HandlerError<RoomDto>> {
    let room = state.rooms.find_by_id(id).await.map_err(internal)?;

    let Some(room) = room else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Room {} not found", id))),
        ));
    };

    Ok(Json(ApiResponse::success(room.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/rooms/{room_id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = ApiResponse<RoomDto>),
        (status = 403, description = "Admin or manager only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_room(
    State(state): State<RoomAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<RoomDto>>, HandlerError<RoomDto>> {
    if !user.is_staff() {
        return Err(forbidden());
    }
    check_price(request.price)?;

    let existing = state.rooms.find_by_id(id).await.map_err(internal)?;
    let Some(existing) = existing else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Room {} not found", id))),
        ));
    };

    let updated = Room {
        id,
        name: request.name,
        price: request.price,
        hotel_id: existing.hotel_id,
        created_at: existing.created_at,
    };
    state.rooms.update(updated.clone()).await.map_err(internal)?;

    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{room_id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = ApiResponse<EmptyData>),
        (status = 403, description = "Admin or manager only"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Room still has active reservations")
    )
)]
pub async fn delete_room(
    State(state): State<RoomAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError<EmptyData>> {
    if !user.is_staff() {
        return Err(forbidden());
    }

    let room = state.rooms.find_by_id(id).await.map_err(internal)?;
    if room.is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Room {} not found", id))),
        ));
    }

    let active = state
        .reservations
        .count_active_for_room(id)
        .await
        .map_err(internal)?;
    if active > 0 {
        return Err((
            StatusCode::CONFLICT,
            Json(ApiResponse::error(
                "Unable to delete room; it still has active reservations",
            )),
        ));
    }

    state.rooms.delete(id).await.map_err(internal)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
