//! Reservation HTTP handlers
//!
//! Booking goes through the `BookingCoordinator`; everything else is
//! plain repository reads plus ownership checks.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use super::dto::*;
use crate::application::booking::{BookingCoordinator, BookingError, StayRequest};
use crate::domain::guest::GuestRepository;
use crate::domain::reservation::{ReservationRepository, StayRange};
use crate::domain::room::RoomRepository;
use crate::interfaces::http::common::{ApiResponse, EmptyData};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub reservations: Arc<dyn ReservationRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub guests: Arc<dyn GuestRepository>,
    pub coordinator: Arc<BookingCoordinator>,
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

fn room_not_found<T>(room_id: i32) -> HandlerError<T> {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(format!("Room {} not found", room_id))),
    )
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    request_body = CreateReservationRequest,
    responses(
        (status = 200, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Invalid stay dates"),
        (status = 404, description = "Room or guest not found"),
        (status = 409, description = "Room already reserved for an overlapping stay"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, HandlerError<ReservationDto>> {
    // A plain guest books for themselves; staff may book for anyone.
    let guest_id = match request.guest_id {
        Some(guest_id) if guest_id != user.guest_id => {
            if !user.is_staff() {
                return Err(forbidden());
            }
            let guest = state.guests.find_by_id(&guest_id).await.map_err(internal)?;
            if guest.is_none() {
                return Err((
                    StatusCode::NOT_FOUND,
                    Json(ApiResponse::error(format!("Guest {} not found", guest_id))),
                ));
            }
            guest_id
        }
        _ => user.guest_id.clone(),
    };

    let room = state
        .rooms
        .find_by_id(request.room_id)
        .await
        .map_err(internal)?;
    let Some(room) = room else {
        return Err(room_not_found(request.room_id));
    };

    let reservation = state
        .coordinator
        .book(StayRequest {
            room_id: room.id,
            hotel_id: room.hotel_id,
            guest_id,
            stay: StayRange::new(request.check_in, request.check_out),
        })
        .await
        .map_err(|e| match e {
            BookingError::InvalidRange(_) => {
                (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e.to_string())))
            }
            BookingError::Conflict { .. } => {
                (StatusCode::CONFLICT, Json(ApiResponse::error(e.to_string())))
            }
            BookingError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(e.to_string())),
            ),
        })?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(ReservationsQuery),
    responses(
        (status = 200, description = "All reservations", body = ApiResponse<Vec<ReservationDto>>),
        (status = 403, description = "Admin or manager only")
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<ReservationsQuery>,
) -> Result<Json<ApiResponse<Vec<ReservationDto>>>, HandlerError<Vec<ReservationDto>>> {
    if !user.is_staff() {
        return Err(forbidden());
    }

    let reservations = match query.room_id {
        Some(room_id) => state.reservations.find_by_room(room_id).await,
        None => state.reservations.find_all().await,
    }
    .map_err(internal)?;

    Ok(Json(ApiResponse::success(
        reservations.into_iter().map(ReservationDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/my",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn my_reservations(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<ReservationDto>>>, HandlerError<Vec<ReservationDto>>> {
    let reservations = state
        .reservations
        .find_for_guest(&user.guest_id)
        .await
        .map_err(internal)?;

    Ok(Json(ApiResponse::success(
        reservations.into_iter().map(ReservationDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 403, description = "Owner or staff only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationDto>>, HandlerError<ReservationDto>> {
    let reservation = state.reservations.find_by_id(id).await.map_err(internal)?;

    let Some(reservation) = reservation else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Reservation {} not found", id))),
        ));
    };

    if reservation.guest_id != user.guest_id && !user.is_staff() {
        return Err(forbidden());
    }

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<EmptyData>),
        (status = 400, description = "Reservation is not active"),
        (status = 403, description = "Owner or staff only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EmptyData>>, HandlerError<EmptyData>> {
    let reservation = state.reservations.find_by_id(id).await.map_err(internal)?;

    let Some(reservation) = reservation else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Reservation {} not found", id))),
        ));
    };

    if reservation.guest_id != user.guest_id && !user.is_staff() {
        return Err(forbidden());
    }

    // Only active reservations can be cancelled.
    if !reservation.is_active() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!(
                "Reservation {} is not active (status: {})",
                id, reservation.status
            ))),
        ));
    }

    state.reservations.cancel(id).await.map_err(internal)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/availability",
    tag = "Reservations",
    params(
        ("room_id" = i32, Path, description = "Room ID"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Availability for the requested window", body = ApiResponse<AvailabilityDto>),
        (status = 400, description = "Malformed window"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn room_availability(
    State(state): State<ReservationAppState>,
    Path(room_id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityDto>>, HandlerError<AvailabilityDto>> {
    if query.check_in >= query.check_out {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("check_out must be after check_in")),
        ));
    }

    let room = state.rooms.find_by_id(room_id).await.map_err(internal)?;
    if room.is_none() {
        return Err(room_not_found(room_id));
    }

    let availability = state
        .coordinator
        .availability()
        .check(room_id, &StayRange::new(query.check_in, query.check_out))
        .await
        .map_err(internal)?;

    Ok(Json(ApiResponse::success(availability.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("room_id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Reservations for the room", body = ApiResponse<Vec<ReservationDto>>),
        (status = 403, description = "Admin or manager only"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn list_room_reservations(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(room_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ReservationDto>>>, HandlerError<Vec<ReservationDto>>> {
    if !user.is_staff() {
        return Err(forbidden());
    }

    let room = state.rooms.find_by_id(room_id).await.map_err(internal)?;
    if room.is_none() {
        return Err(room_not_found(room_id));
    }

    let reservations = state
        .reservations
        .find_by_room(room_id)
        .await
        .map_err(internal)?;

    Ok(Json(ApiResponse::success(
        reservations.into_iter().map(ReservationDto::from).collect(),
    )))
}
