//! Reservation DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::booking::Availability;
use crate::domain::reservation::Reservation;

/// Request to book a room
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    /// Room to book
    pub room_id: i32,
    /// Check-in date (inclusive)
    pub check_in: NaiveDate,
    /// Check-out date (exclusive; the room turns over that day)
    pub check_out: NaiveDate,
    /// Guest the booking is for. Only admin or manager callers may book
    /// for someone else; omitted means the caller books for themselves.
    pub guest_id: Option<String>,
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationDto {
    pub id: String,
    pub room_id: i32,
    pub hotel_id: i32,
    pub guest_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    pub created_at: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id.to_string(),
            room_id: r.room_id,
            hotel_id: r.hotel_id,
            guest_id: r.guest_id,
            check_in: r.check_in,
            check_out: r.check_out,
            status: r.status.as_str().to_string(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters for the reservation listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ReservationsQuery {
    /// Restrict to one room
    pub room_id: Option<i32>,
}

/// Query parameters for a room availability check
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Availability check result
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityDto {
    pub available: bool,
    /// The first conflicting reservation found, if any
    pub conflict: Option<ReservationDto>,
}

impl From<Availability> for AvailabilityDto {
    fn from(a: Availability) -> Self {
        Self {
            available: a.available,
            conflict: a.conflict.map(ReservationDto::from),
        }
    }
}
