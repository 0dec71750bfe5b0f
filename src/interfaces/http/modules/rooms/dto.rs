//! Room DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::room::Room;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    #[validate(length(min = 2, max = 50, message = "name must be 2–50 characters"))]
    pub name: String,
    /// Price per night, 1–100,000
    pub price: Decimal,
    pub hotel_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 2, max = 50, message = "name must be 2–50 characters"))]
    pub name: String,
    /// Price per night, 1–100,000
    pub price: Decimal,
}

/// Room details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub hotel_id: i32,
    pub created_at: String,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            name: r.name,
            price: r.price,
            hotel_id: r.hotel_id,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters for room listings.
///
/// `check_in`/`check_out` must be given together; when present, only
/// rooms free for the whole `[check_in, check_out)` range are returned.
#[derive(Debug, Deserialize, IntoParams)]
pub struct RoomsQuery {
    pub hotel_id: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}
