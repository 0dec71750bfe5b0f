//! Room domain entity
//!
//! A room carries no stored availability flag: availability is always
//! derived from the set of active reservations, so there is no second
//! source of truth to fall out of sync.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A bookable room belonging to exactly one hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    /// Price per night, decimal(18,2)
    pub price: Decimal,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Room fields before persistence; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub price: Decimal,
    pub hotel_id: i32,
}
