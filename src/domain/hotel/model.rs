//! Hotel domain entity

use chrono::{DateTime, Utc};

/// A hotel managed by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    /// Star rating, 1-5
    pub rating: i32,
    pub country: String,
    pub city: String,
    pub address: String,
    /// Manager assigned to this hotel, if any
    pub manager_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Hotel fields before persistence; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewHotel {
    pub name: String,
    pub rating: i32,
    pub country: String,
    pub city: String,
    pub address: String,
    pub manager_id: Option<i32>,
}
