//! Manager domain entity
//!
//! Managers are administrative records, not login accounts.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// National personal number, exactly 11 digits
    pub personal_number: String,
    pub email: String,
    pub phone_number: String,
    /// Hotel this manager runs, if assigned
    pub hotel_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Manager fields before persistence; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewManager {
    pub first_name: String,
    pub last_name: String,
    pub personal_number: String,
    pub email: String,
    pub phone_number: String,
    pub hotel_id: Option<i32>,
}
