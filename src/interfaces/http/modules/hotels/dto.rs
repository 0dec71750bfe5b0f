//! Hotel DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::hotel::Hotel;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHotelRequest {
    #[validate(length(min = 2, max = 100, message = "name must be 2–100 characters"))]
    pub name: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, max = 100, message = "country is required"))]
    pub country: String,
    #[validate(length(min = 1, max = 100, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, max = 200, message = "address is required"))]
    pub address: String,
    pub manager_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateHotelRequest {
    #[validate(length(min = 2, max = 100, message = "name must be 2–100 characters"))]
    pub name: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, max = 100, message = "country is required"))]
    pub country: String,
    #[validate(length(min = 1, max = 100, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, max = 200, message = "address is required"))]
    pub address: String,
    pub manager_id: Option<i32>,
}

/// Hotel details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub rating: i32,
    pub country: String,
    pub city: String,
    pub address: String,
    pub manager_id: Option<i32>,
    pub created_at: String,
}

impl From<Hotel> for HotelDto {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name,
            rating: h.rating,
            country: h.country,
            city: h.city,
            address: h.address,
            manager_id: h.manager_id,
            created_at: h.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters for hotel listings
#[derive(Debug, Deserialize, IntoParams)]
pub struct HotelsQuery {
    /// Page number, 1-based
    pub page: Option<u64>,
    /// Items per page (1–100)
    pub limit: Option<u64>,
    /// Substring match on hotel name or city
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelListResponse {
    pub items: Vec<HotelDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}
