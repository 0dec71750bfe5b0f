//! Guest DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::guest::Guest;

/// Guest details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct GuestDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub personal_number: String,
    pub phone_number: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl From<Guest> for GuestDto {
    fn from(g: Guest) -> Self {
        Self {
            id: g.id,
            email: g.email,
            first_name: g.first_name,
            last_name: g.last_name,
            personal_number: g.personal_number,
            phone_number: g.phone_number,
            role: g.role.as_str().to_string(),
            is_active: g.is_active,
            created_at: g.created_at.to_rfc3339(),
            last_login_at: g.last_login_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Fields a guest (or an admin) may change on an account.
/// `role` and `is_active` are honored for admin callers only.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGuestRequest {
    #[validate(length(min = 2, max = 50, message = "first name must be 2–50 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 50, message = "last name must be 2–50 characters"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 20, message = "phone number is required"))]
    pub phone_number: String,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}
