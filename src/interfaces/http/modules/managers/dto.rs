//! Manager DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::manager::Manager;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateManagerRequest {
    #[validate(length(min = 2, max = 50, message = "first name must be 2–50 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 50, message = "last name must be 2–50 characters"))]
    pub last_name: String,
    #[validate(length(equal = 11, message = "personal number must be 11 digits"))]
    pub personal_number: String,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 20, message = "phone number is required"))]
    pub phone_number: String,
    pub hotel_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateManagerRequest {
    #[validate(length(min = 2, max = 50, message = "first name must be 2–50 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 50, message = "last name must be 2–50 characters"))]
    pub last_name: String,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 20, message = "phone number is required"))]
    pub phone_number: String,
    pub hotel_id: Option<i32>,
}

/// Manager details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ManagerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub personal_number: String,
    pub email: String,
    pub phone_number: String,
    pub hotel_id: Option<i32>,
    pub created_at: String,
}

impl From<Manager> for ManagerDto {
    fn from(m: Manager) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            personal_number: m.personal_number,
            email: m.email,
            phone_number: m.phone_number,
            hotel_id: m.hotel_id,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}
