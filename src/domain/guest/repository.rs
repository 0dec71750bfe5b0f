//! Guest repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Guest;
use crate::domain::DomainResult;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Save a new guest account
    async fn insert(&self, guest: Guest) -> DomainResult<()>;

    /// Find guest by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Guest>>;

    /// Find guest by email (login name)
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Guest>>;

    /// Find guest by personal number
    async fn find_by_personal_number(&self, personal_number: &str)
        -> DomainResult<Option<Guest>>;

    /// All guests
    async fn find_all(&self) -> DomainResult<Vec<Guest>>;

    /// Update an existing guest
    async fn update(&self, guest: Guest) -> DomainResult<()>;

    /// Delete a guest by ID
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// Stamp a successful login
    async fn record_login(&self, id: &str, at: DateTime<Utc>) -> DomainResult<()>;
}
