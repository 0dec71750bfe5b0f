//! Hotel repository interface

use async_trait::async_trait;

use super::model::{Hotel, NewHotel};
use crate::domain::DomainResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Persist a new hotel and return it with its assigned id
    async fn create(&self, hotel: NewHotel) -> DomainResult<Hotel>;

    /// Find hotel by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Hotel>>;

    /// One page of hotels, optionally filtered by a name/city substring.
    /// Returns the page items and the total matching count.
    async fn find_page(
        &self,
        page: u64,
        limit: u64,
        filter: Option<&str>,
    ) -> DomainResult<(Vec<Hotel>, u64)>;

    /// Update an existing hotel
    async fn update(&self, hotel: Hotel) -> DomainResult<()>;

    /// Delete a hotel by ID
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
