//! Room repository interface

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::model::{NewRoom, Room};
use crate::domain::DomainResult;

/// Optional filters for room listings.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub hotel_id: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persist a new room and return it with its assigned id
    async fn create(&self, room: NewRoom) -> DomainResult<Room>;

    /// Find room by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    /// All rooms matching the filter
    async fn find_filtered(&self, filter: &RoomFilter) -> DomainResult<Vec<Room>>;

    /// All rooms of a hotel
    async fn find_by_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Room>>;

    /// Number of rooms in a hotel (guards hotel deletion)
    async fn count_for_hotel(&self, hotel_id: i32) -> DomainResult<u64>;

    /// Update an existing room
    async fn update(&self, room: Room) -> DomainResult<()>;

    /// Delete a room by ID
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
