//! Reservation repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Reservation;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a new reservation. A duplicate id is rejected, never
    /// silently ignored.
    async fn insert(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>>;

    /// All reservations (any status)
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// All reservations for a room, any status
    async fn find_by_room(&self, room_id: i32) -> DomainResult<Vec<Reservation>>;

    /// Active reservations for a room, the availability read path
    async fn find_active_for_room(&self, room_id: i32) -> DomainResult<Vec<Reservation>>;

    /// All reservations made for a guest
    async fn find_for_guest(&self, guest_id: &str) -> DomainResult<Vec<Reservation>>;

    /// Number of active reservations on a room (guards room deletion)
    async fn count_active_for_room(&self, room_id: i32) -> DomainResult<u64>;

    /// Cancel a reservation by ID (set status = Cancelled)
    async fn cancel(&self, id: Uuid) -> DomainResult<()>;
}
