//! SeaORM implementation of RepositoryProvider

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::guest::GuestRepository;
use crate::domain::hotel::HotelRepository;
use crate::domain::manager::ManagerRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::RoomRepository;

use super::guest_repository::SeaOrmGuestRepository;
use super::hotel_repository::SeaOrmHotelRepository;
use super::manager_repository::SeaOrmManagerRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::room_repository::SeaOrmRoomRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository
/// accessors as shared handles.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let hotel = repos.hotels().find_by_id(1).await?;
/// let active = repos.reservations().find_active_for_room(7).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    hotels: Arc<SeaOrmHotelRepository>,
    rooms: Arc<SeaOrmRoomRepository>,
    guests: Arc<SeaOrmGuestRepository>,
    managers: Arc<SeaOrmManagerRepository>,
    reservations: Arc<SeaOrmReservationRepository>,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            hotels: Arc::new(SeaOrmHotelRepository::new(db.clone())),
            rooms: Arc::new(SeaOrmRoomRepository::new(db.clone())),
            guests: Arc::new(SeaOrmGuestRepository::new(db.clone())),
            managers: Arc::new(SeaOrmManagerRepository::new(db.clone())),
            reservations: Arc::new(SeaOrmReservationRepository::new(db)),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn hotels(&self) -> Arc<dyn HotelRepository> {
        self.hotels.clone()
    }

    fn rooms(&self) -> Arc<dyn RoomRepository> {
        self.rooms.clone()
    }

    fn guests(&self) -> Arc<dyn GuestRepository> {
        self.guests.clone()
    }

    fn managers(&self) -> Arc<dyn ManagerRepository> {
        self.managers.clone()
    }

    fn reservations(&self) -> Arc<dyn ReservationRepository> {
        self.reservations.clone()
    }
}
