//! Repository provider facade
//!
//! One object owning a repository per aggregate. Accessors hand out
//! `Arc` handles so services can hold just the repositories they use.

use std::sync::Arc;

use crate::domain::guest::GuestRepository;
use crate::domain::hotel::HotelRepository;
use crate::domain::manager::ManagerRepository;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::RoomRepository;

pub trait RepositoryProvider: Send + Sync {
    fn hotels(&self) -> Arc<dyn HotelRepository>;
    fn rooms(&self) -> Arc<dyn RoomRepository>;
    fn guests(&self) -> Arc<dyn GuestRepository>;
    fn managers(&self) -> Arc<dyn ManagerRepository>;
    fn reservations(&self) -> Arc<dyn ReservationRepository>;
}
