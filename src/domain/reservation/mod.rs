//! Reservation aggregate
//!
//! Contains the Reservation entity, the stay date range value type,
//! and the repository interface.

pub mod model;
pub mod repository;
pub mod stay;

pub use model::{Reservation, ReservationStatus};
pub use repository::ReservationRepository;
pub use stay::{StayRange, StayRangeError};
