//! Application layer: use-case orchestration over the domain.

pub mod booking;

pub use booking::{
    Availability, AvailabilityChecker, BookingCoordinator, BookingError, StayRequest,
};
