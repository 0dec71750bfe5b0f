//! Booking errors

use thiserror::Error;

use crate::domain::reservation::{Reservation, StayRangeError};
use crate::domain::DomainError;

/// Why a booking attempt failed.
///
/// Every variant is returned to the caller typed; the core neither logs
/// nor swallows failures, and never retries internally.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The proposed stay dates are malformed. Deterministic, never
    /// retried.
    #[error("invalid stay dates: {0}")]
    InvalidRange(#[from] StayRangeError),

    /// An active reservation already covers part of the proposed stay.
    /// An expected business outcome, not a defect; the caller may offer
    /// alternative dates.
    #[error(
        "room {} is already reserved from {} to {}",
        .conflict.room_id,
        .conflict.check_in,
        .conflict.check_out
    )]
    Conflict { conflict: Box<Reservation> },

    /// The reservation store failed. Retry policy, if any, belongs to
    /// the caller.
    #[error("storage failure: {0}")]
    Storage(#[from] DomainError),
}
