//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::stay::StayRange;

/// Reservation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Reservation holds the room for its date range
    Active,
    /// Reservation cancelled by the guest or staff
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Active" => Self::Active,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A room reservation.
///
/// Created only through the booking coordinator; dates are never changed
/// in place (a date change is a cancel followed by a new booking).
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique reservation ID
    pub id: Uuid,
    /// Room held by this reservation
    pub room_id: i32,
    /// Hotel the room belongs to
    pub hotel_id: i32,
    /// Guest the reservation is for
    pub guest_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Current status
    pub status: ReservationStatus,
    /// When the reservation was created
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        id: Uuid,
        room_id: i32,
        hotel_id: i32,
        guest_id: impl Into<String>,
        stay: StayRange,
    ) -> Self {
        Self {
            id,
            room_id,
            hotel_id,
            guest_id: guest_id.into(),
            check_in: stay.check_in,
            check_out: stay.check_out,
            status: ReservationStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// The `[check_in, check_out)` range of this reservation
    pub fn stay(&self) -> StayRange {
        StayRange::new(self.check_in, self.check_out)
    }

    /// Cancel this reservation
    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }

    /// Whether this reservation still holds its room
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        Reservation::new(
            Uuid::new_v4(),
            7,
            1,
            "guest-001",
            StayRange::new(
                "2030-06-01".parse().unwrap(),
                "2030-06-05".parse().unwrap(),
            ),
        )
    }

    #[test]
    fn new_reservation_is_active() {
        let r = sample_reservation();
        assert!(r.is_active());
        assert_eq!(r.status, ReservationStatus::Active);
        assert_eq!(r.room_id, 7);
    }

    #[test]
    fn cancel_sets_cancelled() {
        let mut r = sample_reservation();
        r.cancel();
        assert_eq!(r.status, ReservationStatus::Cancelled);
        assert!(!r.is_active());
    }

    #[test]
    fn stay_matches_dates() {
        let r = sample_reservation();
        let stay = r.stay();
        assert_eq!(stay.check_in, r.check_in);
        assert_eq!(stay.check_out, r.check_out);
        assert_eq!(stay.nights(), 4);
    }

    #[test]
    fn status_display_roundtrip() {
        for status in &[ReservationStatus::Active, ReservationStatus::Cancelled] {
            let s = status.as_str();
            assert_eq!(&ReservationStatus::from_str(s), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_cancelled() {
        assert_eq!(
            ReservationStatus::from_str("Pending"),
            ReservationStatus::Cancelled
        );
    }
}
