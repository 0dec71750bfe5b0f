//! Room availability checker

use std::sync::Arc;

use crate::domain::reservation::{Reservation, ReservationRepository, StayRange};
use crate::domain::DomainResult;

/// Outcome of an availability check.
#[derive(Debug, Clone)]
pub struct Availability {
    pub available: bool,
    /// First conflicting reservation in store order, if any
    pub conflict: Option<Reservation>,
}

impl Availability {
    fn free() -> Self {
        Self {
            available: true,
            conflict: None,
        }
    }

    fn taken(conflict: Reservation) -> Self {
        Self {
            available: false,
            conflict: Some(conflict),
        }
    }
}

/// Read-only snapshot check of a room's availability.
///
/// A room is available for a proposed stay iff no active reservation on
/// that room overlaps it. This check alone guarantees nothing about
/// concurrent bookings; the coordinator repeats it inside the room's
/// exclusivity scope.
pub struct AvailabilityChecker {
    reservations: Arc<dyn ReservationRepository>,
}

impl AvailabilityChecker {
    pub fn new(reservations: Arc<dyn ReservationRepository>) -> Self {
        Self { reservations }
    }

    pub async fn check(
        &self,
        room_id: i32,
        proposed: &StayRange,
    ) -> DomainResult<Availability> {
        let existing = self.reservations.find_active_for_room(room_id).await?;
        for reservation in existing {
            if reservation.stay().overlaps(proposed) {
                return Ok(Availability::taken(reservation));
            }
        }
        Ok(Availability::free())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::booking::testing::MemoryReservations;
    use crate::domain::reservation::Reservation;
    use uuid::Uuid;

    fn stay(check_in: &str, check_out: &str) -> StayRange {
        StayRange::new(check_in.parse().unwrap(), check_out.parse().unwrap())
    }

    async fn seeded(reservations: &[(i32, &str, &str)]) -> Arc<MemoryReservations> {
        let repo = Arc::new(MemoryReservations::new());
        for (room_id, check_in, check_out) in reservations {
            repo.insert(Reservation::new(
                Uuid::new_v4(),
                *room_id,
                1,
                "guest-001",
                stay(check_in, check_out),
            ))
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn empty_room_is_available() {
        let repo = seeded(&[]).await;
        let checker = AvailabilityChecker::new(repo);

        let result = checker.check(1, &stay("2030-06-01", "2030-06-05")).await.unwrap();
        assert!(result.available);
        assert!(result.conflict.is_none());
    }

    #[tokio::test]
    async fn overlapping_reservation_reported() {
        let repo = seeded(&[(1, "2030-06-01", "2030-06-05")]).await;
        let checker = AvailabilityChecker::new(repo);

        let result = checker.check(1, &stay("2030-06-04", "2030-06-06")).await.unwrap();
        assert!(!result.available);
        let conflict = result.conflict.unwrap();
        assert_eq!(conflict.room_id, 1);
        assert_eq!(conflict.check_in.to_string(), "2030-06-01");
    }

    #[tokio::test]
    async fn first_conflict_in_store_order_wins() {
        let repo = seeded(&[
            (1, "2030-06-01", "2030-06-05"),
            (1, "2030-06-07", "2030-06-10"),
        ])
        .await;
        let checker = AvailabilityChecker::new(repo);

        // Proposed stay overlaps both; the earlier-inserted one is reported.
        let result = checker.check(1, &stay("2030-06-04", "2030-06-08")).await.unwrap();
        let conflict = result.conflict.unwrap();
        assert_eq!(conflict.check_in.to_string(), "2030-06-01");
    }

    #[tokio::test]
    async fn other_rooms_do_not_conflict() {
        let repo = seeded(&[(2, "2030-06-01", "2030-06-05")]).await;
        let checker = AvailabilityChecker::new(repo);

        let result = checker.check(1, &stay("2030-06-01", "2030-06-05")).await.unwrap();
        assert!(result.available);
    }

    #[tokio::test]
    async fn cancelled_reservations_are_ignored() {
        let repo = seeded(&[(1, "2030-06-01", "2030-06-05")]).await;
        let id = repo.snapshot()[0].id;
        repo.cancel(id).await.unwrap();
        let checker = AvailabilityChecker::new(repo);

        let result = checker.check(1, &stay("2030-06-01", "2030-06-05")).await.unwrap();
        assert!(result.available);
    }

    #[tokio::test]
    async fn back_to_back_is_available() {
        let repo = seeded(&[(1, "2030-06-01", "2030-06-05")]).await;
        let checker = AvailabilityChecker::new(repo);

        let result = checker.check(1, &stay("2030-06-05", "2030-06-08")).await.unwrap();
        assert!(result.available);
    }
}
