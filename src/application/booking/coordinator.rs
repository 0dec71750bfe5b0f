//! Booking coordinator
//!
//! Orchestrates validate → lock room → re-check availability → persist.
//! The per-room exclusivity scope is held across the check and the
//! insert, so no two bookings for the same room can both observe
//! "available" for overlapping stays and both succeed.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::reservation::{Reservation, ReservationRepository, StayRange};

use super::availability::AvailabilityChecker;
use super::error::BookingError;
use super::locks::RoomLocks;

/// A proposed stay, produced by the caller and discarded after one
/// coordination call.
#[derive(Debug, Clone)]
pub struct StayRequest {
    pub room_id: i32,
    pub hotel_id: i32,
    pub guest_id: String,
    pub stay: StayRange,
}

pub struct BookingCoordinator {
    reservations: Arc<dyn ReservationRepository>,
    availability: AvailabilityChecker,
    locks: RoomLocks,
}

impl BookingCoordinator {
    pub fn new(reservations: Arc<dyn ReservationRepository>) -> Self {
        Self {
            availability: AvailabilityChecker::new(reservations.clone()),
            reservations,
            locks: RoomLocks::new(),
        }
    }

    /// Book a stay.
    ///
    /// Validation failures and conflicts are deterministic and never
    /// retried; store failures are surfaced as
    /// [`BookingError::Storage`] and left to the caller. The room lock
    /// is released on every exit path (guard drop).
    pub async fn book(&self, request: StayRequest) -> Result<Reservation, BookingError> {
        request.stay.validate(Utc::now().date_naive())?;

        let _room = self.locks.acquire(request.room_id).await;

        // Authoritative check, taken under the room lock. Any check done
        // outside the lock is only an optimization.
        let availability = self
            .availability
            .check(request.room_id, &request.stay)
            .await?;
        if let Some(conflict) = availability.conflict {
            debug!(
                room_id = request.room_id,
                conflict = %conflict.id,
                "booking conflict"
            );
            return Err(BookingError::Conflict {
                conflict: Box::new(conflict),
            });
        }

        let reservation = Reservation::new(
            Uuid::new_v4(),
            request.room_id,
            request.hotel_id,
            request.guest_id.clone(),
            request.stay,
        );
        self.reservations.insert(reservation.clone()).await?;

        debug!(
            reservation = %reservation.id,
            room_id = reservation.room_id,
            stay = %reservation.stay(),
            "reservation created"
        );
        Ok(reservation)
    }

    /// Snapshot availability check without taking the room lock.
    pub fn availability(&self) -> &AvailabilityChecker {
        &self.availability
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::booking::testing::MemoryReservations;
    use crate::domain::reservation::StayRangeError;
    use std::sync::atomic::Ordering;
    use tokio::sync::Barrier;

    fn stay(check_in: &str, check_out: &str) -> StayRange {
        StayRange::new(check_in.parse().unwrap(), check_out.parse().unwrap())
    }

    fn request(room_id: i32, check_in: &str, check_out: &str) -> StayRequest {
        StayRequest {
            room_id,
            hotel_id: 1,
            guest_id: "guest-001".to_string(),
            stay: stay(check_in, check_out),
        }
    }

    fn coordinator() -> (Arc<MemoryReservations>, BookingCoordinator) {
        let repo = Arc::new(MemoryReservations::new());
        let coordinator = BookingCoordinator::new(repo.clone());
        (repo, coordinator)
    }

    #[tokio::test]
    async fn successful_booking_is_persisted() {
        let (repo, coordinator) = coordinator();

        let reservation = coordinator
            .book(request(1, "2030-06-01", "2030-06-05"))
            .await
            .unwrap();

        assert_eq!(reservation.room_id, 1);
        assert_eq!(reservation.guest_id, "guest-001");
        assert!(reservation.is_active());
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.snapshot()[0].id, reservation.id);
    }

    #[tokio::test]
    async fn inverted_range_fails_before_any_store_access() {
        let (repo, coordinator) = coordinator();

        let err = coordinator
            .book(request(1, "2030-06-05", "2030-06-01"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BookingError::InvalidRange(StayRangeError::InvertedOrEmptyRange)
        ));
        assert_eq!(repo.reads.load(Ordering::SeqCst), 0);
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn past_check_in_rejected() {
        let (repo, coordinator) = coordinator();

        let err = coordinator
            .book(request(1, "2020-06-01", "2020-06-03"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BookingError::InvalidRange(StayRangeError::PastCheckIn)
        ));
        assert_eq!(repo.reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn overlap_rejected_with_conflicting_reservation() {
        let (repo, coordinator) = coordinator();

        let first = coordinator
            .book(request(1, "2030-06-01", "2030-06-05"))
            .await
            .unwrap();

        let err = coordinator
            .book(request(1, "2030-06-04", "2030-06-06"))
            .await
            .unwrap_err();

        match err {
            BookingError::Conflict { conflict } => assert_eq!(conflict.id, first.id),
            other => panic!("expected conflict, got {other:?}"),
        }
        // A conflict never mutates the store.
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn back_to_back_stays_both_succeed() {
        let (repo, coordinator) = coordinator();

        coordinator
            .book(request(1, "2030-06-01", "2030-06-05"))
            .await
            .unwrap();
        coordinator
            .book(request(1, "2030-06-05", "2030-06-08"))
            .await
            .unwrap();

        assert_eq!(repo.count(), 2);
    }

    #[tokio::test]
    async fn different_rooms_never_interact() {
        let (repo, coordinator) = coordinator();

        coordinator
            .book(request(1, "2030-06-01", "2030-06-03"))
            .await
            .unwrap();
        coordinator
            .book(request(2, "2030-06-01", "2030-06-03"))
            .await
            .unwrap();

        assert_eq!(repo.count(), 2);
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced() {
        let (repo, coordinator) = coordinator();
        repo.fail_inserts.store(true, Ordering::SeqCst);

        let err = coordinator
            .book(request(1, "2030-06-01", "2030-06-05"))
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::Storage(_)));
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_overlapping_bookings_yield_exactly_one_success() {
        let repo = Arc::new(MemoryReservations::new());
        let coordinator = Arc::new(BookingCoordinator::new(repo.clone()));

        let tasks = 16;
        let barrier = Arc::new(Barrier::new(tasks));
        let mut handles = Vec::with_capacity(tasks);
        for i in 0..tasks {
            let coordinator = coordinator.clone();
            let barrier = barrier.clone();
            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                coordinator
                    .book(StayRequest {
                        room_id: 1,
                        hotel_id: 1,
                        guest_id: format!("guest-{i:03}"),
                        stay: stay("2030-06-01", "2030-06-05"),
                    })
                    .await
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(BookingError::Conflict { .. }) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, tasks - 1);
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_bookings_for_distinct_rooms_all_succeed() {
        let repo = Arc::new(MemoryReservations::new());
        let coordinator = Arc::new(BookingCoordinator::new(repo.clone()));

        let rooms = 8;
        let barrier = Arc::new(Barrier::new(rooms as usize));
        let mut handles = Vec::new();
        for room_id in 1..=rooms {
            let coordinator = coordinator.clone();
            let barrier = barrier.clone();
            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                coordinator
                    .book(StayRequest {
                        room_id,
                        hotel_id: 1,
                        guest_id: "guest-001".to_string(),
                        stay: stay("2030-06-01", "2030-06-03"),
                    })
                    .await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(repo.count(), rooms as usize);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_non_overlapping_stays_for_one_room_all_succeed() {
        let repo = Arc::new(MemoryReservations::new());
        let coordinator = Arc::new(BookingCoordinator::new(repo.clone()));

        // Four adjacent week-long windows on one room, racing.
        let windows = [
            ("2030-06-01", "2030-06-08"),
            ("2030-06-08", "2030-06-15"),
            ("2030-06-15", "2030-06-22"),
            ("2030-06-22", "2030-06-29"),
        ];
        let barrier = Arc::new(Barrier::new(windows.len()));
        let mut handles = Vec::new();
        for (check_in, check_out) in windows.iter().copied() {
            let coordinator = coordinator.clone();
            let barrier = barrier.clone();
            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                coordinator.book(request(1, check_in, check_out)).await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(repo.count(), windows.len());

        // Pairwise, no two persisted stays overlap.
        let all = repo.snapshot();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert!(!a.stay().overlaps(&b.stay()));
            }
        }
    }
}
