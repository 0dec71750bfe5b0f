//! Booking coordination
//!
//! Decides whether a proposed stay may be created and enforces that
//! decision atomically against concurrent booking attempts:
//!
//! - `AvailabilityChecker`: read-only overlap check against a room's
//!   active reservations
//! - `RoomLocks`: per-room exclusivity scopes
//! - `BookingCoordinator`: validate, lock, re-check, persist

pub mod availability;
pub mod coordinator;
pub mod error;
pub mod locks;

pub use availability::{Availability, AvailabilityChecker};
pub use coordinator::{BookingCoordinator, StayRequest};
pub use error::BookingError;
pub use locks::RoomLocks;

// ── Test support ───────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::domain::reservation::{Reservation, ReservationRepository};
    use crate::domain::{DomainError, DomainResult};

    /// In-memory reservation store with read/write counters, used to
    /// exercise the booking core without a database.
    #[derive(Default)]
    pub struct MemoryReservations {
        rows: Mutex<Vec<Reservation>>,
        pub reads: AtomicUsize,
        pub writes: AtomicUsize,
        pub fail_inserts: AtomicBool,
    }

    impl MemoryReservations {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn snapshot(&self) -> Vec<Reservation> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReservationRepository for MemoryReservations {
        async fn insert(&self, reservation: Reservation) -> DomainResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_inserts.load(Ordering::SeqCst) {
                return Err(DomainError::Validation(
                    "Database error: disk I/O error".to_string(),
                ));
            }
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| r.id == reservation.id) {
                return Err(DomainError::Conflict(format!(
                    "reservation {}",
                    reservation.id
                )));
            }
            rows.push(reservation);
            Ok(())
        }

        async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
        }

        async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_room(&self, room_id: i32) -> DomainResult<Vec<Reservation>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.room_id == room_id)
                .cloned()
                .collect())
        }

        async fn find_active_for_room(&self, room_id: i32) -> DomainResult<Vec<Reservation>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.room_id == room_id && r.is_active())
                .cloned()
                .collect())
        }

        async fn find_for_guest(&self, guest_id: &str) -> DomainResult<Vec<Reservation>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.guest_id == guest_id)
                .cloned()
                .collect())
        }

        async fn count_active_for_room(&self, room_id: i32) -> DomainResult<u64> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.room_id == room_id && r.is_active())
                .count() as u64)
        }

        async fn cancel(&self, id: Uuid) -> DomainResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|r| r.id == id) {
                Some(r) => {
                    r.cancel();
                    Ok(())
                }
                None => Err(DomainError::NotFound {
                    entity: "Reservation",
                    field: "id",
                    value: id.to_string(),
                }),
            }
        }
    }
}
