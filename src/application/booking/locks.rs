//! Per-room exclusivity scopes

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-room async locks.
///
/// One mutual-exclusion unit per room id, created lazily on first use.
/// Bookings for different rooms never contend. Guards are owned and
/// release on drop, so the scope is freed on every exit path, including
/// a caller abandoning the booking mid-flight.
pub struct RoomLocks {
    locks: DashMap<i32, Arc<Mutex<()>>>,
}

impl RoomLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Acquire the exclusivity scope for one room, waiting if another
    /// booking for the same room currently holds it.
    pub async fn acquire(&self, room_id: i32) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(room_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

impl Default for RoomLocks {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn same_room_serializes() {
        let locks = RoomLocks::new();
        let guard = locks.acquire(1).await;

        // A second acquire for the same room must wait.
        assert!(timeout(Duration::from_millis(50), locks.acquire(1))
            .await
            .is_err());

        drop(guard);
        assert!(timeout(Duration::from_millis(50), locks.acquire(1))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn different_rooms_do_not_block() {
        let locks = RoomLocks::new();
        let _room_one = locks.acquire(1).await;

        let room_two = timeout(Duration::from_millis(50), locks.acquire(2)).await;
        assert!(room_two.is_ok());
    }

    #[tokio::test]
    async fn reacquire_after_drop() {
        let locks = RoomLocks::new();
        for _ in 0..3 {
            let guard = locks.acquire(9).await;
            drop(guard);
        }
    }
}
