//! Stay date range
//!
//! Stays are half-open intervals `[check_in, check_out)`: the checkout
//! day is not occupied, so one guest's checkout date may equal the next
//! guest's check-in date and the room turns over same-day.

use chrono::NaiveDate;
use thiserror::Error;

/// Why a proposed stay range was rejected. First failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StayRangeError {
    #[error("check-in date is in the past")]
    PastCheckIn,
    #[error("check-out date must be after check-in date")]
    InvertedOrEmptyRange,
}

/// A proposed or recorded `[check_in, check_out)` date pair for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Check the range is well-formed for a new booking.
    ///
    /// Rules in order: check-in must not be before `today`, and check-in
    /// must be strictly before check-out. No upper bound on stay length
    /// or booking horizon is enforced.
    pub fn validate(&self, today: NaiveDate) -> Result<(), StayRangeError> {
        if self.check_in < today {
            return Err(StayRangeError::PastCheckIn);
        }
        if self.check_in >= self.check_out {
            return Err(StayRangeError::InvertedOrEmptyRange);
        }
        Ok(())
    }

    /// Whether two half-open stay intervals intersect.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Number of nights covered by the range
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl std::fmt::Display for StayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn range(check_in: &str, check_out: &str) -> StayRange {
        StayRange::new(d(check_in), d(check_out))
    }

    #[test]
    fn valid_range_passes() {
        let today = d("2024-06-10");
        assert!(range("2024-06-10", "2024-06-12").validate(today).is_ok());
        assert!(range("2024-07-01", "2024-07-02").validate(today).is_ok());
    }

    #[test]
    fn past_check_in_rejected() {
        let today = d("2024-06-10");
        assert_eq!(
            range("2024-06-01", "2024-06-03").validate(today),
            Err(StayRangeError::PastCheckIn)
        );
    }

    #[test]
    fn inverted_range_rejected() {
        let today = d("2024-06-10");
        assert_eq!(
            range("2024-06-15", "2024-06-12").validate(today),
            Err(StayRangeError::InvertedOrEmptyRange)
        );
    }

    #[test]
    fn empty_range_rejected() {
        let today = d("2024-06-10");
        assert_eq!(
            range("2024-06-15", "2024-06-15").validate(today),
            Err(StayRangeError::InvertedOrEmptyRange)
        );
    }

    #[test]
    fn past_check_in_wins_over_inversion() {
        // Both rules broken; the past-check-in rule is reported first.
        let today = d("2024-06-10");
        assert_eq!(
            range("2024-06-05", "2024-06-01").validate(today),
            Err(StayRangeError::PastCheckIn)
        );
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let a = range("2024-06-01", "2024-06-05");
        let b = range("2024-06-10", "2024-06-12");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        // Shared boundary date: checkout day equals the next check-in day.
        let a = range("2024-06-01", "2024-06-05");
        let b = range("2024-06-05", "2024-06-08");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn partial_overlap_detected() {
        let a = range("2024-06-01", "2024-06-05");
        let b = range("2024-06-04", "2024-06-06");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = range("2024-06-01", "2024-06-10");
        let inner = range("2024-06-03", "2024-06-04");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn identical_ranges_overlap() {
        let a = range("2024-06-01", "2024-06-05");
        assert!(a.overlaps(&a.clone()));
    }

    #[test]
    fn nights_count() {
        assert_eq!(range("2024-06-01", "2024-06-05").nights(), 4);
        assert_eq!(range("2024-06-01", "2024-06-02").nights(), 1);
    }
}
