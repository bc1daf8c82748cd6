//! Leave-of-absence model.
//!
//! A leave of absence is an interval of unpaid, non-working time that is
//! excluded from tenure-based accrual eligibility.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An unpaid leave-of-absence period, half-open `[start_date, end_date)`.
///
/// Intervals for the same employee must be disjoint; the service validates
/// this at creation so downstream tenure adjustment can sum overlaps without
/// de-duplicating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveOfAbsence {
    /// Unique identifier for this record.
    pub id: String,
    /// The employee this absence belongs to.
    pub employee_id: String,
    /// First day of the absence (inclusive).
    pub start_date: NaiveDate,
    /// Day the employee returned to work (exclusive).
    pub end_date: NaiveDate,
    /// Optional free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

impl LeaveOfAbsence {
    /// Returns true if this interval intersects `[start, end)`.
    ///
    /// Both intervals are half-open, so periods that merely share a boundary
    /// day (one ends the day the other starts) do not intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::LeaveOfAbsence;
    /// use chrono::NaiveDate;
    ///
    /// let absence = LeaveOfAbsence {
    ///     id: "loa_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
    ///     reason: None,
    /// };
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    /// assert!(absence.intersects(start, end));
    ///
    /// // Back-to-back periods do not intersect
    /// let start = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    /// assert!(!absence.intersects(start, end));
    /// ```
    pub fn intersects(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date < end && start < self.end_date
    }
}
