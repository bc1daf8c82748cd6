//! Balance aggregation.
//!
//! Nets active grants against the count of approved leave requests. No
//! reconciliation of which grant a request drew from is modeled; used days
//! are a flat count against the aggregate.

use crate::models::{ClassifiedGrant, LeaveBalance};

/// Aggregates classified grants and the approved-request count into a
/// balance.
///
/// `total_granted` sums days over grants that have not expired.
/// `total_used` is one day per approved request, regardless of which grant
/// it logically draws from. `remaining` is the difference and may be
/// negative; it is not clamped, callers display raw values.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{aggregate, classify_all};
/// use leave_engine::config::AccrualPolicy;
/// use leave_engine::models::LeaveGrant;
/// use chrono::NaiveDate;
///
/// let grants = vec![LeaveGrant {
///     id: "grant_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     grant_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     days_granted: 11,
///     expiration_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
/// }];
///
/// let reference = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
/// let classified = classify_all(&grants, reference, &AccrualPolicy::default());
/// let balance = aggregate(&classified, 3);
///
/// assert_eq!(balance.total_granted, 11);
/// assert_eq!(balance.total_used, 3);
/// assert_eq!(balance.remaining, 8);
/// ```
pub fn aggregate(grants: &[ClassifiedGrant], approved_request_count: u32) -> LeaveBalance {
    let total_granted: u32 = grants
        .iter()
        .filter(|g| !g.status.is_expired)
        .map(|g| g.grant.days_granted)
        .sum();

    LeaveBalance {
        total_granted,
        total_used: approved_request_count,
        remaining: i64::from(total_granted) - i64::from(approved_request_count),
    }
}
