//! Grant expiration classification.
//!
//! A grant lapses two years after its grant date (exclusive-lapse
//! semantics: expired once the reference date reaches the expiration
//! date). This module classifies grants against a reference date and
//! flags those inside the expiring-soon window.

use chrono::NaiveDate;

use crate::config::AccrualPolicy;
use crate::models::{ClassifiedGrant, GrantStatus, LeaveGrant};

/// Classifies a single grant at the given reference date.
///
/// A grant is expired once `reference_date >= expiration_date`; the
/// boundary day itself is expired. `days_until_expiration` is the whole-day
/// distance to the expiration date and stays meaningful (negative) for
/// grants that already lapsed; aggregation only consults it for active
/// grants. An active grant within `policy.expiring_soon_window_days` of its
/// expiration is expiring soon.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::classify;
/// use leave_engine::config::AccrualPolicy;
/// use leave_engine::models::LeaveGrant;
/// use chrono::NaiveDate;
///
/// let grant = LeaveGrant {
///     id: "grant_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     grant_date: NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
///     days_granted: 10,
///     expiration_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
/// };
///
/// let status = classify(&grant, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(), &AccrualPolicy::default());
/// assert!(!status.is_expired);
/// assert_eq!(status.days_until_expiration, 16);
/// assert!(status.is_expiring_soon);
/// ```
pub fn classify(grant: &LeaveGrant, reference_date: NaiveDate, policy: &AccrualPolicy) -> GrantStatus {
    let is_expired = reference_date >= grant.expiration_date;
    let days_until_expiration = (grant.expiration_date - reference_date).num_days();
    let is_expiring_soon =
        !is_expired && days_until_expiration <= policy.expiring_soon_window_days;

    GrantStatus {
        is_expired,
        days_until_expiration,
        is_expiring_soon,
    }
}

/// Classifies a batch of grants, pairing each record with its status.
pub fn classify_all(
    grants: &[LeaveGrant],
    reference_date: NaiveDate,
    policy: &AccrualPolicy,
) -> Vec<ClassifiedGrant> {
    grants
        .iter()
        .map(|grant| ClassifiedGrant {
            grant: grant.clone(),
            status: classify(grant, reference_date, policy),
        })
        .collect()
}
