//! The milestone-driven accrual scheduler.
//!
//! Given adjusted tenure and the grants already on record, this module
//! derives the new grant events an employee is due. The milestone table is
//! generated from the [`AccrualPolicy`]: the first grant after the initial
//! service period, then one more day at every subsequent interval.

use chrono::{Months, NaiveDate};

use crate::config::AccrualPolicy;
use crate::models::{LeaveGrant, NewGrant};

/// Computes the grants an employee is due but does not yet have.
///
/// Milestones are walked in order. For each one, eligibility requires both:
///
/// - `adjusted_tenure_months` has reached the milestone's required months,
///   and
/// - the milestone's calendar date (`hire_date` plus required months, in
///   calendar-month addition) has arrived, i.e. is on or before
///   `reference_date`.
///
/// Both checks are needed: the tenure figure uses an average-month divisor
/// and can diverge slightly from calendar arithmetic, and the calendar date
/// is authoritative for whether a grant date has actually arrived. The walk
/// stops at the first milestone failing either check.
///
/// A milestone whose calendar date exactly matches an existing grant's date
/// is skipped, which makes repeated invocation idempotent. Each emitted
/// grant expires `policy.expiry_months` calendar months after its grant
/// date.
///
/// This is a pure function; persisting the returned grants is the caller's
/// responsibility. Inputs with no eligible milestone simply yield an empty
/// list.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::pending_grants;
/// use leave_engine::config::AccrualPolicy;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
/// let due = pending_grants(hire, reference, 6, &[], &AccrualPolicy::default());
///
/// assert_eq!(due.len(), 1);
/// assert_eq!(due[0].grant_date, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
/// assert_eq!(due[0].days_granted, 10);
/// assert_eq!(due[0].expiration_date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
/// ```
pub fn pending_grants(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
    adjusted_tenure_months: u32,
    existing_grants: &[LeaveGrant],
    policy: &AccrualPolicy,
) -> Vec<NewGrant> {
    let mut due = Vec::new();

    for index in 0.. {
        let milestone = policy.milestone(index);
        if adjusted_tenure_months < milestone.months_required {
            break;
        }

        let grant_date = match hire_date.checked_add_months(Months::new(milestone.months_required))
        {
            Some(date) => date,
            None => break,
        };
        if grant_date > reference_date {
            break;
        }

        // Idempotency guard: one grant per exact calendar date
        if existing_grants.iter().any(|g| g.grant_date == grant_date) {
            continue;
        }

        let expiration_date = match grant_date.checked_add_months(Months::new(policy.expiry_months))
        {
            Some(date) => date,
            None => break,
        };

        due.push(NewGrant {
            grant_date,
            days_granted: milestone.days_granted,
            expiration_date,
        });
    }

    due
}
