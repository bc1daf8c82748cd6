//! Leave grant models.
//!
//! A grant is a discrete award of paid-leave days, dated by the accrual
//! schedule and subject to a fixed expiration window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted award of paid-leave days.
///
/// Grant records are created only by the accrual scheduler (directly or via
/// regeneration), never edited, and deleted en masse when a leave of absence
/// changes. Record ids are minted fresh on every regeneration, so no caller
/// should key long-lived state on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveGrant {
    /// Unique identifier for this record.
    pub id: String,
    /// The employee this grant belongs to.
    pub employee_id: String,
    /// The calendar date the grant was due, derived from the schedule.
    pub grant_date: NaiveDate,
    /// Number of leave days awarded by this grant.
    pub days_granted: u32,
    /// The date the grant lapses; the grant is expired once the reference
    /// date reaches this day.
    pub expiration_date: NaiveDate,
}

/// A grant computed by the scheduler but not yet persisted.
///
/// The scheduler is pure; it emits `NewGrant` values and leaves id minting
/// and persistence to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGrant {
    /// The calendar date the grant is due.
    pub grant_date: NaiveDate,
    /// Number of leave days awarded.
    pub days_granted: u32,
    /// The date the grant lapses.
    pub expiration_date: NaiveDate,
}

impl NewGrant {
    /// Converts this pending grant into a persisted record for an employee,
    /// minting a fresh id.
    pub fn into_record(self, employee_id: &str) -> LeaveGrant {
        LeaveGrant {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            grant_date: self.grant_date,
            days_granted: self.days_granted,
            expiration_date: self.expiration_date,
        }
    }
}
