//! Result and annotation types produced by the engine.
//!
//! These are the records the exposed operations return to callers:
//! per-grant expiration classification, the netted balance, and the
//! detailed status view combining both.

use serde::{Deserialize, Serialize};

use super::{LeaveGrant, LeaveRequest};

/// Expiration classification of a single grant at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantStatus {
    /// True once the reference date has reached the expiration date.
    pub is_expired: bool,
    /// Whole days from the reference date to expiration. Negative when the
    /// grant has already lapsed; kept for diagnostic display.
    pub days_until_expiration: i64,
    /// True for an active grant within the expiring-soon window.
    pub is_expiring_soon: bool,
}

/// A grant annotated with its expiration classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedGrant {
    /// The underlying grant record.
    #[serde(flatten)]
    pub grant: LeaveGrant,
    /// Its classification at the reference date.
    #[serde(flatten)]
    pub status: GrantStatus,
}

/// The netted leave balance for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Sum of days over grants that have not expired.
    pub total_granted: u32,
    /// Number of approved leave requests (one day each).
    pub total_used: u32,
    /// `total_granted - total_used`; may be negative and is not clamped,
    /// callers display the raw value.
    pub remaining: i64,
}

/// Detailed leave status: every grant annotated, the approved requests,
/// the balance, and the subset of grants expiring soon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedLeaveStatus {
    /// All grants in ascending grant-date order, each classified.
    pub grants: Vec<ClassifiedGrant>,
    /// Approved leave requests in descending date order.
    pub leave_requests: Vec<LeaveRequest>,
    /// The netted balance over active grants.
    #[serde(flatten)]
    pub balance: LeaveBalance,
    /// Active grants within the expiring-soon window.
    pub expiring_grants: Vec<ClassifiedGrant>,
}
