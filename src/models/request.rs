//! Leave request model and status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The approval status of a leave request.
///
/// Only approved requests consume entitlement. Intake upstream of the engine
/// auto-approves, but the status is kept explicit so a future approval flow
/// does not change the balance arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// The request counts against the balance.
    Approved,
    /// The request is awaiting a decision and does not count.
    Pending,
    /// The request was declined and does not count.
    Rejected,
}

/// A request to take one day of paid leave.
///
/// Each approved request consumes exactly one day of entitlement. Requests
/// are not linked to a specific grant; consumption is a flat count subtracted
/// from the aggregate of active grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for this record.
    pub id: String,
    /// The employee taking the leave.
    pub employee_id: String,
    /// The day of leave taken.
    pub date: NaiveDate,
    /// Approval status; only [`RequestStatus::Approved`] counts.
    pub status: RequestStatus,
    /// Optional free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

impl LeaveRequest {
    /// Returns true if this request consumes entitlement.
    pub fn is_approved(&self) -> bool {
        self.status == RequestStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&RequestStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "id": "req_001",
            "employee_id": "emp_001",
            "date": "2025-08-11",
            "status": "APPROVED",
            "reason": "summer holiday"
        }"#;

        let request: LeaveRequest = serde_json::from_str(json).unwrap();
        assert!(request.is_approved());
        assert_eq!(request.reason.as_deref(), Some("summer holiday"));
    }

    #[test]
    fn test_only_approved_counts() {
        let mut request = LeaveRequest {
            id: "req_001".to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
            status: RequestStatus::Pending,
            reason: None,
        };
        assert!(!request.is_approved());

        request.status = RequestStatus::Rejected;
        assert!(!request.is_approved());

        request.status = RequestStatus::Approved;
        assert!(request.is_approved());
    }
}
