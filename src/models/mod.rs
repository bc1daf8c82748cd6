//! Core data models for the leave accrual engine.
//!
//! This module contains all the domain records used throughout the engine.

mod absence;
mod employee;
mod grant;
mod request;
mod status;

pub use absence::LeaveOfAbsence;
pub use employee::Employee;
pub use grant::{LeaveGrant, NewGrant};
pub use request::{LeaveRequest, RequestStatus};
pub use status::{ClassifiedGrant, DetailedLeaveStatus, GrantStatus, LeaveBalance};
