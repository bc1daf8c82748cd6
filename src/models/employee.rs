//! Employee model.
//!
//! This module defines the Employee struct representing a worker whose
//! paid-leave entitlement is tracked by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee subject to leave accrual.
///
/// The hire date is the anchor of the tenure clock and must not change once
/// grants have been derived from it; display fields are free to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's email address.
    pub email: String,
    /// The date the employee started employment.
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Returns true if the employee had been hired on or before the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Taro Yamada".to_string(),
    ///     email: "taro@example.com".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    /// };
    /// assert!(employee.hired_by(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()));
    /// ```
    pub fn hired_by(&self, date: NaiveDate) -> bool {
        self.hire_date <= date
    }
}
