//! Error types for the leave accrual engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during accrual and regeneration.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the leave accrual engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Every
/// variant represents a deterministic input-validation failure or a
/// propagated storage fault; none are retryable by the engine itself.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced employee does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// The referenced leave-of-absence record does not exist.
    #[error("Leave of absence not found: {id}")]
    AbsenceNotFound {
        /// The absence id that was not found.
        id: String,
    },

    /// A leave-of-absence interval's end date is not after its start date.
    #[error("Invalid leave of absence range: start {start} must precede end {end}")]
    InvalidRange {
        /// The start of the rejected interval.
        start: NaiveDate,
        /// The end of the rejected interval.
        end: NaiveDate,
    },

    /// A leave-of-absence interval intersects an existing interval for the
    /// same employee.
    #[error(
        "Leave of absence [{start}, {end}) overlaps existing period [{existing_start}, {existing_end})"
    )]
    Overlap {
        /// The start of the rejected interval.
        start: NaiveDate,
        /// The end of the rejected interval.
        end: NaiveDate,
        /// The start of the existing interval it intersects.
        existing_start: NaiveDate,
        /// The end of the existing interval it intersects.
        existing_end: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A storage-layer failure, propagated unmodified to the caller.
    ///
    /// The caller decides whether to retry; a retry after a partial
    /// regeneration failure must re-run the full reset rather than patch
    /// the grant set incrementally.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "emp_404".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: emp_404");
    }

    #[test]
    fn test_absence_not_found_displays_id() {
        let error = EngineError::AbsenceNotFound {
            id: "loa_001".to_string(),
        };
        assert_eq!(error.to_string(), "Leave of absence not found: loa_001");
    }

    #[test]
    fn test_invalid_range_displays_both_dates() {
        let error = EngineError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid leave of absence range: start 2024-03-01 must precede end 2024-02-01"
        );
    }

    #[test]
    fn test_overlap_displays_both_intervals() {
        let error = EngineError::Overlap {
            start: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            existing_start: NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
            existing_end: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Leave of absence [2023-10-01, 2024-02-01) overlaps existing period [2023-07-01, 2023-12-31)"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_storage_error_displays_message() {
        let error = EngineError::StorageError {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Storage error: connection reset");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "emp_001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
