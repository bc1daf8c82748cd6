//! Tenure adjustment for leave-of-absence periods.
//!
//! This module converts a hire date, a reference date, and a set of
//! leave-of-absence intervals into the adjusted tenure figure that gates
//! accrual eligibility. Time spent on a leave of absence does not count
//! toward employment duration.

use chrono::NaiveDate;

use crate::models::LeaveOfAbsence;

/// Average month length used to convert elapsed days into whole months.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// The breakdown of a tenure adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenureAdjustment {
    /// Whole days elapsed from hire to reference date.
    pub raw_days: i64,
    /// Days excluded for leave-of-absence periods, clamped to the
    /// reference date.
    pub excluded_days: i64,
    /// `raw_days - excluded_days`.
    pub adjusted_days: i64,
    /// Adjusted tenure in whole months, floored and never negative.
    pub months: u32,
}

/// Computes the tenure adjustment for an employee.
///
/// Raw elapsed days are the whole days from `hire_date` to
/// `reference_date`. Each absence that has started on or before the
/// reference date contributes its overlap with `[start, reference_date]`:
/// an interval extending past the reference date only counts up to it, and
/// a negative overlap counts as zero. Absences starting strictly after the
/// reference date contribute nothing. Intervals are assumed disjoint
/// (enforced at creation), so overlaps are summed without de-duplication.
///
/// The day total converts to months through the [`DAYS_PER_MONTH`]
/// approximation, floored to a whole month and clamped at zero.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::adjust_tenure;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
/// let adjustment = adjust_tenure(hire, reference, &[]);
/// assert_eq!(adjustment.months, 34);
/// ```
pub fn adjust_tenure(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
    absences: &[LeaveOfAbsence],
) -> TenureAdjustment {
    let raw_days = (reference_date - hire_date).num_days();

    let excluded_days: i64 = absences
        .iter()
        .filter(|absence| absence.start_date <= reference_date)
        .map(|absence| {
            // An ongoing absence only counts up to the reference date
            let effective_end = absence.end_date.min(reference_date);
            (effective_end - absence.start_date).num_days().max(0)
        })
        .sum();

    let adjusted_days = raw_days - excluded_days;
    let months = if adjusted_days > 0 {
        (adjusted_days as f64 / DAYS_PER_MONTH).floor() as u32
    } else {
        0
    };

    TenureAdjustment {
        raw_days,
        excluded_days,
        adjusted_days,
        months,
    }
}

/// Convenience wrapper returning only the adjusted tenure in whole months.
pub fn adjusted_tenure_months(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
    absences: &[LeaveOfAbsence],
) -> u32 {
    adjust_tenure(hire_date, reference_date, absences).months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn absence(start: NaiveDate, end: NaiveDate) -> LeaveOfAbsence {
        LeaveOfAbsence {
            id: "loa_test".to_string(),
            employee_id: "emp_001".to_string(),
            start_date: start,
            end_date: end,
            reason: None,
        }
    }

    #[test]
    fn test_no_absences_full_tenure() {
        let adjustment = adjust_tenure(date(2023, 1, 1), date(2025, 11, 1), &[]);
        // 1035 elapsed days / 30.44 = 34.00..., floored
        assert_eq!(adjustment.raw_days, 1035);
        assert_eq!(adjustment.excluded_days, 0);
        assert_eq!(adjustment.months, 34);
    }

    #[test]
    fn test_six_months_exactly() {
        // 181 days / 30.44 = 5.94 -> 5 months; one more day crosses 6
        let adjustment = adjust_tenure(date(2023, 1, 1), date(2023, 7, 1), &[]);
        assert_eq!(adjustment.months, 5);

        let adjustment = adjust_tenure(date(2023, 1, 1), date(2023, 7, 3), &[]);
        assert_eq!(adjustment.months, 6);
    }

    #[test]
    fn test_absence_reduces_tenure() {
        let absences = vec![absence(date(2023, 7, 1), date(2023, 12, 31))];
        let adjustment = adjust_tenure(date(2023, 1, 1), date(2025, 11, 1), &absences);
        assert_eq!(adjustment.excluded_days, 183);
        assert_eq!(adjustment.adjusted_days, 1035 - 183);
        // 852 days / 30.44 = 27.99, floored
        assert_eq!(adjustment.months, 27);
    }

    #[test]
    fn test_ongoing_absence_clamped_to_reference() {
        let absences = vec![absence(date(2025, 10, 1), date(2026, 4, 1))];
        let adjustment = adjust_tenure(date(2023, 1, 1), date(2025, 11, 1), &absences);
        // Only the 31 days up to the reference date are excluded
        assert_eq!(adjustment.excluded_days, 31);
    }

    #[test]
    fn test_future_absence_contributes_nothing() {
        let absences = vec![absence(date(2026, 1, 1), date(2026, 6, 1))];
        let adjustment = adjust_tenure(date(2023, 1, 1), date(2025, 11, 1), &absences);
        assert_eq!(adjustment.excluded_days, 0);
        assert_eq!(adjustment.months, 34);
    }

    #[test]
    fn test_multiple_disjoint_absences_sum() {
        let absences = vec![
            absence(date(2023, 3, 1), date(2023, 4, 1)),
            absence(date(2024, 3, 1), date(2024, 5, 1)),
        ];
        let adjustment = adjust_tenure(date(2023, 1, 1), date(2025, 11, 1), &absences);
        assert_eq!(adjustment.excluded_days, 31 + 61);
    }

    #[test]
    fn test_reference_before_hire_clamps_to_zero() {
        let adjustment = adjust_tenure(date(2025, 1, 1), date(2024, 1, 1), &[]);
        assert!(adjustment.raw_days < 0);
        assert_eq!(adjustment.months, 0);
    }

    #[test]
    fn test_absence_covering_whole_tenure_yields_zero_months() {
        let absences = vec![absence(date(2023, 1, 1), date(2026, 1, 1))];
        let adjustment = adjust_tenure(date(2023, 1, 1), date(2025, 11, 1), &absences);
        assert_eq!(adjustment.adjusted_days, 0);
        assert_eq!(adjustment.months, 0);
    }
}
