//! Configuration types for the accrual policy.

use serde::{Deserialize, Serialize};

/// One row of the generated milestone table.
///
/// Milestone `k` is reached after `months_required` months of adjusted
/// tenure and awards `days_granted` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Adjusted tenure, in whole months, required to reach this milestone.
    pub months_required: u32,
    /// Leave days awarded at this milestone.
    pub days_granted: u32,
}

/// The statutory accrual policy.
///
/// Defaults follow the Japanese Labor Standards Act schedule: 10 days after
/// 6 months of service, then one additional day every 12 months (11, 12,
/// 13, …), each grant lapsing 24 months after its grant date. The schedule
/// has no upper bound on days per milestone; real statutes often cap the
/// yearly amount, so a deployment that needs a cap should extend the policy
/// rather than patch the scheduler.
///
/// # Example
///
/// ```
/// use leave_engine::config::AccrualPolicy;
///
/// let policy = AccrualPolicy::default();
/// assert_eq!(policy.milestone(0).months_required, 6);
/// assert_eq!(policy.milestone(0).days_granted, 10);
/// assert_eq!(policy.milestone(2).months_required, 30);
/// assert_eq!(policy.milestone(2).days_granted, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccrualPolicy {
    /// Months of adjusted tenure required for the first grant.
    pub initial_service_months: u32,
    /// Days awarded by the first grant.
    pub initial_days: u32,
    /// Months between consecutive milestones after the first.
    pub increment_interval_months: u32,
    /// Additional days awarded per milestone after the first.
    pub annual_increment_days: u32,
    /// Months from grant date to expiration date.
    pub expiry_months: u32,
    /// An active grant within this many days of expiration is expiring soon.
    pub expiring_soon_window_days: i64,
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        Self {
            initial_service_months: 6,
            initial_days: 10,
            increment_interval_months: 12,
            annual_increment_days: 1,
            expiry_months: 24,
            expiring_soon_window_days: 30,
        }
    }
}

impl AccrualPolicy {
    /// Returns milestone `index` of the generated schedule (index 0 is the
    /// first grant).
    pub fn milestone(&self, index: u32) -> Milestone {
        Milestone {
            months_required: self.initial_service_months + index * self.increment_interval_months,
            days_granted: self.initial_days + index * self.annual_increment_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_first_milestone() {
        let policy = AccrualPolicy::default();
        let first = policy.milestone(0);
        assert_eq!(first.months_required, 6);
        assert_eq!(first.days_granted, 10);
    }

    #[test]
    fn test_default_milestones_step_yearly() {
        let policy = AccrualPolicy::default();
        // 18 months -> 11 days, 30 months -> 12 days, 42 months -> 13 days
        for (index, (months, days)) in [(18, 11), (30, 12), (42, 13)].iter().enumerate() {
            let milestone = policy.milestone(index as u32 + 1);
            assert_eq!(milestone.months_required, *months);
            assert_eq!(milestone.days_granted, *days);
        }
    }

    #[test]
    fn test_schedule_is_uncapped() {
        let policy = AccrualPolicy::default();
        // Milestone 40 would be well past any statutory cap; the generated
        // table keeps climbing.
        assert_eq!(policy.milestone(40).days_granted, 50);
    }

    #[test]
    fn test_deserialize_partial_yaml_fills_defaults() {
        let policy: AccrualPolicy = serde_yaml::from_str("expiring_soon_window_days: 14").unwrap();
        assert_eq!(policy.expiring_soon_window_days, 14);
        assert_eq!(policy.initial_service_months, 6);
        assert_eq!(policy.expiry_months, 24);
    }

    #[test]
    fn test_serde_round_trip() {
        let policy = AccrualPolicy::default();
        let yaml = serde_yaml::to_string(&policy).unwrap();
        let parsed: AccrualPolicy = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(policy, parsed);
    }
}
