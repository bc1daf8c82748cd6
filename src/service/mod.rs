//! Exposed engine operations.
//!
//! [`LeaveService`] orchestrates the pure calculation modules against a
//! [`LeaveStore`]: accrual passes, full regeneration after leave-of-absence
//! changes, and the status queries. Every operation takes an explicit
//! reference date; the engine never reads the system clock, so callers
//! (and tests) control time.

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{adjust_tenure, aggregate, classify_all, pending_grants};
use crate::config::AccrualPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ClassifiedGrant, DetailedLeaveStatus, LeaveBalance, LeaveGrant, LeaveOfAbsence, LeaveRequest,
    RequestStatus,
};
use crate::store::LeaveStore;

/// The engine facade called by the routing layer.
///
/// Generic over the storage backend so production callers can plug in their
/// database while tests run against [`crate::store::MemoryStore`].
#[derive(Debug)]
pub struct LeaveService<S: LeaveStore> {
    store: S,
    policy: AccrualPolicy,
}

impl<S: LeaveStore> LeaveService<S> {
    /// Creates a service over the given store and accrual policy.
    pub fn new(store: S, policy: AccrualPolicy) -> Self {
        Self { store, policy }
    }

    /// Returns a reference to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a mutable reference to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns the accrual policy in force.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }

    /// Runs an accrual pass for an employee and persists any grants due.
    ///
    /// Computes adjusted tenure at `reference_date`, derives the milestones
    /// the employee has reached but not yet been granted, persists them,
    /// and returns how many were added. Repeated invocation with no
    /// intervening state change adds nothing.
    ///
    /// # Errors
    ///
    /// `EmployeeNotFound` if the employee does not exist; storage failures
    /// propagate unmodified.
    pub fn calculate_and_grant_leave(
        &mut self,
        employee_id: &str,
        reference_date: NaiveDate,
    ) -> EngineResult<usize> {
        let employee = self.store.employee(employee_id)?;
        let absences = self.store.absences(employee_id)?;
        let existing = self.store.grants(employee_id)?;

        let adjustment = adjust_tenure(employee.hire_date, reference_date, &absences);
        let due = pending_grants(
            employee.hire_date,
            reference_date,
            adjustment.months,
            &existing,
            &self.policy,
        );

        let count = due.len();
        if count > 0 {
            let records: Vec<LeaveGrant> = due
                .into_iter()
                .map(|grant| grant.into_record(employee_id))
                .collect();
            self.store.insert_grants(records)?;
        }

        info!(
            employee_id,
            adjusted_months = adjustment.months,
            excluded_days = adjustment.excluded_days,
            new_grants = count,
            "Accrual pass complete"
        );
        Ok(count)
    }

    /// Discards every grant for an employee and regenerates from scratch.
    ///
    /// Runs after any leave-of-absence mutation: the full current absence
    /// set is applied to the tenure clock and the grant table is rebuilt
    /// through [`LeaveStore::replace_grants`], which the backing store must
    /// execute atomically. Returns the number of grants after the reset.
    /// Grant record ids are minted fresh.
    ///
    /// # Errors
    ///
    /// `EmployeeNotFound` if the employee does not exist; storage failures
    /// propagate unmodified, and a caller retrying after one must re-run
    /// this full reset rather than patch the grant set.
    pub fn reset_and_recalculate_grants(
        &mut self,
        employee_id: &str,
        reference_date: NaiveDate,
    ) -> EngineResult<usize> {
        let employee = self.store.employee(employee_id)?;
        let absences = self.store.absences(employee_id)?;

        let adjustment = adjust_tenure(employee.hire_date, reference_date, &absences);
        let records: Vec<LeaveGrant> = pending_grants(
            employee.hire_date,
            reference_date,
            adjustment.months,
            &[],
            &self.policy,
        )
        .into_iter()
        .map(|grant| grant.into_record(employee_id))
        .collect();

        let count = records.len();
        self.store.replace_grants(employee_id, records)?;

        info!(
            employee_id,
            adjusted_months = adjustment.months,
            grants = count,
            "Grant table regenerated"
        );
        Ok(count)
    }

    /// Returns the netted balance over non-expired grants.
    pub fn leave_status(
        &self,
        employee_id: &str,
        reference_date: NaiveDate,
    ) -> EngineResult<LeaveBalance> {
        self.store.employee(employee_id)?;

        let grants = self.store.grants(employee_id)?;
        let classified = classify_all(&grants, reference_date, &self.policy);
        let used = self.store.approved_requests(employee_id)?.len() as u32;

        Ok(aggregate(&classified, used))
    }

    /// Returns the full status view: every grant classified, the approved
    /// requests, the balance, and the grants expiring soon.
    ///
    /// Grants are ordered by grant date ascending, requests by date
    /// descending.
    pub fn detailed_leave_status(
        &self,
        employee_id: &str,
        reference_date: NaiveDate,
    ) -> EngineResult<DetailedLeaveStatus> {
        self.store.employee(employee_id)?;

        let mut grants = self.store.grants(employee_id)?;
        grants.sort_by_key(|g| g.grant_date);
        let classified = classify_all(&grants, reference_date, &self.policy);

        let mut requests = self.store.approved_requests(employee_id)?;
        requests.sort_by(|a, b| b.date.cmp(&a.date));

        let balance = aggregate(&classified, requests.len() as u32);
        let expiring_grants: Vec<ClassifiedGrant> = classified
            .iter()
            .filter(|g| g.status.is_expiring_soon)
            .cloned()
            .collect();

        Ok(DetailedLeaveStatus {
            grants: classified,
            leave_requests: requests,
            balance,
            expiring_grants,
        })
    }

    /// Returns the active grants expiring within `within_days` of the
    /// reference date, excluding grants that have already lapsed.
    pub fn expiring_leaves(
        &self,
        employee_id: &str,
        reference_date: NaiveDate,
        within_days: i64,
    ) -> EngineResult<Vec<ClassifiedGrant>> {
        self.store.employee(employee_id)?;

        let grants = self.store.grants(employee_id)?;
        Ok(classify_all(&grants, reference_date, &self.policy)
            .into_iter()
            .filter(|g| !g.status.is_expired && g.status.days_until_expiration <= within_days)
            .collect())
    }

    /// Records a leave-of-absence period and regenerates the employee's
    /// grants.
    ///
    /// The interval is half-open `[start, end)`. Validation runs before
    /// anything is written: the start must precede the end
    /// (`InvalidRange`), and the interval must not intersect any existing
    /// period for the employee (`Overlap`). On rejection the grant set is
    /// untouched.
    pub fn add_leave_of_absence(
        &mut self,
        employee_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: Option<String>,
        reference_date: NaiveDate,
    ) -> EngineResult<LeaveOfAbsence> {
        self.store.employee(employee_id)?;

        if start_date >= end_date {
            return Err(EngineError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }

        let existing = self.store.absences(employee_id)?;
        if let Some(conflict) = existing.iter().find(|a| a.intersects(start_date, end_date)) {
            warn!(
                employee_id,
                %start_date,
                %end_date,
                existing_start = %conflict.start_date,
                existing_end = %conflict.end_date,
                "Rejected overlapping leave of absence"
            );
            return Err(EngineError::Overlap {
                start: start_date,
                end: end_date,
                existing_start: conflict.start_date,
                existing_end: conflict.end_date,
            });
        }

        let absence = LeaveOfAbsence {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            start_date,
            end_date,
            reason,
        };
        self.store.insert_absence(absence.clone())?;

        self.reset_and_recalculate_grants(employee_id, reference_date)?;
        Ok(absence)
    }

    /// Deletes a leave-of-absence record and regenerates the owning
    /// employee's grants.
    ///
    /// Returns the number of grants after regeneration.
    ///
    /// # Errors
    ///
    /// `AbsenceNotFound` if the record does not exist.
    pub fn remove_leave_of_absence(
        &mut self,
        absence_id: &str,
        reference_date: NaiveDate,
    ) -> EngineResult<usize> {
        let removed = self.store.remove_absence(absence_id)?;

        info!(
            absence_id,
            employee_id = removed.employee_id.as_str(),
            "Leave of absence removed"
        );
        self.reset_and_recalculate_grants(&removed.employee_id, reference_date)
    }

    /// Records a day of taken leave for an employee.
    ///
    /// Intake is auto-approved; each request consumes exactly one day of
    /// entitlement when the balance is aggregated.
    pub fn record_leave_request(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        reason: Option<String>,
    ) -> EngineResult<LeaveRequest> {
        self.store.employee(employee_id)?;

        let request = LeaveRequest {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            date,
            status: RequestStatus::Approved,
            reason,
        };
        self.store.insert_request(request.clone())?;
        Ok(request)
    }
}
