//! In-memory store implementation.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, LeaveGrant, LeaveOfAbsence, LeaveRequest};

use super::LeaveStore;

/// A [`LeaveStore`] backed by in-process collections.
///
/// Used by the test suite and by callers embedding the engine without a
/// database. Single-threaded; the atomicity `replace_grants` requires is
/// trivial here because nothing interleaves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: HashMap<String, Employee>,
    grants: Vec<LeaveGrant>,
    absences: Vec<LeaveOfAbsence>,
    requests: Vec<LeaveRequest>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee record.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Returns every grant in the store, across all employees.
    pub fn all_grants(&self) -> &[LeaveGrant] {
        &self.grants
    }
}

impl LeaveStore for MemoryStore {
    fn employee(&self, id: &str) -> EngineResult<Employee> {
        self.employees
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    fn grants(&self, employee_id: &str) -> EngineResult<Vec<LeaveGrant>> {
        Ok(self
            .grants
            .iter()
            .filter(|g| g.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn absences(&self, employee_id: &str) -> EngineResult<Vec<LeaveOfAbsence>> {
        Ok(self
            .absences
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn absence(&self, id: &str) -> EngineResult<LeaveOfAbsence> {
        self.absences
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| EngineError::AbsenceNotFound { id: id.to_string() })
    }

    fn approved_requests(&self, employee_id: &str) -> EngineResult<Vec<LeaveRequest>> {
        Ok(self
            .requests
            .iter()
            .filter(|r| r.employee_id == employee_id && r.is_approved())
            .cloned()
            .collect())
    }

    fn insert_grants(&mut self, grants: Vec<LeaveGrant>) -> EngineResult<()> {
        self.grants.extend(grants);
        Ok(())
    }

    fn replace_grants(&mut self, employee_id: &str, grants: Vec<LeaveGrant>) -> EngineResult<()> {
        self.grants.retain(|g| g.employee_id != employee_id);
        self.grants.extend(grants);
        Ok(())
    }

    fn insert_absence(&mut self, absence: LeaveOfAbsence) -> EngineResult<()> {
        self.absences.push(absence);
        Ok(())
    }

    fn remove_absence(&mut self, id: &str) -> EngineResult<LeaveOfAbsence> {
        let position = self
            .absences
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| EngineError::AbsenceNotFound { id: id.to_string() })?;
        Ok(self.absences.remove(position))
    }

    fn insert_request(&mut self, request: LeaveRequest) -> EngineResult<()> {
        self.requests.push(request);
        Ok(())
    }
}
