//! Persistence boundary for the leave accrual engine.
//!
//! The engine performs no I/O of its own; it reads and writes records
//! through the [`LeaveStore`] trait. Production callers back it with their
//! database; [`MemoryStore`] backs it with hash maps for tests and
//! embedded use.

mod memory;

pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::{Employee, LeaveGrant, LeaveOfAbsence, LeaveRequest};

/// Record access required by the engine.
///
/// All methods return [`EngineResult`] so a backing store can surface its
/// own failures; the engine propagates them unmodified. A caller that
/// retries after a partial failure must re-run the whole operation.
pub trait LeaveStore {
    /// Fetches an employee by id.
    ///
    /// Returns `EmployeeNotFound` if no such employee exists.
    fn employee(&self, id: &str) -> EngineResult<Employee>;

    /// Returns all leave grants for an employee.
    fn grants(&self, employee_id: &str) -> EngineResult<Vec<LeaveGrant>>;

    /// Returns all leave-of-absence records for an employee.
    fn absences(&self, employee_id: &str) -> EngineResult<Vec<LeaveOfAbsence>>;

    /// Fetches a leave-of-absence record by id.
    ///
    /// Returns `AbsenceNotFound` if no such record exists.
    fn absence(&self, id: &str) -> EngineResult<LeaveOfAbsence>;

    /// Returns the approved leave requests for an employee.
    fn approved_requests(&self, employee_id: &str) -> EngineResult<Vec<LeaveRequest>>;

    /// Persists a batch of new grants.
    fn insert_grants(&mut self, grants: Vec<LeaveGrant>) -> EngineResult<()>;

    /// Replaces every grant for an employee with the given set.
    ///
    /// This is the regeneration step: delete-all plus re-insert. Backing
    /// stores must execute it as one atomic unit with respect to that
    /// employee's grants (e.g. inside a transaction), or a concurrent
    /// reader could observe a transiently empty grant set. No
    /// cross-employee coordination is required.
    fn replace_grants(&mut self, employee_id: &str, grants: Vec<LeaveGrant>) -> EngineResult<()>;

    /// Persists a new leave-of-absence record.
    fn insert_absence(&mut self, absence: LeaveOfAbsence) -> EngineResult<()>;

    /// Deletes a leave-of-absence record, returning the deleted record.
    ///
    /// Returns `AbsenceNotFound` if no such record exists.
    fn remove_absence(&mut self, id: &str) -> EngineResult<LeaveOfAbsence>;

    /// Persists a leave request.
    fn insert_request(&mut self, request: LeaveRequest) -> EngineResult<()>;
}
