//! Calculation logic for the leave accrual engine.
//!
//! This module contains the pure computations: tenure adjustment for
//! leave-of-absence periods, the milestone-driven accrual scheduler,
//! per-grant expiration classification, and balance aggregation. Every
//! function here takes an explicit reference date and performs no I/O.

mod accrual;
mod balance;
mod expiration;
mod tenure;

pub use accrual::pending_grants;
pub use balance::aggregate;
pub use expiration::{classify, classify_all};
pub use tenure::{DAYS_PER_MONTH, TenureAdjustment, adjust_tenure, adjusted_tenure_months};
