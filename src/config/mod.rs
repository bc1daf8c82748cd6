//! Accrual policy configuration.
//!
//! The milestone schedule (how much tenure earns how many days, how long a
//! grant lives, and what counts as "expiring soon") is configuration, not
//! code. [`AccrualPolicy`] carries the knobs and generates the milestone
//! table; [`PolicyLoader`] reads a policy from a YAML file.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{AccrualPolicy, Milestone};
