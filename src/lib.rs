//! Accrual and Expiration Engine for Statutory Paid Leave
//!
//! This crate tracks paid-leave entitlement for employees: it derives grant
//! events from tenure (adjusted for leave-of-absence periods), expires each
//! grant after a fixed two-year window, and nets active grants against taken
//! leave to report a remaining balance.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
