//! Core data models for spendlog
//!
//! The expense domain is small: a single record type representing one
//! tracked expense.

pub mod expense;

pub use expense::{Expense, TIMESTAMP_FORMAT};
