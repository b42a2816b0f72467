//! Expense model
//!
//! Represents a single tracked expense with amount, categories, payment
//! methods, description and a creation timestamp.

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format of the `created_at` timestamp, e.g. "2026-08-28 14:03:07"
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single tracked expense
///
/// Serialized field names match the on-disk layout for both JSON and YAML;
/// the in-memory `created_at` field is written as `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within a store; assigned by the store, never here
    pub id: u64,

    /// Spent amount (non-negative)
    pub amount: f64,

    /// One or more categories, in display order; duplicates permitted
    pub categories: Vec<String>,

    /// One or more payment methods, in display order
    pub payment_methods: Vec<String>,

    /// Free-text description; may be empty
    pub description: String,

    /// Creation timestamp, stamped once from local time
    #[serde(rename = "date")]
    pub created_at: String,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    ///
    /// The id is supplied by the caller (the store owns id assignment).
    pub fn new(
        id: u64,
        amount: f64,
        categories: Vec<String>,
        payment_methods: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            categories,
            payment_methods,
            description: description.into(),
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Amount: ${:.2}, Categories: {}, Payment: {}, Description: {}, Date: {}",
            self.id,
            self.amount,
            self.categories.join(", "),
            self.payment_methods.join(", "),
            self.description,
            self.created_at
        )
    }
}
