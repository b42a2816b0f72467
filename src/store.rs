//! In-memory expense store
//!
//! Owns the ordered collection of expenses for one session. All mutation
//! goes through the store's own operations; ids come from a monotonically
//! increasing counter carried as store state, so a deleted id is never
//! handed out again.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Expense;

/// Sparse update applied by [`ExpenseStore::edit`]
///
/// Every field is independently optional; only present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub categories: Option<Vec<String>>,
    pub payment_methods: Option<Vec<String>>,
    pub description: Option<String>,
}

impl ExpenseUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set new categories
    pub fn categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Set new payment methods
    pub fn payment_methods(mut self, payment_methods: Vec<String>) -> Self {
        self.payment_methods = Some(payment_methods);
        self
    }

    /// Set a new description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check whether no field is present
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.categories.is_none()
            && self.payment_methods.is_none()
            && self.description.is_none()
    }
}

/// The single owner of the in-memory expense collection for one session
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    /// Next id to assign; never decreases, never reset by delete
    next_id: u64,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a new expense and return its assigned id
    pub fn add(
        &mut self,
        amount: f64,
        categories: Vec<String>,
        payment_methods: Vec<String>,
        description: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.expenses.push(Expense::new(
            id,
            amount,
            categories,
            payment_methods,
            description,
        ));
        id
    }

    /// Apply a sparse update to the expense with the given id
    ///
    /// Fails with `NotFound` if no expense has the id; the store is
    /// unchanged on failure.
    pub fn edit(&mut self, id: u64, update: ExpenseUpdate) -> SpendlogResult<()> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| SpendlogError::expense_not_found(id))?;

        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(categories) = update.categories {
            expense.categories = categories;
        }
        if let Some(payment_methods) = update.payment_methods {
            expense.payment_methods = payment_methods;
        }
        if let Some(description) = update.description {
            expense.description = description;
        }

        Ok(())
    }

    /// Remove the expense with the given id, preserving the order of the rest
    ///
    /// Surviving ids are never renumbered.
    pub fn delete(&mut self, id: u64) -> SpendlogResult<()> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| SpendlogError::expense_not_found(id))?;
        self.expenses.remove(position);
        Ok(())
    }

    /// Get an expense by id
    pub fn get(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Iterate over all expenses in store order
    pub fn list(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    /// Number of expenses in the store
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Expenses whose description or any category contains the term
    pub fn search(&self, term: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| {
                e.description.contains(term) || e.categories.iter().any(|c| c.contains(term))
            })
            .collect()
    }

    /// Expenses carrying the exact category
    pub fn filter_by_category(&self, category: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.categories.iter().any(|c| c == category))
            .collect()
    }

    /// Expenses paid with the exact payment method
    pub fn filter_by_payment(&self, payment: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.payment_methods.iter().any(|p| p == payment))
            .collect()
    }

    /// Summed amount per category, in first-seen category order
    ///
    /// An expense carrying several categories counts its full amount toward
    /// each of them.
    pub fn totals_by_category(&self) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for expense in &self.expenses {
            for category in &expense.categories {
                match totals.iter_mut().find(|(name, _)| name == category) {
                    Some((_, total)) => *total += expense.amount,
                    None => totals.push((category.clone(), expense.amount)),
                }
            }
        }
        totals
    }

    /// Replace the entire collection, re-seating the id counter above the
    /// largest loaded id
    pub fn replace_all(&mut self, expenses: Vec<Expense>) {
        self.next_id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.expenses = expenses;
    }
}
