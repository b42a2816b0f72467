//! Terminal display formatting
//!
//! Formats expenses and category statistics for the interactive shell.

use crate::models::Expense;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:>4} {:>10} {:24} {:20} {:24} {}",
        expense.id,
        format!("${:.2}", expense.amount),
        truncate(&expense.categories.join(", "), 24),
        truncate(&expense.payment_methods.join(", "), 20),
        truncate(&expense.description, 24),
        expense.created_at
    )
}

/// Format a list of expenses as a register
pub fn format_expense_list<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> String {
    let rows: Vec<String> = expenses.into_iter().map(format_expense_row).collect();
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4} {:>10} {:24} {:20} {:24} {}\n",
        "ID", "Amount", "Categories", "Payment", "Description", "Date"
    ));
    output.push_str(&"-".repeat(106));
    output.push('\n');
    for row in rows {
        output.push_str(&row);
        output.push('\n');
    }
    output
}

/// Format summed amounts per category
pub fn format_category_totals(totals: &[(String, f64)]) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::from("Expense totals by category:\n");
    for (category, total) in totals {
        output.push_str(&format!("  {:24} ${:.2}\n", category, total));
    }
    output
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
