//! Interactive menu shell
//!
//! Drives the expense store through a numbered text menu. Generic over the
//! input/output streams so the whole loop is testable with in-memory
//! buffers.

use std::io::{BufRead, Write};

use crate::display::{format_category_totals, format_expense_list};
use crate::error::SpendlogResult;
use crate::selector::Selector;
use crate::storage::{self, Format};
use crate::store::{ExpenseStore, ExpenseUpdate};

const MENU: &str = "\nExpense Manager Menu:\n\
1. Add Expense\n\
2. Edit Expense\n\
3. Delete Expense\n\
4. List Expenses\n\
5. Search Expenses\n\
6. Filter by Category\n\
7. Filter by Payment Method\n\
8. Statistics\n\
9. Save to File\n\
10. Load from File\n\
11. Exit\n";

/// The interactive menu loop around one expense store
pub struct Shell<R, W> {
    input: R,
    output: W,
    store: ExpenseStore,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell around an empty store
    pub fn new(input: R, output: W) -> Self {
        Self::with_store(input, output, ExpenseStore::new())
    }

    /// Create a shell around a preloaded store
    pub fn with_store(input: R, output: W, store: ExpenseStore) -> Self {
        Self {
            input,
            output,
            store,
        }
    }

    /// The store driven by this shell
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Unknown-id and missing-file failures are reported and the loop
    /// continues; decode failures are fatal and propagate to the caller.
    pub fn run(&mut self) -> SpendlogResult<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let choice = match self.prompt_opt("Choose an option: ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.trim() {
                "1" => self.add()?,
                "2" => self.edit()?,
                "3" => self.delete()?,
                "4" => self.list()?,
                "5" => self.search()?,
                "6" => self.filter_by_category()?,
                "7" => self.filter_by_payment()?,
                "8" => self.statistics()?,
                "9" => self.save()?,
                "10" => self.load()?,
                "11" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option. Try again.")?,
            }
        }
        Ok(())
    }

    fn add(&mut self) -> SpendlogResult<()> {
        let amount = self.prompt("Amount: ")?.parse().unwrap_or(0.0);
        let categories = self.select(
            "Choose categories (comma-separated numbers) or enter your own:",
            Selector::categories(),
            &[],
        )?;
        let default_payment = vec!["Cash".to_string(), "Card".to_string()];
        let payment_methods = self.select(
            "Choose payment method(s) (comma-separated numbers):",
            Selector::payment_methods(),
            &default_payment,
        )?;
        let description = self.prompt("Description: ")?;

        self.store.add(amount, categories, payment_methods, description);
        writeln!(self.output, "Expense added.")?;
        Ok(())
    }

    fn edit(&mut self) -> SpendlogResult<()> {
        let id = self.prompt_id("Expense ID to edit: ")?;
        let mut update = ExpenseUpdate::new();

        let amount = self.prompt("New amount (or enter to skip): ")?;
        if !amount.trim().is_empty() {
            update = update.amount(amount.trim().parse().unwrap_or(0.0));
        }

        let categories = self.prompt("New categories (numbers or text, or enter to skip): ")?;
        if !categories.trim().is_empty() {
            update = update.categories(Selector::categories().resolve(&categories, &[]));
        }

        let answer = self.prompt("Edit payment methods? (y/n): ")?;
        if answer.trim().eq_ignore_ascii_case("y") {
            let payment_methods = self.select(
                "Choose payment method(s) (comma-separated numbers):",
                Selector::payment_methods(),
                &[],
            )?;
            // An empty selection means keep the current methods
            if !payment_methods.is_empty() {
                update = update.payment_methods(payment_methods);
            }
        }

        let description = self.prompt("New description (or enter to skip): ")?;
        if !description.trim().is_empty() {
            update = update.description(description);
        }

        match self.store.edit(id, update) {
            Ok(()) => writeln!(self.output, "Expense updated.")?,
            Err(err) if err.is_not_found() => writeln!(self.output, "Expense not found.")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn delete(&mut self) -> SpendlogResult<()> {
        let id = self.prompt_id("Expense ID to delete: ")?;
        match self.store.delete(id) {
            Ok(()) => writeln!(self.output, "Expense deleted.")?,
            Err(err) if err.is_not_found() => writeln!(self.output, "Expense not found.")?,
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn list(&mut self) -> SpendlogResult<()> {
        let listing = format_expense_list(self.store.list());
        self.output.write_all(listing.as_bytes())?;
        Ok(())
    }

    fn search(&mut self) -> SpendlogResult<()> {
        let term = self.prompt("Search term: ")?;
        let hits = self.store.search(term.trim());
        if hits.is_empty() {
            writeln!(self.output, "No expenses found.")?;
        } else {
            let listing = format_expense_list(hits);
            self.output.write_all(listing.as_bytes())?;
        }
        Ok(())
    }

    fn filter_by_category(&mut self) -> SpendlogResult<()> {
        let category = self.prompt("Category: ")?;
        let hits = self.store.filter_by_category(category.trim());
        if hits.is_empty() {
            writeln!(self.output, "No expenses in this category.")?;
        } else {
            let listing = format_expense_list(hits);
            self.output.write_all(listing.as_bytes())?;
        }
        Ok(())
    }

    fn filter_by_payment(&mut self) -> SpendlogResult<()> {
        let payment = self.prompt("Payment method: ")?;
        let hits = self.store.filter_by_payment(payment.trim());
        if hits.is_empty() {
            writeln!(self.output, "No expenses with this payment method.")?;
        } else {
            let listing = format_expense_list(hits);
            self.output.write_all(listing.as_bytes())?;
        }
        Ok(())
    }

    fn statistics(&mut self) -> SpendlogResult<()> {
        let totals = self.store.totals_by_category();
        self.output
            .write_all(format_category_totals(&totals).as_bytes())?;
        Ok(())
    }

    fn save(&mut self) -> SpendlogResult<()> {
        let filename = self.prompt("Filename: ")?;
        let Some(format) = self.prompt_format()? else {
            return Ok(());
        };
        match storage::save(&self.store, filename.trim(), format) {
            Ok(()) => writeln!(self.output, "Data saved to {}.", filename.trim())?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn load(&mut self) -> SpendlogResult<()> {
        let filename = self.prompt("Filename: ")?;
        let Some(format) = self.prompt_format()? else {
            return Ok(());
        };
        match storage::load(&mut self.store, filename.trim(), format) {
            Ok(()) => writeln!(self.output, "Data loaded from {}.", filename.trim())?,
            Err(err) if err.is_file_not_found() => writeln!(self.output, "File not found.")?,
            // Malformed content is fatal; no partial load, no recovery here
            Err(err) => return Err(err),
        }
        Ok(())
    }

    /// Show a selector's numbered options and resolve the user's answer
    fn select(
        &mut self,
        title: &str,
        selector: Selector,
        default: &[String],
    ) -> SpendlogResult<Vec<String>> {
        writeln!(self.output, "{title}")?;
        for (index, option) in selector.options().iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, option)?;
        }
        let message = if default.is_empty() {
            "Your choice: ".to_string()
        } else {
            format!("Your choice (default: {}): ", default.join(", "))
        };
        let raw = self.prompt(&message)?;
        Ok(selector.resolve(&raw, default))
    }

    fn prompt_format(&mut self) -> SpendlogResult<Option<Format>> {
        let raw = self.prompt("Format (json/yaml): ")?;
        match Format::parse(&raw) {
            Some(format) => Ok(Some(format)),
            None => {
                writeln!(self.output, "Unknown format: {}", raw.trim())?;
                Ok(None)
            }
        }
    }

    fn prompt_id(&mut self, message: &str) -> SpendlogResult<u64> {
        // Garbage parses to 0, which no expense ever carries
        Ok(self.prompt(message)?.trim().parse().unwrap_or(0))
    }

    fn prompt(&mut self, message: &str) -> SpendlogResult<String> {
        Ok(self.prompt_opt(message)?.unwrap_or_default())
    }

    fn prompt_opt(&mut self, message: &str) -> SpendlogResult<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (ExpenseStore, String) {
        run_script_with_store(script, ExpenseStore::new())
    }

    fn run_script_with_store(script: &str, store: ExpenseStore) -> (ExpenseStore, String) {
        let input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let mut shell = Shell::with_store(input, &mut output, store);
        shell.run().unwrap();
        let store = std::mem::take(&mut shell.store);
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_via_menu() {
        // Add: amount, categories "1,3", payments default, description; then exit
        let script = "1\n42.50\n1,3\n\nLunch money\n11\n";
        let (store, output) = run_script(script);

        assert_eq!(store.len(), 1);
        let expense = store.get(1).unwrap();
        assert_eq!(expense.amount, 42.5);
        assert_eq!(expense.categories, vec!["Food", "Utilities"]);
        assert_eq!(expense.payment_methods, vec!["Cash", "Card"]);
        assert_eq!(expense.description, "Lunch money");
        assert!(output.contains("Expense added."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_edit_not_found_reported() {
        let script = "2\n999\n\n\nn\n\n11\n";
        let (_store, output) = run_script(script);
        assert!(output.contains("Expense not found."));
    }

    #[test]
    fn test_edit_applies_partial_update() {
        let mut store = ExpenseStore::new();
        store.add(
            10.0,
            vec!["Food".to_string()],
            vec!["Cash".to_string()],
            "x",
        );

        // Edit id 1: new amount only, skip everything else
        let script = "2\n1\n20\n\nn\n\n11\n";
        let (store, output) = run_script_with_store(script, store);

        let expense = store.get(1).unwrap();
        assert_eq!(expense.amount, 20.0);
        assert_eq!(expense.description, "x");
        assert!(output.contains("Expense updated."));
    }

    #[test]
    fn test_delete_via_menu() {
        let mut store = ExpenseStore::new();
        store.add(
            10.0,
            vec!["Food".to_string()],
            vec!["Cash".to_string()],
            "x",
        );

        let script = "3\n1\n11\n";
        let (store, output) = run_script_with_store(script, store);

        assert!(store.is_empty());
        assert!(output.contains("Expense deleted."));
    }

    #[test]
    fn test_list_empty_store() {
        let (_store, output) = run_script("4\n11\n");
        assert!(output.contains("No expenses recorded."));
    }

    #[test]
    fn test_invalid_option() {
        let (_store, output) = run_script("99\n11\n");
        assert!(output.contains("Invalid option. Try again."));
    }

    #[test]
    fn test_load_missing_file_keeps_running() {
        let script = "10\n/nonexistent/expenses.json\njson\n11\n";
        let (_store, output) = run_script(script);
        assert!(output.contains("File not found."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let script = "9\nexpenses.xml\nxml\n11\n";
        let (_store, output) = run_script(script);
        assert!(output.contains("Unknown format: xml"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.yaml");

        let mut store = ExpenseStore::new();
        store.add(
            50.0,
            vec!["Food".to_string()],
            vec!["Cash".to_string()],
            "Lunch",
        );

        let script = format!("9\n{}\nyaml\n11\n", path.display());
        let (original, output) = run_script_with_store(&script, store);
        assert!(output.contains("Data saved to"));

        let script = format!("10\n{}\nyaml\n11\n", path.display());
        let (loaded, output) = run_script(&script);
        assert!(output.contains("Data loaded from"));

        let original: Vec<_> = original.list().cloned().collect();
        let loaded: Vec<_> = loaded.list().cloned().collect();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_statistics_output() {
        let mut store = ExpenseStore::new();
        store.add(
            50.0,
            vec!["Food".to_string()],
            vec!["Cash".to_string()],
            "Lunch",
        );
        store.add(
            30.0,
            vec!["Food".to_string()],
            vec!["Card".to_string()],
            "Snacks",
        );

        let (_store, output) = run_script_with_store("8\n11\n", store);
        assert!(output.contains("Expense totals by category:"));
        assert!(output.contains("$80.00"));
    }

    #[test]
    fn test_eof_ends_loop() {
        let (_store, output) = run_script("");
        assert!(output.contains("Expense Manager Menu:"));
    }
}
