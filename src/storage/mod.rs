//! Persistence layer for the expense collection
//!
//! Splits the concern in two: a format codec (JSON/YAML text) and plain
//! whole-file I/O. `save` and `load` tie them to a store.

pub mod codec;
pub mod file_io;

pub use codec::{decode, encode, Format};

use std::path::Path;

use crate::error::SpendlogResult;
use crate::models::Expense;
use crate::store::ExpenseStore;

/// Encode the store's expenses and overwrite `path`
pub fn save<P: AsRef<Path>>(store: &ExpenseStore, path: P, format: Format) -> SpendlogResult<()> {
    let expenses: Vec<Expense> = store.list().cloned().collect();
    let text = codec::encode(&expenses, format)?;
    file_io::write_text(path, &text)
}

/// Replace the store's expenses from the file at `path`
///
/// Fails with `FileNotFound` when the path does not exist and with a decode
/// error when the content is malformed; the store is untouched on any
/// failure.
pub fn load<P: AsRef<Path>>(
    store: &mut ExpenseStore,
    path: P,
    format: Format,
) -> SpendlogResult<()> {
    let text = file_io::read_text(path)?;
    let expenses = codec::decode(&text, format)?;
    store.replace_all(expenses);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use std::fs;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.add(50.0, strings(&["Food"]), strings(&["Cash"]), "Lunch");
        store.add(100.0, strings(&["Transport"]), strings(&["Card"]), "Taxi");
        store.add(
            400.0,
            strings(&["Health", "Gym"]),
            strings(&["Bank Transfer"]),
            "Gym membership fee",
        );
        store
    }

    #[test]
    fn test_save_load_round_trip_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let store = sample_store();
        save(&store, &path, Format::Json).unwrap();

        let mut fresh = ExpenseStore::new();
        load(&mut fresh, &path, Format::Json).unwrap();

        let original: Vec<Expense> = store.list().cloned().collect();
        let loaded: Vec<Expense> = fresh.list().cloned().collect();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_save_load_round_trip_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.yaml");

        let store = sample_store();
        save(&store, &path, Format::Yaml).unwrap();

        let mut fresh = ExpenseStore::new();
        load(&mut fresh, &path, Format::Yaml).unwrap();

        let original: Vec<Expense> = store.list().cloned().collect();
        let loaded: Vec<Expense> = fresh.list().cloned().collect();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_missing_file_leaves_store_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let mut store = sample_store();
        let err = load(&mut store, &path, Format::Json).unwrap_err();
        assert!(err.is_file_not_found());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_load_malformed_content_leaves_store_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "this is not json").unwrap();

        let mut store = sample_store();
        let err = load(&mut store, &path, Format::Json).unwrap_err();
        assert!(err.is_decode());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        save(&sample_store(), &path, Format::Json).unwrap();

        let mut smaller = ExpenseStore::new();
        smaller.add(1.0, strings(&["Other"]), strings(&["Cash"]), "");
        save(&smaller, &path, Format::Json).unwrap();

        let mut fresh = ExpenseStore::new();
        load(&mut fresh, &path, Format::Json).unwrap();
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn test_loaded_store_continues_id_sequence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        save(&sample_store(), &path, Format::Json).unwrap();

        let mut fresh = ExpenseStore::new();
        load(&mut fresh, &path, Format::Json).unwrap();

        let id = fresh.add(5.0, strings(&["Other"]), strings(&["Cash"]), "");
        assert_eq!(id, 4);
    }
}
