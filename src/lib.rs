//! spendlog - terminal-based personal expense tracker
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: an in-memory expense store with add/edit/delete/list, selection
//! of categories and payment methods from fixed option lists with free-text
//! fallback, and persistence of the whole collection to JSON or YAML files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: The expense record
//! - `selector`: Category/payment-method input resolution
//! - `store`: The in-memory expense collection
//! - `storage`: Format codec and file persistence
//! - `display`: Terminal formatting
//! - `shell`: The interactive menu loop

pub mod display;
pub mod error;
pub mod models;
pub mod selector;
pub mod shell;
pub mod storage;
pub mod store;

pub use error::{SpendlogError, SpendlogResult};
