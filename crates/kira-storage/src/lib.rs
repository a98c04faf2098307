//! Kira Storage Layer
//!
//! Persistence of the values a user last typed into each calculator. The
//! calculators themselves are pure; this crate is injected by the presentation
//! layer to pre-fill forms.
//!
//! # Features
//!
//! - **Key-value stores**: [`KeyValueStore`] with redb and in-memory backends
//! - **Form snapshots**: [`FormStore`] namespaces each [`CalculatorForm`]'s fields
//!   and records when they were last saved
//!
//! # Example
//!
//! ```rust,ignore
//! use kira_storage::{CalculatorForm, FormStore, RedbStore};
//!
//! let forms = FormStore::new(RedbStore::open("./inputs.redb")?);
//! forms.save(CalculatorForm::Roi, &[("propertyPrice", "500,000")])?;
//!
//! let saved = forms.load(CalculatorForm::Roi)?;
//! assert_eq!(saved.get("propertyPrice"), Some("500,000"));
//! ```
//!
//! # Storage Backends
//!
//! ## RedbStore (Default)
//!
//! Uses [redb](https://crates.io/crates/redb), a pure-Rust embedded database
//! with ACID transactions. Suitable for single-process applications.
//!
//! ## InMemoryStore
//!
//! A simple in-memory implementation for testing.
//! Data is not persisted across restarts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod adapter;
mod error;
mod forms;
mod memory;
mod redb;

// Re-export core types
pub use self::redb::RedbStore;
pub use adapter::KeyValueStore;
pub use error::{StorageError, StorageResult};
pub use forms::{CalculatorForm, FormSnapshot, FormStore};
pub use memory::InMemoryStore;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adapter::KeyValueStore;
    pub use crate::error::{StorageError, StorageResult};
    pub use crate::forms::{CalculatorForm, FormSnapshot, FormStore};
    pub use crate::memory::InMemoryStore;
    pub use crate::redb::RedbStore;
}
