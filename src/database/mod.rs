//! mcbe-preview database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! SQLite-backed [`KeyValueStore`](crate::storage::KeyValueStore).
//!
//! # Usage
//!
//! ```no_run
//! use mcbe_preview::database::Database;
//! use mcbe_preview::storage::KeyValueStore;
//!
//! // Open a persistent database
//! let db = Database::open("mcbe-preview.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! db.set_item("mode-v1", "text").expect("write failed");
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
