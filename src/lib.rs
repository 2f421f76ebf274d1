// dssload - one-shot loader for pipe-delimited flat files into SQLite.
// Exposes all modules for use in the CLI binary and tests.

pub mod balance;
pub mod db;
pub mod error;
pub mod import;
pub mod loader;
pub mod lookup;
pub mod reader;
pub mod transform;

// Re-export commonly used items
pub use balance::BalanceStatus;
pub use error::{LoadError, Result};
pub use import::import_table;
pub use loader::{run, LoadSummary, DELIMITER};
pub use lookup::build_lookup;
pub use reader::open_table;
pub use transform::{NationLookup, OrderCustomerLookup, PartSuppLookup};
