pub mod aggregates;
pub mod cost_resolver;
pub mod error;
pub mod executor;
pub mod ledger_writer;
pub mod normalizer;
pub mod raw_table;
pub mod reconcile;

pub use error::ImportError;
pub use executor::ImportExecutor;
