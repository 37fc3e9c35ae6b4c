pub mod error;
pub mod executor;

pub use error::RemediationError;
pub use executor::RemediationExecutor;
