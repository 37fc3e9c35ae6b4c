pub mod aggregate;

pub use aggregate::{ParentProduct, ParentProductDto};
