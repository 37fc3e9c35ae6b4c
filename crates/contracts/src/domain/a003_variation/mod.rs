pub mod aggregate;

pub use aggregate::{Variation, VariationDto};
