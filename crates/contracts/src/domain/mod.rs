pub mod a001_category;
pub mod a002_parent_product;
pub mod a003_variation;
pub mod a004_sales_ledger;
pub mod common;
