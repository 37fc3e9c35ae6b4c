pub mod common;
pub mod u501_import_sales;
pub mod u502_register_missing_sku;
