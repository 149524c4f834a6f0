//! Data layer for the catalog dashboard.
//!
//! Loads and normalises the catalog CSV into an immutable [`table::Table`],
//! counts and ranks its columns, and evaluates the fixed chart catalog
//! consumed by the UI and report printers.

pub mod aggregator;
pub mod charts;
pub mod filter;
pub mod reader;
pub mod table;

pub use catalog_core as core;
