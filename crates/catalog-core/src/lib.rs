//! Shared building blocks for the catalog dashboard: the record model,
//! per-cell parsers, error type, number formatting and CLI settings.

pub mod data_processors;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{CatalogError, Result};
