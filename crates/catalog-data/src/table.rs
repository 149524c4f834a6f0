//! The normalised, immutable catalog table.

use std::str::FromStr;

use catalog_core::error::{CatalogError, Result};
use catalog_core::models::{Column, Record};

/// All records of one dataset plus the header they were read with.
///
/// Built once by [`crate::reader::load`] (or [`Table::from_records`]) and
/// only ever borrowed afterwards.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Schema column names in file order. Extra file columns are not kept.
    header: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Build a table from records already in memory. The header is the
    /// required source columns in canonical order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let header = Column::REQUIRED
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        Self { header, records }
    }

    pub(crate) fn with_header(header: Vec<String>, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Schema column names in file order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Resolve a column name against the schema (source and derived
    /// columns).
    pub fn column(&self, name: &str) -> Result<Column> {
        let column = Column::from_str(name)?;
        let present = Column::DERIVED.contains(&column)
            || self.header.iter().any(|h| h == column.name());
        if present {
            Ok(column)
        } else {
            Err(CatalogError::ColumnNotFound(name.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_records_has_required_header() {
        let table = Table::from_records(vec![Record::default()]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert_eq!(table.header().len(), Column::REQUIRED.len());
        assert_eq!(table.header()[0], "title");
    }

    #[test]
    fn test_column_resolves_source_and_derived() {
        let table = Table::default();
        // An empty header still exposes derived columns.
        assert_eq!(table.column("month_added").unwrap(), Column::MonthAdded);

        let table = Table::from_records(Vec::new());
        assert_eq!(table.column("country").unwrap(), Column::Country);
        assert_eq!(
            table.column("duration_minutes").unwrap(),
            Column::DurationMinutes
        );
    }

    #[test]
    fn test_column_unknown_name() {
        let table = Table::from_records(Vec::new());
        let err = table.column("show_id").unwrap_err();
        assert!(matches!(err, CatalogError::ColumnNotFound(n) if n == "show_id"));
    }

    #[test]
    fn test_column_absent_from_header() {
        let table = Table::with_header(vec!["title".to_string()], Vec::new());
        assert!(table.column("title").is_ok());
        assert!(matches!(
            table.column("rating"),
            Err(CatalogError::ColumnNotFound(_))
        ));
    }
}
