//! CSV loading and normalisation for the catalog dashboard.
//!
//! Reads the catalog file, maps empty cells to `None`, parses `date_added`,
//! and derives `month_added` and `duration_minutes` for every row.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use catalog_core::data_processors::{CellNormalizer, DateProcessor, DurationExtractor};
use catalog_core::error::{CatalogError, Result};
use catalog_core::models::{Column, ContentType, Record};
use tracing::{debug, info};

use crate::table::Table;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and normalise the catalog CSV at `path`.
///
/// Fails when the file cannot be opened, when a row is malformed, or when
/// the header lacks a required column. Cells that fail to parse as a date
/// or number do not fail the load; they become `None`.
pub fn load(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).map_err(|source| CatalogError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file, path)
}

/// Same as [`load`] over any byte source. `source` only labels errors and
/// log lines.
pub fn load_from_reader<R: Read>(input: R, source: &Path) -> Result<Table> {
    let csv_err = |e: csv::Error| CatalogError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let header: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let layout = ColumnLayout::resolve(&header, source)?;

    let mut records = Vec::new();
    let mut stats = LoadStats::default();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        let record = layout.normalise(&row, &mut stats);
        records.push(record);
    }

    info!(
        "Loaded {} records from {}",
        records.len(),
        source.display()
    );
    debug!(
        "{}: {} unparseable dates, {} durations without digits, {} bad release years",
        source.display(),
        stats.bad_dates,
        stats.durations_without_digits,
        stats.bad_years,
    );

    Ok(Table::with_header(layout.schema_header(&header), records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Per-cell failures absorbed during a load.
#[derive(Debug, Default)]
struct LoadStats {
    bad_dates: usize,
    durations_without_digits: usize,
    bad_years: usize,
}

/// Position of each required column in the file's header.
struct ColumnLayout {
    index: HashMap<Column, usize>,
}

impl ColumnLayout {
    fn resolve(header: &[String], source: &Path) -> Result<Self> {
        let mut index = HashMap::new();
        for column in Column::REQUIRED {
            let pos = header
                .iter()
                .position(|h| h == column.name())
                .ok_or_else(|| CatalogError::MissingColumn {
                    path: source.to_path_buf(),
                    column: column.name().to_string(),
                })?;
            index.insert(column, pos);
        }
        Ok(Self { index })
    }

    /// Header names the table exposes: the required columns in file order.
    /// Extra columns are dropped along with their cells.
    fn schema_header(&self, header: &[String]) -> Vec<String> {
        let mut positions: Vec<(usize, Column)> =
            self.index.iter().map(|(c, &i)| (i, *c)).collect();
        positions.sort_by_key(|(i, _)| *i);
        positions
            .into_iter()
            .map(|(i, _)| header[i].clone())
            .collect()
    }

    fn cell<'r>(&self, row: &'r csv::StringRecord, column: Column) -> &'r str {
        self.index
            .get(&column)
            .and_then(|&i| row.get(i))
            .unwrap_or("")
    }

    fn text(&self, row: &csv::StringRecord, column: Column) -> Option<String> {
        CellNormalizer::text(self.cell(row, column))
    }

    /// Build a [`Record`] from one CSV row, deriving the computed fields.
    fn normalise(&self, row: &csv::StringRecord, stats: &mut LoadStats) -> Record {
        let date_added = self.text(row, Column::DateAdded).and_then(|raw| {
            let parsed = DateProcessor::parse(&raw);
            if parsed.is_none() {
                stats.bad_dates += 1;
            }
            parsed
        });

        let release_year = self.text(row, Column::ReleaseYear).and_then(|raw| {
            let parsed = CellNormalizer::integer(&raw);
            if parsed.is_none() {
                stats.bad_years += 1;
            }
            parsed
        });

        let duration = self.text(row, Column::Duration);
        let duration_minutes = duration.as_deref().and_then(|raw| {
            let minutes = DurationExtractor::extract(raw);
            if minutes.is_none() {
                stats.durations_without_digits += 1;
            }
            minutes
        });

        Record {
            title: self.text(row, Column::Title),
            content_type: self
                .text(row, Column::Type)
                .map(|raw| ContentType::parse(&raw)),
            director: self.text(row, Column::Director),
            cast: self.text(row, Column::Cast),
            country: self.text(row, Column::Country),
            date_added,
            release_year,
            rating: self.text(row, Column::Rating),
            duration,
            listed_in: self.text(row, Column::ListedIn),
            month_added: date_added.and_then(DateProcessor::month_name),
            duration_minutes,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
