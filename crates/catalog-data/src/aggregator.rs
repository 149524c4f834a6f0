//! Frequency counts, rankings and histograms over the catalog table.
//!
//! Every chart on the dashboard is one call into [`CatalogAggregator`] with
//! different parameters. Calls are pure functions of the borrowed table.

use std::collections::HashMap;

use catalog_core::error::{CatalogError, Result};
use catalog_core::formatting::format_bin_range;
use catalog_core::models::{Column, Record, MULTI_VALUE_DELIMITER};
use tracing::debug;

use crate::filter::RowFilter;
use crate::table::Table;

// ── SortOrder ─────────────────────────────────────────────────────────────────

/// Direction of a by-value ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Largest values first.
    Descending,
    /// Smallest values first.
    Ascending,
}

// ── HistogramBin ──────────────────────────────────────────────────────────────

/// One equal-width bucket of a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

impl HistogramBin {
    /// Display label such as `"60–90"`.
    pub fn label(&self) -> String {
        format_bin_range(self.lower, self.upper)
    }
}

// ── ValueCounter ──────────────────────────────────────────────────────────────

/// Counts labels while remembering the order in which each was first seen.
#[derive(Debug, Default)]
struct ValueCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl ValueCounter {
    fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.counts.len());
                self.counts.push((label.to_string(), 1));
            }
        }
    }

    /// Counts ordered by count, descending. The sort is stable, so equal
    /// counts keep first-occurrence order.
    fn into_ranked(mut self) -> Vec<(String, u64)> {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts
    }
}

// ── CatalogAggregator ─────────────────────────────────────────────────────────

/// Stateless helper that counts and ranks catalog rows.
pub struct CatalogAggregator;

impl CatalogAggregator {
    /// Count the distinct values of `column` over the rows that pass
    /// `filter`, most frequent first, truncated to `n` entries (`None`
    /// keeps the full distribution).
    ///
    /// With `explode`, each cell is split on `", "` and every piece counts
    /// as its own observation. Missing text cells count as `"Unknown"`;
    /// missing typed cells (dates, derived numbers) are skipped.
    pub fn top_n(
        table: &Table,
        column: &str,
        n: Option<usize>,
        explode: bool,
        filter: &RowFilter,
    ) -> Result<Vec<(String, u64)>> {
        let column = table.column(column)?;
        let mut counter = ValueCounter::default();

        for label in Self::labels(table, column, filter) {
            if explode {
                for part in label.split(MULTI_VALUE_DELIMITER) {
                    counter.add(part);
                }
            } else {
                counter.add(&label);
            }
        }

        let mut ranked = counter.into_ranked();
        if let Some(n) = n {
            ranked.truncate(n);
        }

        debug!(
            "top_n({}, n={:?}, explode={}): {} categories",
            column,
            n,
            explode,
            ranked.len()
        );
        Ok(ranked)
    }

    /// The `n` rows with the largest (`Descending`) or smallest
    /// (`Ascending`) value of the numeric `sort_column`, labelled by title.
    ///
    /// Rows whose value is missing are skipped; equal values keep source
    /// row order.
    pub fn top_n_by_value(
        table: &Table,
        filter: &RowFilter,
        sort_column: &str,
        n: usize,
        order: SortOrder,
    ) -> Result<Vec<(String, f64)>> {
        let column = Self::numeric_column(table, sort_column)?;

        let mut rows: Vec<(&Record, f64)> = table
            .records()
            .iter()
            .filter(|r| filter.matches(r))
            .filter_map(|r| r.numeric(column).map(|v| (r, v)))
            .collect();

        match order {
            SortOrder::Descending => rows.sort_by(|a, b| b.1.total_cmp(&a.1)),
            SortOrder::Ascending => rows.sort_by(|a, b| a.1.total_cmp(&b.1)),
        }

        let ranked: Vec<(String, f64)> = rows
            .into_iter()
            .take(n)
            .map(|(r, v)| (r.title_label().to_string(), v))
            .collect();

        debug!(
            "top_n_by_value({}, n={}, {:?}): {} rows",
            column,
            n,
            order,
            ranked.len()
        );
        Ok(ranked)
    }

    /// Split the values of a numeric column into `bins` equal-width buckets
    /// spanning its minimum and maximum. The last bucket includes the
    /// maximum. All-equal values produce one bucket; no values produce none.
    pub fn histogram(
        table: &Table,
        column: &str,
        bins: usize,
        filter: &RowFilter,
    ) -> Result<Vec<HistogramBin>> {
        let column = Self::numeric_column(table, column)?;
        let bins = bins.max(1);

        let values: Vec<f64> = table
            .records()
            .iter()
            .filter(|r| filter.matches(r))
            .filter_map(|r| r.numeric(column))
            .collect();

        let Some(min) = values.iter().copied().reduce(f64::min) else {
            return Ok(Vec::new());
        };
        let max = values.iter().copied().fold(min, f64::max);

        if max == min {
            return Ok(vec![HistogramBin {
                lower: min,
                upper: max,
                count: values.len() as u64,
            }]);
        }

        let width = (max - min) / bins as f64;
        let mut out: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: min + i as f64 * width,
                upper: if i + 1 == bins {
                    max
                } else {
                    min + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        for v in values {
            let i = (((v - min) / width).floor() as usize).min(bins - 1);
            out[i].count += 1;
        }

        debug!("histogram({}, bins={})", column, bins);
        Ok(out)
    }

    /// Counts of `column` for each of `categories`, in that order. Categories
    /// that never occur are reported with a zero count; values outside the
    /// list are ignored.
    pub fn ordered_counts(
        table: &Table,
        column: &str,
        categories: &[&str],
        filter: &RowFilter,
    ) -> Result<Vec<(String, u64)>> {
        let column = table.column(column)?;
        let mut counts: HashMap<&str, u64> = categories.iter().map(|c| (*c, 0)).collect();

        for label in Self::labels(table, column, filter) {
            if let Some(count) = counts.get_mut(&*label) {
                *count += 1;
            }
        }

        Ok(categories
            .iter()
            .map(|c| (c.to_string(), counts.get(c).copied().unwrap_or(0)))
            .collect())
    }

    /// Number of observations [`Self::top_n`] would count over the same
    /// arguments with no truncation.
    pub fn observation_count(
        table: &Table,
        column: &str,
        explode: bool,
        filter: &RowFilter,
    ) -> Result<u64> {
        let column = table.column(column)?;
        Ok(Self::labels(table, column, filter)
            .map(|label| {
                if explode {
                    label.split(MULTI_VALUE_DELIMITER).count() as u64
                } else {
                    1
                }
            })
            .sum())
    }

    // ── Private ───────────────────────────────────────────────────────────────

    fn labels<'t>(
        table: &'t Table,
        column: Column,
        filter: &'t RowFilter,
    ) -> impl Iterator<Item = std::borrow::Cow<'t, str>> + 't {
        table
            .records()
            .iter()
            .filter(move |r| filter.matches(r))
            .filter_map(move |r| r.label(column))
    }

    fn numeric_column(table: &Table, name: &str) -> Result<Column> {
        let column = table.column(name)?;
        if column.is_numeric() {
            Ok(column)
        } else {
            Err(CatalogError::NonNumericColumn(name.to_string()))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
