//! The fixed chart catalog shown on the dashboard.
//!
//! Each [`ChartDef`] is one parameterisation of [`CatalogAggregator`].
//! [`build_dashboard`] evaluates all of them for a type selection and
//! returns labelled series ready for rendering.

use catalog_core::error::Result;
use catalog_core::models::{Column, ContentType, TypeSelection, MONTH_NAMES};
use serde::Serialize;
use tracing::debug;

use crate::aggregator::{CatalogAggregator, SortOrder};
use crate::filter::RowFilter;
use crate::table::Table;

// ── Public types ──────────────────────────────────────────────────────────────

/// How the rendering side should present a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Ranked categories as horizontal bars.
    Bar,
    /// Equal-width buckets (or ordered categories) of one numeric axis.
    Histogram,
}

/// One evaluated chart: ordered `(label, value)` points plus presentation
/// metadata. Points are drawn top to bottom in the order given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    /// Name of the categorical axis.
    pub category_label: String,
    /// Name of the numeric axis.
    pub value_label: String,
    pub points: Vec<(String, f64)>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series, `0.0` when empty.
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|(_, v)| *v).sum()
    }
}

/// What a chart measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// Ranked value counts of a column.
    Count {
        column: Column,
        n: Option<usize>,
        explode: bool,
    },
    /// Titles ranked by a numeric column.
    Ranked {
        column: Column,
        n: usize,
        order: SortOrder,
    },
    /// Equal-width histogram of a numeric column.
    Histogram { column: Column, bins: usize },
    /// `month_added` counts in calendar order.
    Months,
}

/// Static description of one dashboard chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDef {
    pub title: &'static str,
    pub kind: ChartKind,
    pub category_label: &'static str,
    pub value_label: &'static str,
    pub measure: Measure,
    /// Chart-specific type constraint, ANDed with the dashboard selection.
    pub content_type: Option<ContentType>,
    /// Column that must hold a real value for a row to be counted.
    pub known: Option<Column>,
}

impl ChartDef {
    /// Row filter for this chart under `selection`.
    pub fn filter(&self, selection: TypeSelection) -> RowFilter {
        let mut filter = RowFilter::all().with_selection(selection);
        if let Some(t) = &self.content_type {
            filter = filter.with_type(t.clone());
        }
        if let Some(c) = self.known {
            filter = filter.require_known(c);
        }
        filter
    }

    /// Run the aggregation behind this chart.
    pub fn evaluate(&self, table: &Table, selection: TypeSelection) -> Result<ChartSeries> {
        let filter = self.filter(selection);

        let points: Vec<(String, f64)> = match self.measure {
            Measure::Count { column, n, explode } => {
                CatalogAggregator::top_n(table, column.name(), n, explode, &filter)?
                    .into_iter()
                    .map(|(label, count)| (label, count as f64))
                    .collect()
            }
            Measure::Ranked { column, n, order } => {
                CatalogAggregator::top_n_by_value(table, &filter, column.name(), n, order)?
            }
            Measure::Histogram { column, bins } => {
                CatalogAggregator::histogram(table, column.name(), bins, &filter)?
                    .into_iter()
                    .map(|bin| (bin.label(), bin.count as f64))
                    .collect()
            }
            Measure::Months => CatalogAggregator::ordered_counts(
                table,
                Column::MonthAdded.name(),
                &MONTH_NAMES,
                &filter,
            )?
            .into_iter()
            .map(|(label, count)| (label, count as f64))
            .collect(),
        };

        Ok(ChartSeries {
            title: self.title.to_string(),
            kind: self.kind,
            category_label: self.category_label.to_string(),
            value_label: self.value_label.to_string(),
            points,
        })
    }
}

// ── Chart catalog ─────────────────────────────────────────────────────────────

const fn count(column: Column, n: Option<usize>, explode: bool) -> Measure {
    Measure::Count { column, n, explode }
}

/// Every chart on the dashboard, in display order.
pub static CHARTS: [ChartDef; 13] = [
    ChartDef {
        title: "Top 10 Genres",
        kind: ChartKind::Bar,
        category_label: "Genre",
        value_label: "Count",
        measure: count(Column::ListedIn, Some(10), true),
        content_type: None,
        known: None,
    },
    ChartDef {
        title: "Release Trend Over Years",
        kind: ChartKind::Histogram,
        category_label: "Release year",
        value_label: "Count",
        measure: Measure::Histogram {
            column: Column::ReleaseYear,
            bins: 15,
        },
        content_type: None,
        known: None,
    },
    ChartDef {
        title: "Top 10 Countries Producing Content",
        kind: ChartKind::Bar,
        category_label: "Country",
        value_label: "Count",
        measure: count(Column::Country, Some(10), false),
        content_type: None,
        known: None,
    },
    ChartDef {
        title: "Content Ratings Distribution",
        kind: ChartKind::Bar,
        category_label: "Rating",
        value_label: "Count",
        measure: count(Column::Rating, None, false),
        content_type: None,
        known: None,
    },
    ChartDef {
        title: "Monthly Additions Trend",
        kind: ChartKind::Histogram,
        category_label: "Month added",
        value_label: "Count",
        measure: Measure::Months,
        content_type: None,
        known: None,
    },
    ChartDef {
        title: "Top 10 Directors",
        kind: ChartKind::Bar,
        category_label: "Director",
        value_label: "Count",
        measure: count(Column::Director, Some(10), false),
        content_type: None,
        known: Some(Column::Director),
    },
    ChartDef {
        title: "Distribution of Movie Durations",
        kind: ChartKind::Histogram,
        category_label: "Minutes",
        value_label: "Count",
        measure: Measure::Histogram {
            column: Column::DurationMinutes,
            bins: 30,
        },
        content_type: Some(ContentType::Movie),
        known: None,
    },
    ChartDef {
        title: "Top 5 Longest Movies",
        kind: ChartKind::Bar,
        category_label: "Title",
        value_label: "Minutes",
        measure: Measure::Ranked {
            column: Column::DurationMinutes,
            n: 5,
            order: SortOrder::Descending,
        },
        content_type: Some(ContentType::Movie),
        known: None,
    },
    ChartDef {
        title: "Top 5 Shortest Movies",
        kind: ChartKind::Bar,
        category_label: "Title",
        value_label: "Minutes",
        measure: Measure::Ranked {
            column: Column::DurationMinutes,
            n: 5,
            order: SortOrder::Ascending,
        },
        content_type: Some(ContentType::Movie),
        known: None,
    },
    ChartDef {
        title: "Top 10 Actors",
        kind: ChartKind::Bar,
        category_label: "Actor",
        value_label: "Count",
        measure: count(Column::Cast, Some(10), true),
        content_type: None,
        known: Some(Column::Cast),
    },
    ChartDef {
        title: "Top 10 Countries with Most TV Shows",
        kind: ChartKind::Bar,
        category_label: "Country",
        value_label: "TV shows",
        measure: count(Column::Country, Some(10), false),
        content_type: Some(ContentType::TvShow),
        known: Some(Column::Country),
    },
    ChartDef {
        title: "Top 10 Countries with Most Movies",
        kind: ChartKind::Bar,
        category_label: "Country",
        value_label: "Movies",
        measure: count(Column::Country, Some(10), false),
        content_type: Some(ContentType::Movie),
        known: Some(Column::Country),
    },
    // duration_minutes holds the season count for TV shows.
    ChartDef {
        title: "Top 10 Longest TV Shows by Seasons",
        kind: ChartKind::Bar,
        category_label: "Title",
        value_label: "Seasons",
        measure: Measure::Ranked {
            column: Column::DurationMinutes,
            n: 10,
            order: SortOrder::Descending,
        },
        content_type: Some(ContentType::TvShow),
        known: None,
    },
];

// ── Public function ───────────────────────────────────────────────────────────

/// Evaluate every chart in [`CHARTS`] for `selection`.
///
/// The table is only borrowed; calling this again after a selection change
/// recomputes everything from the same rows.
pub fn build_dashboard(table: &Table, selection: TypeSelection) -> Result<Vec<ChartSeries>> {
    let started = std::time::Instant::now();
    let charts = CHARTS
        .iter()
        .map(|def| def.evaluate(table, selection))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Built {} charts for selection {} in {:.3}s",
        charts.len(),
        selection,
        started.elapsed().as_secs_f64()
    );
    Ok(charts)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
