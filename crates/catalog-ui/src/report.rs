//! Non-interactive output: every chart printed as plain text or JSON.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use catalog_core::error::Result;
use catalog_core::formatting::format_value;
use catalog_data::charts::ChartSeries;

use crate::components::bar::pad_label;

const MAX_LABEL_WIDTH: usize = 48;

/// Render one chart as a titled text block with right-aligned values.
pub fn format_chart(series: &ChartSeries) -> String {
    let mut out = String::new();
    out.push_str(&series.title);
    out.push('\n');
    out.push_str(&"-".repeat(series.title.width()));
    out.push('\n');

    if series.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let label_width = series
        .points
        .iter()
        .map(|(l, _)| l.width())
        .chain(std::iter::once(series.category_label.width()))
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);
    let values: Vec<String> = series.points.iter().map(|(_, v)| format_value(*v)).collect();
    let value_width = values
        .iter()
        .map(|v| v.width())
        .chain(std::iter::once(series.value_label.width()))
        .max()
        .unwrap_or(0);

    out.push_str(&format!(
        "{}  {:>width$}\n",
        pad_label(&series.category_label, label_width),
        series.value_label,
        width = value_width
    ));
    for ((label, _), value) in series.points.iter().zip(&values) {
        out.push_str(&format!(
            "{}  {:>width$}\n",
            pad_label(label, label_width),
            value,
            width = value_width
        ));
    }
    out
}

/// Render every chart, separated by blank lines, under a one-line summary.
pub fn format_report(charts: &[ChartSeries], dataset: &str, selection: &str) -> String {
    let mut out = format!("{} | {}\n\n", dataset, selection);
    let blocks: Vec<String> = charts.iter().map(format_chart).collect();
    out.push_str(&blocks.join("\n"));
    out
}

/// Serialise every chart as a pretty-printed JSON array.
pub fn format_json(charts: &[ChartSeries]) -> Result<String> {
    Ok(serde_json::to_string_pretty(charts)?)
}

/// Write the report to `out`, as JSON when `json` is set.
pub fn write_report<W: Write>(
    out: &mut W,
    charts: &[ChartSeries],
    dataset: &str,
    selection: &str,
    json: bool,
) -> Result<()> {
    let body = if json {
        format_json(charts)?
    } else {
        format_report(charts, dataset, selection)
    };
    writeln!(out, "{}", body.trim_end())?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
