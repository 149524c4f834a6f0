use std::sync::OnceLock;

use chrono::{Datelike, Month, NaiveDate};
use regex::Regex;
use tracing::debug;

// ── CellNormalizer ────────────────────────────────────────────────────────────

/// Turns raw CSV cells into optional values.
pub struct CellNormalizer;

impl CellNormalizer {
    /// Cell spellings read as a missing value, matched exactly.
    pub const NA_TOKENS: &'static [&'static str] = &[
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
        "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ];

    /// `true` when `raw` is one of [`Self::NA_TOKENS`].
    pub fn is_missing(raw: &str) -> bool {
        Self::NA_TOKENS.contains(&raw)
    }

    /// A missing cell (empty or an NA token) is `None`; anything else is
    /// kept verbatim.
    pub fn text(raw: &str) -> Option<String> {
        if Self::is_missing(raw) {
            None
        } else {
            Some(raw.to_string())
        }
    }

    /// Parse an integer cell (surrounding whitespace allowed). Values such as
    /// `"2019.0"` produced by spreadsheet exports are accepted when the
    /// fraction is zero.
    pub fn integer(raw: &str) -> Option<i32> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(v) = trimmed.parse::<i32>() {
            return Some(v);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.fract() == 0.0 && f.abs() <= f64::from(i32::MAX) => Some(f as i32),
            _ => {
                debug!("CellNormalizer: not an integer: \"{}\"", raw);
                None
            }
        }
    }
}

// ── DateProcessor ─────────────────────────────────────────────────────────────

/// Parses the `date_added` column.
pub struct DateProcessor;

impl DateProcessor {
    /// Calendar-date patterns tried in order.
    const FORMATS: &'static [&'static str] = &[
        "%B %d, %Y",
        "%b %d, %Y",
        "%Y-%m-%d",
        "%m/%d/%Y",
        "%d %B %Y",
        "%d %b %Y",
    ];

    /// Parse a date cell. Leading and trailing whitespace is ignored.
    ///
    /// Returns `None` for empty or unrecognised input; a bad cell never
    /// fails the load.
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }

        for fmt in Self::FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return Some(date);
            }
        }

        debug!("DateProcessor: could not parse date \"{}\"", raw);
        None
    }

    /// English month name of `date`.
    pub fn month_name(date: NaiveDate) -> Option<&'static str> {
        u8::try_from(date.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
    }
}

// ── DurationExtractor ─────────────────────────────────────────────────────────

fn leading_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)").expect("regex is valid"))
}

/// Derives the numeric duration from free text such as `"90 min"` or
/// `"3 Seasons"`.
pub struct DurationExtractor;

impl DurationExtractor {
    /// First contiguous run of ASCII digits in `text`, as a float.
    ///
    /// The unit is ignored: `"3 Seasons"` yields `3.0` just like
    /// `"3 min"` would.
    pub fn extract(text: &str) -> Option<f64> {
        leading_digits()
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
