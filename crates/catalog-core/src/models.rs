use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::CatalogError;

/// Label under which missing text cells are displayed and counted.
pub const UNKNOWN: &str = "Unknown";

/// Literal delimiter separating values inside multi-value cells
/// (`listed_in`, `cast`, `country`).
pub const MULTI_VALUE_DELIMITER: &str = ", ";

/// Calendar order used for the monthly additions chart.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ── ContentType ───────────────────────────────────────────────────────────────

/// Value of the `type` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    Movie,
    TvShow,
    /// Any other spelling found in the dataset, kept verbatim.
    Other(String),
}

impl ContentType {
    /// Map a raw cell to a content type. Matching is exact, like the
    /// equality predicate the dashboard filter applies.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Movie" => Self::Movie,
            "TV Show" => Self::TvShow,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TypeSelection ─────────────────────────────────────────────────────────────

/// The three states of the content-type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeSelection {
    #[default]
    All,
    Movie,
    TvShow,
}

impl TypeSelection {
    /// Selector states in display order.
    pub const ALL: [TypeSelection; 3] = [Self::All, Self::Movie, Self::TvShow];

    /// Human-readable label, as shown in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
        }
    }

    /// Spelling accepted on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Movie => "movie",
            Self::TvShow => "tv-show",
        }
    }

    /// Parse the command-line spelling. Returns `None` for anything else.
    pub fn from_cli(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.cli_name() == name)
    }

    /// The equality constraint this selection puts on `type`, or `None` for
    /// `All` (no-op).
    pub fn content_type(self) -> Option<ContentType> {
        match self {
            Self::All => None,
            Self::Movie => Some(ContentType::Movie),
            Self::TvShow => Some(ContentType::TvShow),
        }
    }

    /// Next state, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Movie,
            Self::Movie => Self::TvShow,
            Self::TvShow => Self::All,
        }
    }

    /// Previous state, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::TvShow,
            Self::Movie => Self::All,
            Self::TvShow => Self::Movie,
        }
    }
}

impl fmt::Display for TypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Column ────────────────────────────────────────────────────────────────────

/// Every column a [`Record`] exposes to aggregation, source and derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Type,
    Director,
    Cast,
    Country,
    DateAdded,
    ReleaseYear,
    Rating,
    Duration,
    ListedIn,
    MonthAdded,
    DurationMinutes,
}

impl Column {
    /// Columns the input file must provide.
    pub const REQUIRED: [Column; 10] = [
        Self::Title,
        Self::Type,
        Self::Director,
        Self::Cast,
        Self::Country,
        Self::DateAdded,
        Self::ReleaseYear,
        Self::Rating,
        Self::Duration,
        Self::ListedIn,
    ];

    /// Columns computed by the loader.
    pub const DERIVED: [Column; 2] = [Self::MonthAdded, Self::DurationMinutes];

    /// Header spelling of the column.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Type => "type",
            Self::Director => "director",
            Self::Cast => "cast",
            Self::Country => "country",
            Self::DateAdded => "date_added",
            Self::ReleaseYear => "release_year",
            Self::Rating => "rating",
            Self::Duration => "duration",
            Self::ListedIn => "listed_in",
            Self::MonthAdded => "month_added",
            Self::DurationMinutes => "duration_minutes",
        }
    }

    /// Columns whose cells carry a number.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::ReleaseYear | Self::DurationMinutes)
    }

    /// Typed columns whose missing cells are skipped when counting, rather
    /// than counted under [`UNKNOWN`].
    pub fn is_nullable(self) -> bool {
        matches!(
            self,
            Self::DateAdded | Self::ReleaseYear | Self::MonthAdded | Self::DurationMinutes
        )
    }
}

impl FromStr for Column {
    type Err = CatalogError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::REQUIRED
            .into_iter()
            .chain(Self::DERIVED)
            .find(|c| c.name() == name)
            .ok_or_else(|| CatalogError::ColumnNotFound(name.to_string()))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn text(cell: &Option<String>) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(cell.as_deref().unwrap_or(UNKNOWN)))
}

/// A text cell holding the [`UNKNOWN`] placeholder is as unknown as an
/// empty one.
fn known_text(cell: &Option<String>) -> bool {
    cell.as_deref().is_some_and(|v| v != UNKNOWN)
}

// ── Record ────────────────────────────────────────────────────────────────────

/// One normalised catalog entry.
///
/// Missing source cells are `None`; they are never fed to the date or
/// number parsers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub title: Option<String>,
    pub content_type: Option<ContentType>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    /// Free text such as `"90 min"` or `"3 Seasons"`.
    pub duration: Option<String>,
    pub listed_in: Option<String>,
    /// English month name of `date_added`.
    pub month_added: Option<&'static str>,
    /// First integer run of `duration`. A season count for TV shows.
    pub duration_minutes: Option<f64>,
}

impl Record {
    /// Display label of a cell, used as the counting key.
    ///
    /// Missing text cells yield [`UNKNOWN`]; missing typed cells (see
    /// [`Column::is_nullable`]) yield `None` and are skipped by callers.
    pub fn label(&self, column: Column) -> Option<Cow<'_, str>> {
        match column {
            Column::Title => text(&self.title),
            Column::Type => Some(Cow::Borrowed(
                self.content_type
                    .as_ref()
                    .map(ContentType::as_str)
                    .unwrap_or(UNKNOWN),
            )),
            Column::Director => text(&self.director),
            Column::Cast => text(&self.cast),
            Column::Country => text(&self.country),
            Column::Rating => text(&self.rating),
            Column::Duration => text(&self.duration),
            Column::ListedIn => text(&self.listed_in),
            Column::DateAdded => self
                .date_added
                .map(|d| Cow::Owned(d.format("%Y-%m-%d").to_string())),
            Column::ReleaseYear => self.release_year.map(|y| Cow::Owned(y.to_string())),
            Column::MonthAdded => self.month_added.map(Cow::Borrowed),
            Column::DurationMinutes => self
                .duration_minutes
                .map(|m| Cow::Owned(crate::formatting::format_plain(m))),
        }
    }

    /// Numeric value of a numeric column, `None` when missing or when the
    /// column is not numeric.
    pub fn numeric(&self, column: Column) -> Option<f64> {
        match column {
            Column::ReleaseYear => self.release_year.map(f64::from),
            Column::DurationMinutes => self.duration_minutes,
            _ => None,
        }
    }

    /// `true` when the cell holds a real value rather than a missing one or
    /// the literal [`UNKNOWN`] placeholder.
    pub fn is_known(&self, column: Column) -> bool {
        match column {
            Column::Title => known_text(&self.title),
            Column::Type => self.content_type.is_some(),
            Column::Director => known_text(&self.director),
            Column::Cast => known_text(&self.cast),
            Column::Country => known_text(&self.country),
            Column::DateAdded => self.date_added.is_some(),
            Column::ReleaseYear => self.release_year.is_some(),
            Column::Rating => known_text(&self.rating),
            Column::Duration => known_text(&self.duration),
            Column::ListedIn => known_text(&self.listed_in),
            Column::MonthAdded => self.month_added.is_some(),
            Column::DurationMinutes => self.duration_minutes.is_some(),
        }
    }

    /// Title used when a row labels a bar.
    pub fn title_label(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN)
    }
}
