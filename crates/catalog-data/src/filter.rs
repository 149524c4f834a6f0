//! Row predicates applied before counting.

use catalog_core::models::{Column, ContentType, Record, TypeSelection};

/// Conjunction of simple row predicates.
///
/// The default filter matches every row. Constraints only ever narrow:
/// combining two different `type` constraints matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    content_types: Vec<ContentType>,
    known: Vec<Column>,
}

impl RowFilter {
    /// Filter that keeps every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep rows whose `type` equals `content_type`.
    pub fn with_type(mut self, content_type: ContentType) -> Self {
        self.content_types.push(content_type);
        self
    }

    /// Apply the dashboard selector; `All` adds nothing.
    pub fn with_selection(self, selection: TypeSelection) -> Self {
        match selection.content_type() {
            Some(t) => self.with_type(t),
            None => self,
        }
    }

    /// Keep rows whose `column` holds a real value (not the "Unknown"
    /// placeholder).
    pub fn require_known(mut self, column: Column) -> Self {
        self.known.push(column);
        self
    }

    /// Both filters must hold.
    pub fn and(mut self, other: &RowFilter) -> Self {
        self.content_types.extend(other.content_types.iter().cloned());
        self.known.extend(other.known.iter().copied());
        self
    }

    /// `true` when `record` passes every constraint.
    pub fn matches(&self, record: &Record) -> bool {
        let type_ok = self
            .content_types
            .iter()
            .all(|t| record.content_type.as_ref() == Some(t));
        type_ok && self.known.iter().all(|c| record.is_known(*c))
    }

    /// `true` when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.content_types.is_empty() && self.known.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: Option<ContentType>, country: Option<&str>) -> Record {
        Record {
            content_type: kind,
            country: country.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_matches_everything() {
        let f = RowFilter::all();
        assert!(f.is_empty());
        assert!(f.matches(&Record::default()));
        assert!(f.matches(&record(Some(ContentType::Movie), None)));
    }

    #[test]
    fn test_type_equality() {
        let f = RowFilter::all().with_type(ContentType::Movie);
        assert!(f.matches(&record(Some(ContentType::Movie), None)));
        assert!(!f.matches(&record(Some(ContentType::TvShow), None)));
        assert!(!f.matches(&record(None, None)));
    }

    #[test]
    fn test_selection_all_is_noop() {
        let f = RowFilter::all().with_selection(TypeSelection::All);
        assert!(f.is_empty());
        let f = RowFilter::all().with_selection(TypeSelection::TvShow);
        assert!(f.matches(&record(Some(ContentType::TvShow), None)));
        assert!(!f.matches(&record(Some(ContentType::Movie), None)));
    }

    #[test]
    fn test_require_known() {
        let f = RowFilter::all().require_known(Column::Country);
        assert!(f.matches(&record(None, Some("India"))));
        assert!(!f.matches(&record(None, None)));
    }

    #[test]
    fn test_and_combines_constraints() {
        let chart = RowFilter::all()
            .with_type(ContentType::TvShow)
            .require_known(Column::Country);
        let f = chart.and(&RowFilter::all().with_selection(TypeSelection::TvShow));
        assert!(f.matches(&record(Some(ContentType::TvShow), Some("Japan"))));
        assert!(!f.matches(&record(Some(ContentType::TvShow), None)));
    }

    #[test]
    fn test_conflicting_types_match_nothing() {
        let f = RowFilter::all()
            .with_type(ContentType::Movie)
            .and(&RowFilter::all().with_type(ContentType::TvShow));
        assert!(!f.matches(&record(Some(ContentType::Movie), None)));
        assert!(!f.matches(&record(Some(ContentType::TvShow), None)));
    }
}
