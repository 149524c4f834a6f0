use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative string placed either side of the application title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Dataset and type selection in `[ dataset | selection ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Dataset name shown to the user, usually the CSV file name.
    pub dataset: &'a str,
    /// Label of the active type selection (e.g. "All", "TV Show").
    pub selection: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(dataset: &'a str, selection: &'a str, theme: &'a Theme) -> Self {
        Self {
            dataset,
            selection,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_accent),
                Span::styled(" NETFLIX CATALOG DASHBOARD ", self.theme.header),
                Span::styled(SPARKLES, self.theme.header_accent),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.dataset, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(self.selection, self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
