use crate::themes::Theme;
use catalog_core::models::TypeSelection;
use ratatui::text::{Line, Span};

/// Left-hand navigation: the type selector as a radio group followed by
/// the chart list with the active chart highlighted.
pub struct Sidebar<'a> {
    pub selection: TypeSelection,
    pub titles: &'a [&'a str],
    /// Index into `titles` of the chart on screen.
    pub active: usize,
    pub theme: &'a Theme,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        selection: TypeSelection,
        titles: &'a [&'a str],
        active: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            selection,
            titles,
            active,
            theme,
        }
    }

    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            "Content type",
            self.theme.sidebar_title,
        ))];

        for (i, option) in TypeSelection::ALL.iter().enumerate() {
            let checked = *option == self.selection;
            let marker = if checked { "(•)" } else { "( )" };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", marker), self.theme.item_style(checked)),
                Span::styled(option.label(), self.theme.item_style(checked)),
                Span::styled(format!("  [{}]", i + 1), self.theme.dim),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Charts", self.theme.sidebar_title)));

        for (i, title) in self.titles.iter().enumerate() {
            let selected = i == self.active;
            let prefix = if selected { "▶ " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{}{}", prefix, title),
                self.theme.item_style(selected),
            )));
        }

        lines
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    const TITLES: [&str; 3] = ["Top 10 Genres", "Release Trend Over Years", "Top 10 Actors"];

    #[test]
    fn test_sidebar_radio_marks_selection() {
        let theme = Theme::dark();
        let lines = Sidebar::new(TypeSelection::Movie, &TITLES, 0, &theme).to_lines();
        assert_eq!(text(&lines[1]), " ( ) All  [1]");
        assert_eq!(text(&lines[2]), " (•) Movie  [2]");
        assert_eq!(text(&lines[3]), " ( ) TV Show  [3]");
    }

    #[test]
    fn test_sidebar_lists_every_chart() {
        let theme = Theme::dark();
        let lines = Sidebar::new(TypeSelection::All, &TITLES, 1, &theme).to_lines();
        // Title, three radio rows, blank, charts title, three chart rows.
        assert_eq!(lines.len(), 9);
        assert_eq!(text(&lines[6]), "  Top 10 Genres");
        assert_eq!(text(&lines[7]), "▶ Release Trend Over Years");
        assert_eq!(lines[7].spans[0].style, theme.sidebar_selected);
        assert_eq!(lines[8].spans[0].style, theme.sidebar_item);
    }
}
