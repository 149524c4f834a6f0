//! Main pane of the dashboard: one chart as horizontal bars.
//!
//! Points are drawn top to bottom in series order, so rankings read from
//! the largest value down and histograms read from the lowest bucket up.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use catalog_core::formatting::format_value;
use catalog_data::charts::ChartSeries;

use crate::components::bar::{pad_label, BarConfig, HorizontalBar};
use crate::themes::Theme;

const MIN_LABEL_WIDTH: usize = 8;
const MAX_LABEL_WIDTH: usize = 36;
const MIN_BAR_WIDTH: u16 = 10;

/// Split `width` columns between the label column, the bar, and the value.
fn layout(series: &ChartSeries, width: u16) -> BarConfig {
    let longest_label = series
        .points
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0)
        .max(series.category_label.width());
    let value_width = series
        .points
        .iter()
        .map(|(_, v)| format_value(*v).width())
        .max()
        .unwrap_or(0)
        + 1;

    let label_width = longest_label.clamp(MIN_LABEL_WIDTH, MAX_LABEL_WIDTH);
    let label_width = label_width.min((width as usize / 2).max(MIN_LABEL_WIDTH));
    let bar_width = (width as usize)
        .saturating_sub(label_width + 1 + value_width)
        .max(MIN_BAR_WIDTH as usize) as u16;

    BarConfig {
        label_width,
        bar_width,
        ..BarConfig::default()
    }
}

/// Lines of a non-empty chart for a pane `width` columns wide.
pub fn chart_lines<'a>(series: &'a ChartSeries, width: u16, theme: &'a Theme) -> Vec<Line<'a>> {
    let config = layout(series, width);
    let max = series.max_value();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(pad_label(&series.category_label, config.label_width), theme.label),
            Span::styled(format!(" {}", series.value_label), theme.label),
        ]),
        Line::from(""),
    ];

    for (label, value) in &series.points {
        let bar = HorizontalBar {
            label: label.as_str(),
            value: *value,
            max,
            theme,
            config,
        };
        lines.push(bar.to_line());
    }
    lines
}

/// Render `series` into `area`, or the placeholder when it has no points.
pub fn render_chart(frame: &mut Frame, area: Rect, series: &ChartSeries, theme: &Theme) {
    if series.is_empty() {
        render_no_data(frame, area, &series.title, theme);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(format!(" {} ", series.title), theme.bold));

    frame.render_widget(
        Paragraph::new(Text::from(chart_lines(series, inner_width, theme))).block(block),
        area,
    );
}

/// Placeholder shown when the current selection leaves a chart empty.
pub fn render_no_data(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No data for this selection", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Pick another content type with ←/→ or 1/2/3.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(format!(" {} ", title)),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_data::charts::ChartKind;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_series(points: Vec<(&str, f64)>) -> ChartSeries {
        ChartSeries {
            title: "Top 10 Genres".to_string(),
            kind: ChartKind::Bar,
            category_label: "Genre".to_string(),
            value_label: "Count".to_string(),
            points: points
                .into_iter()
                .map(|(l, v)| (l.to_string(), v))
                .collect(),
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_chart_lines_one_per_point() {
        let theme = Theme::dark();
        let series = make_series(vec![("Dramas", 3.0), ("Comedies", 1.0)]);
        let lines = chart_lines(&series, 80, &theme);
        // Axis caption, blank, one line per point.
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_chart_lines_share_label_column() {
        let theme = Theme::dark();
        let series = make_series(vec![("Dramas", 3.0), ("International TV Shows", 1.0)]);
        let lines = chart_lines(&series, 100, &theme);
        let first = lines[2].spans[0].content.width();
        let second = lines[3].spans[0].content.width();
        assert_eq!(first, second);
        assert_eq!(first, "International TV Shows".len());
    }

    #[test]
    fn test_layout_narrow_pane_keeps_min_bar() {
        let series = make_series(vec![("A very long category label indeed", 3.0)]);
        let config = layout(&series, 20);
        assert!(config.bar_width >= MIN_BAR_WIDTH);
        assert!(config.label_width >= MIN_LABEL_WIDTH);
    }

    #[test]
    fn test_render_chart_does_not_panic() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let series = make_series(vec![("Dramas", 3.0), ("Comedies", 1.0)]);

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_chart(frame, area, &series, &theme);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Top 10 Genres"));
        assert!(text.contains("Dramas"));
    }

    #[test]
    fn test_render_empty_chart_shows_placeholder() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::light();
        let series = make_series(Vec::new());

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_chart(frame, area, &series, &theme);
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("No data for this selection"));
    }
}
