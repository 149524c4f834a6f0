use crate::themes::Theme;
use catalog_core::formatting::{format_value, percentage};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Configuration controlling visual appearance of a chart bar.
#[derive(Debug, Clone, Copy)]
pub struct BarConfig {
    /// Display columns reserved for the category label.
    pub label_width: usize,
    /// Display columns of a bar at the chart maximum.
    pub bar_width: u16,
    pub filled_char: char,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            label_width: 28,
            bar_width: 40,
            filled_char: '\u{2588}', // █  FULL BLOCK
        }
    }
}

// ── HorizontalBar ────────────────────────────────────────────────────────────

/// One row of a horizontal bar chart: padded label, bar scaled against the
/// chart maximum, formatted value.
pub struct HorizontalBar<'a> {
    pub label: &'a str,
    pub value: f64,
    /// Largest value of the chart; the bar for it fills `bar_width`.
    pub max: f64,
    pub theme: &'a Theme,
    pub config: BarConfig,
}

impl<'a> HorizontalBar<'a> {
    pub fn new(label: &'a str, value: f64, max: f64, theme: &'a Theme) -> Self {
        Self {
            label,
            value,
            max,
            theme,
            config: BarConfig::default(),
        }
    }

    /// Share of the chart maximum in `[0, 100]`.
    pub fn percentage(&self) -> f64 {
        percentage(self.value, self.max, 1).clamp(0.0, 100.0)
    }

    /// Number of filled cells. Any positive value gets at least one.
    pub fn filled_cells(&self) -> u16 {
        let cells = (self.percentage() / 100.0 * self.config.bar_width as f64).round() as u16;
        if cells == 0 && self.value > 0.0 {
            1
        } else {
            cells.min(self.config.bar_width)
        }
    }

    /// Render the bar as a [`Line`].
    pub fn to_line(&self) -> Line<'a> {
        let filled = self.filled_cells();
        let bar: String = std::iter::repeat_n(self.config.filled_char, filled as usize).collect();
        let gap = " ".repeat((self.config.bar_width - filled) as usize);

        Line::from(vec![
            Span::styled(
                pad_label(self.label, self.config.label_width),
                self.theme.bar_label,
            ),
            Span::raw(" "),
            Span::styled(bar, self.theme.bar_style(self.percentage())),
            Span::raw(gap),
            Span::styled(format!(" {}", format_value(self.value)), self.theme.bar_value),
        ])
    }
}

/// Pad `label` with spaces to exactly `width` display columns, truncating
/// with `…` when it is wider.
pub fn pad_label(label: &str, width: usize) -> String {
    let current = label.width();
    if current <= width {
        return format!("{}{}", label, " ".repeat(width - current));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
