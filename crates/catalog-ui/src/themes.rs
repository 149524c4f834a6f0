use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Every style the dashboard widgets draw with.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_accent: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub warning: Style,

    // ── Bars ─────────────────────────────────────────────────────────────────
    /// Bars at or above 75 % of the chart maximum.
    pub bar_high: Style,
    /// Bars between 35 % and 75 % of the chart maximum.
    pub bar_medium: Style,
    /// Bars below 35 % of the chart maximum.
    pub bar_low: Style,
    pub bar_label: Style,
    pub bar_value: Style,

    // ── Sidebar ──────────────────────────────────────────────────────────────
    pub sidebar_title: Style,
    pub sidebar_item: Style,
    pub sidebar_selected: Style,
    pub border: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            warning: Style::default().fg(Color::Yellow),

            bar_high: Style::default().fg(Color::LightRed),
            bar_medium: Style::default().fg(Color::Red),
            bar_low: Style::default().fg(Color::Magenta),
            bar_label: Style::default().fg(Color::Gray),
            bar_value: Style::default().fg(Color::White),

            sidebar_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            sidebar_item: Style::default().fg(Color::Gray),
            sidebar_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            warning: Style::default().fg(Color::Yellow),

            bar_high: Style::default().fg(Color::Red),
            bar_medium: Style::default().fg(Color::Magenta),
            bar_low: Style::default().fg(Color::Blue),
            bar_label: Style::default().fg(Color::DarkGray),
            bar_value: Style::default().fg(Color::Black),

            sidebar_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            sidebar_item: Style::default().fg(Color::DarkGray),
            sidebar_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
        }
    }

    /// Classic theme using only the basic 8-colour ANSI palette and no bold.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_accent: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            warning: Style::default().fg(Color::Yellow),

            bar_high: Style::default().fg(Color::Red),
            bar_medium: Style::default().fg(Color::Yellow),
            bar_low: Style::default().fg(Color::Green),
            bar_label: Style::default().fg(Color::White),
            bar_value: Style::default().fg(Color::White),

            sidebar_title: Style::default().fg(Color::Cyan),
            sidebar_item: Style::default().fg(Color::White),
            sidebar_selected: Style::default().fg(Color::Black).bg(Color::White),
            border: Style::default().fg(Color::DarkGray),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Fill style for a bar whose length is `percentage` of the chart maximum.
    ///
    /// * `< 35 %`  → `bar_low`
    /// * `35–75 %` → `bar_medium`
    /// * `≥ 75 %`  → `bar_high`
    pub fn bar_style(&self, percentage: f64) -> Style {
        if percentage >= 75.0 {
            self.bar_high
        } else if percentage >= 35.0 {
            self.bar_medium
        } else {
            self.bar_low
        }
    }

    /// Sidebar entry style.
    pub fn item_style(&self, selected: bool) -> Style {
        if selected {
            self.sidebar_selected
        } else {
            self.sidebar_item
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
