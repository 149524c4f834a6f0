//! Dashboard application state and TUI event loop.
//!
//! [`App`] borrows the loaded table, holds the evaluated charts for the
//! current type selection, and rebuilds them whenever the selection
//! changes. Rendering and key handling are separate from the terminal loop
//! so both can be exercised against a `TestBackend`.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use catalog_core::error::Result;
use catalog_core::models::TypeSelection;
use catalog_data::charts::{build_dashboard, ChartSeries, CHARTS};
use catalog_data::table::Table;

use crate::chart_view;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::themes::Theme;

const SIDEBAR_WIDTH: u16 = 44;

/// Pass `step` through, running `restore` first when it failed.
fn or_restore<T>(step: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    step.inspect_err(|_| restore())
}

/// Best-effort undo of raw mode and the alternate screen after a failed
/// setup step.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the dashboard TUI.
pub struct App<'t> {
    pub theme: Theme,
    table: &'t Table,
    /// Name shown in the header, usually the CSV file name.
    dataset: String,
    selection: TypeSelection,
    titles: Vec<&'static str>,
    charts: Vec<ChartSeries>,
    /// Index of the chart on screen.
    active: usize,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl<'t> App<'t> {
    /// Build the application and evaluate every chart for `selection`.
    pub fn new(
        table: &'t Table,
        dataset: impl Into<String>,
        theme_name: &str,
        selection: TypeSelection,
    ) -> Result<Self> {
        Ok(Self {
            theme: Theme::from_name(theme_name),
            table,
            dataset: dataset.into(),
            selection,
            titles: CHARTS.iter().map(|c| c.title).collect(),
            charts: build_dashboard(table, selection)?,
            active: 0,
            should_quit: false,
        })
    }

    pub fn selection(&self) -> TypeSelection {
        self.selection
    }

    pub fn charts(&self) -> &[ChartSeries] {
        &self.charts
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_chart(&self) -> Option<&ChartSeries> {
        self.charts.get(self.active)
    }

    /// Switch the type selection and recompute every chart from the table.
    pub fn set_selection(&mut self, selection: TypeSelection) -> Result<()> {
        if selection == self.selection {
            return Ok(());
        }
        self.charts = build_dashboard(self.table, selection)?;
        self.selection = selection;
        info!("Type selection changed to {}", selection);
        Ok(())
    }

    pub fn next_chart(&mut self) {
        if !self.charts.is_empty() {
            self.active = (self.active + 1) % self.charts.len();
        }
    }

    pub fn prev_chart(&mut self) {
        if !self.charts.is_empty() {
            self.active = (self.active + self.charts.len() - 1) % self.charts.len();
        }
    }

    /// Apply one key press.
    ///
    /// `q`/`Q`/Ctrl+C quit; Up/Down (`k`/`j`) move between charts;
    /// Left/Right or `t` cycle the type selection; `1`/`2`/`3` pick it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next_chart(),
            KeyCode::Up | KeyCode::Char('k') => self.prev_chart(),
            KeyCode::Right | KeyCode::Char('t') => self.set_selection(self.selection.next())?,
            KeyCode::Left => self.set_selection(self.selection.prev())?,
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                self.set_selection(TypeSelection::ALL[index])?;
            }
            _ => {}
        }
        Ok(())
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the interactive dashboard until the user quits.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout so the loop stays
    /// on the current thread. The terminal is restored before returning,
    /// also when setup or a key handler fails.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        or_restore(execute!(stdout, EnterAlternateScreen), restore_terminal)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = or_restore(Terminal::new(backend), restore_terminal)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame)) {
                break Err(e.into());
            }

            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if let Err(e) = self.handle_key(key) {
                            break Err(e);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => break Err(e.into()),
                },
                Ok(false) => {}
                Err(e) => break Err(e.into()),
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the full dashboard into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header = Header::new(&self.dataset, self.selection.label(), &self.theme);
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), header_area);

        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body_area);

        let sidebar = Sidebar::new(self.selection, &self.titles, self.active, &self.theme);
        frame.render_widget(
            Paragraph::new(Text::from(sidebar.to_lines())).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border),
            ),
            sidebar_area,
        );

        match self.active_chart() {
            Some(series) => chart_view::render_chart(frame, main_area, series, &self.theme),
            None => chart_view::render_no_data(frame, main_area, "Charts", &self.theme),
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "↑/↓ chart  ←/→ type  1/2/3 All/Movie/TV Show  q quit",
                self.theme.dim,
            ))),
            footer_area,
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
