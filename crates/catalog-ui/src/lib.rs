//! Terminal UI layer for the catalog dashboard.
//!
//! Provides themes, bar/header/sidebar components, the chart pane, the
//! interactive application loop built on [`ratatui`], and the plain-text /
//! JSON report used by the non-interactive view.

pub mod app;
pub mod chart_view;
pub mod components;
pub mod report;
pub mod themes;

pub use catalog_core as core;
