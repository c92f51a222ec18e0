//! Terminal UI module with ratatui
//!
//! This module hosts the concrete terminal UI implementation along with the supporting
//! layout, view state and styling utilities. The page itself lives in [`crate::page`];
//! everything here only reads it.

pub mod layout;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

pub use layout::{PageLayout, RegionPlacement};
pub use renderer::UIRenderer;
pub use state::{StatusLine, ViewState};
pub use terminal::{render_page, TerminalUI};
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;

