//! UI renderer trait
//!
//! This module defines the `UIRenderer` trait for drawing the page and managing
//! terminal lifecycle hooks such as initialization and cleanup.

use crate::error::Result;
use crate::page::PageTree;
use crate::ui::state::ViewState;

/// Core trait for UI rendering
pub trait UIRenderer {
    /// Draw the page and status line for the current view state
    fn render(&mut self, page: &PageTree, view_state: &ViewState) -> Result<()>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Enter the alternate screen
    /// - Enable mouse capture for nav bar clicks
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}
