//! UI state management structures
//!
//! View state covers what the terminal host tracks on its own: screen size, which
//! navigation trigger has keyboard focus, and the status line. Region state belongs
//! to the page and is never duplicated here.

use ratatui::layout::Rect;

/// Key hints shown when there is no status message.
const KEY_HINTS: &str = "1/v VM  2/n NES  Tab focus  Enter activate  q quit";

/// Viewport state for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub viewport_width: u16,
    pub viewport_height: u16,

    /// Document-order index of the focused navigation trigger
    pub focus: usize,

    pub status_line: StatusLine,
}

impl ViewState {
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            viewport_width,
            viewport_height,
            focus: 0,
            status_line: StatusLine::new(),
        }
    }

    /// Full screen area
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.viewport_width, self.viewport_height)
    }

    /// Update terminal dimensions. Returns true if dimensions actually changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
        }
        changed
    }

    /// Move focus to the next of `trigger_count` triggers, wrapping around.
    pub fn focus_next(&mut self, trigger_count: usize) {
        if trigger_count == 0 {
            self.focus = 0;
        } else {
            self.focus = (self.focus + 1) % trigger_count;
        }
    }

    /// Move focus to the previous of `trigger_count` triggers, wrapping around.
    pub fn focus_previous(&mut self, trigger_count: usize) {
        if trigger_count == 0 {
            self.focus = 0;
        } else if self.focus == 0 || self.focus >= trigger_count {
            self.focus = trigger_count - 1;
        } else {
            self.focus -= 1;
        }
    }
}

/// Status line information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Text to draw: the current message followed by key hints.
    pub fn format_status_line(&self) -> String {
        match &self.message {
            Some(message) => format!("{} | {}", message, KEY_HINTS),
            None => KEY_HINTS.to_string(),
        }
    }
}
