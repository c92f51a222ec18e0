//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui for a
//! cross-platform terminal interface. It only reads the page; all toggling goes through
//! the controller.

use crate::error::{NavToggleError, Result};
use crate::page::{PageTree, RenderTree, TriggerHandle, TriggerId, Visibility};
use crate::ui::{ColorTheme, PageLayout, RegionPlacement, UIRenderer, ViewState};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }
}

/// Wrap a terminal io failure as a `UIError` naming what the terminal was doing.
fn terminal_error(action: &'static str) -> impl FnOnce(io::Error) -> NavToggleError {
    move |err| NavToggleError::ui(format!("{}: {}", action, err))
}

/// Draw the whole page into a frame.
pub fn render_page(frame: &mut Frame, page: &PageTree, view_state: &ViewState, theme: &ColorTheme) {
    let layout = PageLayout::compute(frame.size(), page);

    frame.render_widget(Paragraph::new("").style(theme.nav_bar), layout.nav_bar);
    for (handle, cell) in &layout.nav {
        render_nav_cell(frame, *cell, page, *handle, view_state, theme);
    }

    for placement in &layout.regions {
        render_region(frame, page, placement, theme);
    }

    let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
    let status = Paragraph::new(view_state.status_line.format_status_line()).style(status_style);
    frame.render_widget(status, layout.status);
}

fn render_nav_cell(
    frame: &mut Frame,
    cell: ratatui::layout::Rect,
    page: &PageTree,
    handle: TriggerHandle,
    view_state: &ViewState,
    theme: &ColorTheme,
) {
    let node = page.trigger(handle);
    let mut style = theme.nav_bar;
    if trigger_region_displayed(page, &node.id) {
        style = style.patch(theme.nav_active);
    }
    if handle.index() == view_state.focus {
        style = style.patch(theme.nav_focus);
    }
    let label = Paragraph::new(format!(" {} ", node.label)).style(style);
    frame.render_widget(label, cell);
}

/// Whether the region a trigger navigates to is currently present and visible.
fn trigger_region_displayed(page: &PageTree, trigger_id: &str) -> bool {
    TriggerId::from_node_id(trigger_id)
        .and_then(|trigger| page.find_region(trigger.region().node_id()))
        .map(|region| page.region(region).state.is_displayed())
        .unwrap_or(false)
}

fn render_region(frame: &mut Frame, page: &PageTree, placement: &RegionPlacement, theme: &ColorTheme) {
    // Hidden regions keep their rows but draw nothing.
    if placement.visibility == Visibility::Hidden {
        frame.render_widget(Clear, placement.area);
        return;
    }

    let node = page.region(placement.handle);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.region_border))
        .title(Span::styled(format!(" {} ", node.title), theme.region_title));

    let mut text_style = Style::default();
    if let Some(color) = theme.normal_text {
        text_style = text_style.fg(color);
    }
    let lines: Vec<Line> = node.body.iter().map(|line| Line::from(line.as_str())).collect();
    let body = Paragraph::new(lines)
        .style(text_style)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, placement.area);
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, page: &PageTree, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            terminal
                .draw(move |frame| render_page(frame, page, view_state, theme))
                .map_err(terminal_error("draw failed"))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(terminal_error("cannot enable raw mode"))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(terminal_error("cannot enter alternate screen"))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(terminal_error("cannot create terminal"))?;
        self.terminal = Some(terminal);
        log::info!("terminal initialized");

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode().map_err(terminal_error("cannot disable raw mode"))?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
                .map_err(terminal_error("cannot leave alternate screen"))?;
            self.terminal = None;
            log::info!("terminal restored");
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()
            .map_err(terminal_error("cannot query terminal size"))?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
