//! Screen layout derived from the page's presentation state.
//!
//! The screen is a one-row navigation bar, the body, and a one-row status line. Every
//! present region gets an equal share of the body whether it is visible or hidden;
//! absent regions get nothing.

use crate::page::{PageTree, Presence, RegionHandle, RenderTree, TriggerHandle, Visibility};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Horizontal padding around each navigation label.
const NAV_LABEL_PADDING: u16 = 2;

/// Area assigned to one present region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPlacement {
    pub handle: RegionHandle,
    pub area: Rect,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub nav_bar: Rect,
    /// One cell per trigger, in document order
    pub nav: Vec<(TriggerHandle, Rect)>,
    pub regions: Vec<RegionPlacement>,
    pub status: Rect,
}

impl PageLayout {
    pub fn compute(area: Rect, page: &PageTree) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let nav = Self::nav_cells(chunks[0], page);

        let present: Vec<RegionHandle> = page
            .regions()
            .filter(|(handle, _)| page.presence(*handle) == Presence::Present)
            .map(|(handle, _)| handle)
            .collect();

        let regions = if present.is_empty() {
            Vec::new()
        } else {
            let share = present.len() as u32;
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Ratio(1, share); present.len()])
                .split(chunks[1]);
            present
                .into_iter()
                .zip(rows.iter())
                .map(|(handle, area)| RegionPlacement {
                    handle,
                    area: *area,
                    visibility: page.visibility(handle),
                })
                .collect()
        };

        Self {
            nav_bar: chunks[0],
            nav,
            regions,
            status: chunks[2],
        }
    }

    fn nav_cells(bar: Rect, page: &PageTree) -> Vec<(TriggerHandle, Rect)> {
        let constraints: Vec<Constraint> = page
            .triggers()
            .map(|(_, node)| Constraint::Length(label_width(&node.label)))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(bar);

        page.triggers()
            .zip(cells.iter())
            .map(|((handle, _), cell)| (handle, *cell))
            .collect()
    }

    /// Navigation trigger under a terminal cell, if any.
    pub fn trigger_at(&self, column: u16, row: u16) -> Option<TriggerHandle> {
        self.nav
            .iter()
            .find(|(_, cell)| contains(*cell, column, row))
            .map(|(handle, _)| *handle)
    }
}

/// Width of a navigation cell for `label`.
pub fn label_width(label: &str) -> u16 {
    (label.chars().count() as u16).saturating_add(NAV_LABEL_PADDING)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
