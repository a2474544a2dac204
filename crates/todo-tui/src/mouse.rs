//! Mouse event handling for the TUI.
//!
//! Clicks are hit-tested against the regions cached by the last render.
//! A second left click on the same row within the double-click interval
//! toggles that row.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::app::{App, AppMode, Focus};

/// Cached layout regions for mouse hit-testing. Updated each render frame.
#[derive(Default, Clone, Debug)]
pub struct LayoutAreas {
    pub input: Rect,
    pub add_button: Rect,
    /// Task rows, inside the list border.
    pub list: Rect,
    pub complete_button: Rect,
    pub delete_button: Rect,
    /// OK button of the warning popup, when one is shown.
    pub warning_ok: Option<Rect>,
}

/// Remembers the last clicked row to detect double clicks.
#[derive(Clone, Debug)]
pub struct ClickTracker {
    last: Option<(usize, Instant)>,
    interval: Duration,
}

impl ClickTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            last: None,
            interval,
        }
    }

    /// Records a click on `row` at `now`. Returns true when it completes a
    /// double click, after which the tracker starts over.
    pub fn register(&mut self, row: usize, now: Instant) -> bool {
        let is_double = matches!(
            self.last,
            Some((prev_row, at)) if prev_row == row && now.saturating_duration_since(at) <= self.interval
        );
        self.last = if is_double { None } else { Some((row, now)) };
        is_double
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    handle_mouse_at(app, event, Instant::now());
}

pub fn handle_mouse_at(app: &mut App, event: MouseEvent, now: Instant) {
    let col = event.column;
    let row = event.row;

    match app.mode {
        AppMode::Warning(_) => {
            if let MouseEventKind::Down(MouseButton::Left) = event.kind {
                if app
                    .layout_areas
                    .warning_ok
                    .is_some_and(|ok| rect_contains(ok, col, row))
                {
                    app.dismiss_popup();
                }
            }
            return;
        }
        AppMode::Help => {
            if let MouseEventKind::Down(_) = event.kind {
                app.dismiss_popup();
            }
            return;
        }
        AppMode::Normal => {}
    }

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_left_down(app, col, row, now),
        MouseEventKind::ScrollUp if rect_contains(app.layout_areas.list, col, row) => {
            app.controller.select_prev();
        }
        MouseEventKind::ScrollDown if rect_contains(app.layout_areas.list, col, row) => {
            app.controller.select_next();
        }
        _ => {}
    }
}

fn handle_left_down(app: &mut App, col: u16, row: u16, now: Instant) {
    let areas = app.layout_areas.clone();

    if rect_contains(areas.input, col, row) {
        app.focus = Focus::Input;
        app.clicks.reset();
    } else if rect_contains(areas.add_button, col, row) {
        app.clicks.reset();
        app.add_task();
    } else if rect_contains(areas.complete_button, col, row) {
        app.clicks.reset();
        app.toggle_selected_task();
    } else if rect_contains(areas.delete_button, col, row) {
        app.clicks.reset();
        app.delete_selected_task();
    } else if rect_contains(areas.list, col, row) {
        let index = app.list_offset + (row - areas.list.y) as usize;
        if index >= app.controller.len() {
            return;
        }
        app.focus = Focus::List;
        app.controller.select(Some(index));
        if app.clicks.register(index, now) {
            app.toggle_selected_task();
        }
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_same_row_within_interval() {
        let mut clicks = ClickTracker::new(Duration::from_millis(400));
        let t0 = Instant::now();
        assert!(!clicks.register(2, t0));
        assert!(clicks.register(2, t0 + Duration::from_millis(150)));
        // a third click starts a new pair
        assert!(!clicks.register(2, t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_slow_or_different_row_is_not_double() {
        let mut clicks = ClickTracker::new(Duration::from_millis(400));
        let t0 = Instant::now();
        assert!(!clicks.register(1, t0));
        assert!(!clicks.register(1, t0 + Duration::from_millis(900)));
        assert!(!clicks.register(0, t0 + Duration::from_millis(950)));
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(rect_contains(rect, 2, 3));
        assert!(rect_contains(rect, 5, 4));
        assert!(!rect_contains(rect, 6, 4));
        assert!(!rect_contains(rect, 2, 5));
        assert!(!rect_contains(Rect::default(), 0, 0));
    }
}
