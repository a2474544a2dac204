use crate::theme::button;
use ratatui::{
    layout::{Alignment, Rect},
    style::Color,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// A clickable action drawn as a bordered, filled label. Returns the area
/// it occupies so callers can record it for mouse hit-testing.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color) -> Rect {
    let widget = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(button(color))
        .block(Block::default().borders(Borders::ALL).style(button(color)));
    frame.render_widget(widget, area);
    area
}

/// Display width of a button for `label`: text, one space each side, borders.
pub fn button_width(label: &str) -> u16 {
    (label.width() + 4) as u16
}
