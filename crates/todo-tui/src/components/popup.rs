use crate::keybindings::KeybindingContext;
use crate::theme::{bold_highlight, focused_border, label_text, normal_text, popup_bg, warning_border};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// A `width` x `height` rect centred in `r`, clipped to `r` when it does not fit.
pub fn fixed_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Four fifths of `within`, but never narrower than 20 columns.
pub fn popup_width(within: Rect) -> u16 {
    ((u32::from(within.width) * 4 / 5) as u16).max(20)
}

const OK_LABEL: &str = "[ OK ]";

/// Modal warning over `within`. Returns the area of the OK button.
pub fn render_warning_popup(frame: &mut Frame, within: Rect, message: &str) -> Rect {
    let area = fixed_rect(popup_width(within), 7, within);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" ⚠ Warning ")
        .borders(Borders::ALL)
        .border_style(warning_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .margin(1)
        .split(inner);

    let text = Paragraph::new(Line::from(message))
        .style(normal_text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, chunks[0]);

    let ok_area = fixed_rect(OK_LABEL.len() as u16, 1, chunks[1]);
    let ok = Paragraph::new(OK_LABEL).style(bold_highlight());
    frame.render_widget(ok, ok_area);

    ok_area
}

/// Lists every binding of `context` with its full description.
pub fn render_help_popup(frame: &mut Frame, within: Rect, context: &KeybindingContext) {
    let height = context.bindings.len() as u16 + 6;
    let area = fixed_rect(popup_width(within), height, within);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_width = context
        .bindings
        .iter()
        .map(|b| b.keys_label().chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(Span::styled(context.name.clone(), bold_highlight())),
        Line::from(""),
    ];
    for binding in &context.bindings {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<width$}", binding.keys_label(), width = key_width),
                label_text(),
            ),
            Span::raw("  "),
            Span::styled(binding.description.clone(), normal_text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press Esc or ? to close help", label_text())));

    frame.render_widget(Paragraph::new(lines), inner);
}
