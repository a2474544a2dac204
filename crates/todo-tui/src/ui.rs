use crate::app::{App, AppMode, Focus};
use crate::components::*;
use crate::keybindings::KeybindingRegistry;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

pub const ADD_LABEL: &str = "Add Task";
pub const COMPLETE_LABEL: &str = "✅ Complete";
pub const DELETE_LABEL: &str = "❌ Delete Task";

/// Draws the whole window. The window keeps its configured size whatever the
/// terminal size is; it is centred, or clipped on a smaller terminal.
pub fn render(app: &mut App, frame: &mut Frame) {
    let (width, height) = app.config.effective_size();
    let window = fixed_rect(width, height, frame.area());

    frame.render_widget(Clear, window);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(unfocused_border())
        .title(app.config.effective_title())
        .title_alignment(Alignment::Center);
    let inner = outer.inner(window);
    frame.render_widget(outer, window);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    render_input_row(app, frame, chunks[0]);
    render_task_list(app, frame, chunks[1]);
    render_actions(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);

    app.layout_areas.warning_ok = match &app.mode {
        AppMode::Warning(message) => Some(render_warning_popup(frame, window, message)),
        AppMode::Help => {
            let context = KeybindingRegistry::get_help_provider(app).get_context();
            render_help_popup(frame, window, &context);
            None
        }
        AppMode::Normal => None,
    };
}

fn render_input_row(app: &mut App, frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width(ADD_LABEL))])
        .split(area);

    let focused = app.focus == Focus::Input && app.mode == AppMode::Normal;
    let panel = PanelConfig::new(" New task ")
        .with_focus_indicator(" New task [typing] ")
        .focused(focused);
    let block = panel.block();
    let field = block.inner(cols[0]);

    // columns, not chars: wide glyphs take two cells
    let input = app.controller.input();
    let cursor = input.cursor_column();
    let visible = field.width.saturating_sub(1) as usize;
    let skip = cursor.saturating_sub(visible);

    let paragraph = Paragraph::new(input.as_str())
        .style(normal_text())
        .scroll((0, skip as u16))
        .block(block);
    frame.render_widget(paragraph, cols[0]);

    if focused {
        frame.set_cursor_position((field.x + (cursor - skip) as u16, field.y));
    }

    app.layout_areas.input = cols[0];
    app.layout_areas.add_button = render_button(frame, cols[1], ADD_LABEL, ADD_BUTTON);
}

fn render_task_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::List && app.mode == AppMode::Normal;
    let title = format!(
        " Tasks ({}/{} done) ",
        app.controller.completed_count(),
        app.controller.len()
    );
    let panel = PanelConfig::new(&title).focused(focused);
    let block = panel.block();
    app.layout_areas.list = block.inner(area);

    if app.controller.is_empty() {
        app.list_offset = 0;
        let hint = Paragraph::new("No tasks yet. Type one above and press Enter.")
            .style(label_text())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let marker = app.controller.marker();
    let items: Vec<ListItem> = app
        .controller
        .tasks()
        .iter()
        .map(|task| {
            let style = if task.done { done_text() } else { normal_text() };
            ListItem::new(Line::from(Span::styled(task.row(marker), style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_item(focused));

    let mut state = ListState::default()
        .with_offset(app.list_offset.min(app.controller.len() - 1))
        .with_selected(app.controller.selected());
    frame.render_stateful_widget(list, area, &mut state);
    app.list_offset = state.offset();

    let rows = app.layout_areas.list.height as usize;
    if app.controller.len() > rows {
        let mut scrollbar_state = ScrollbarState::new(app.controller.len() - rows + 1)
            .position(app.list_offset)
            .viewport_content_length(rows);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn render_actions(app: &mut App, frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(button_width(COMPLETE_LABEL)),
            Constraint::Length(2),
            Constraint::Length(button_width(DELETE_LABEL)),
            Constraint::Min(0),
        ])
        .split(area);

    app.layout_areas.complete_button =
        render_button(frame, cols[1], COMPLETE_LABEL, COMPLETE_BUTTON);
    app.layout_areas.delete_button = render_button(frame, cols[3], DELETE_LABEL, DELETE_BUTTON);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = KeybindingRegistry::get_provider(app)
        .get_context()
        .footer_hints();
    frame.render_widget(Paragraph::new(hints).style(label_text()), area);
}
