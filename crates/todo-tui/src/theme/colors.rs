use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;
pub const UNFOCUSED_SELECTED_BG: Color = Color::DarkGray;

pub const DONE_TEXT: Color = Color::DarkGray;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const ADD_BUTTON: Color = Color::Green;
pub const COMPLETE_BUTTON: Color = Color::Blue;
pub const DELETE_BUTTON: Color = Color::Red;

pub const POPUP_BG: Color = Color::Black;
pub const WARNING_COLOR: Color = Color::Yellow;
