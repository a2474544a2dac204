use crossterm::event::KeyCode;
use todo_core::InputState;

/// Line editing for the task entry field. Returns false for keys that do
/// not edit the buffer.
pub fn handle_text_input(input: &mut InputState, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}
