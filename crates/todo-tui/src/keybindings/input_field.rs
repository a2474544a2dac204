use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};
use crossterm::event::KeyCode;

pub struct InputFieldProvider;

impl KeybindingProvider for InputFieldProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "New Task",
            vec![
                Keybinding::new("Enter", "add", "Add the typed task", KeybindingAction::AddTask)
                    .on(KeyCode::Enter),
                Keybinding::new(
                    "Tab",
                    "list",
                    "Move focus to the task list",
                    KeybindingAction::FocusList,
                )
                .on(KeyCode::Tab)
                .on(KeyCode::Down)
                .on(KeyCode::Esc),
                Keybinding::new("F1", "help", "Show keybindings", KeybindingAction::ShowHelp)
                    .on(KeyCode::F(1)),
                Keybinding::new("^C", "quit", "Quit application", KeybindingAction::Quit)
                    .on_ctrl('c'),
            ],
        )
    }
}
