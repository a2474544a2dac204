use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};
use crossterm::event::KeyCode;

pub struct TaskListProvider;

impl KeybindingProvider for TaskListProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Task List",
            vec![
                Keybinding::new("j/k", "move", "Select next task", KeybindingAction::NavigateDown)
                    .on(KeyCode::Char('j'))
                    .on(KeyCode::Down),
                Keybinding::new("k", "", "Select previous task", KeybindingAction::NavigateUp)
                    .on(KeyCode::Char('k'))
                    .on(KeyCode::Up),
                Keybinding::new("g", "", "Select first task", KeybindingAction::JumpToTop)
                    .on(KeyCode::Char('g'))
                    .on(KeyCode::Home),
                Keybinding::new("G", "", "Select last task", KeybindingAction::JumpToBottom)
                    .on(KeyCode::Char('G'))
                    .on(KeyCode::End),
                Keybinding::new(
                    "Space",
                    "done",
                    "Mark selected task complete/incomplete",
                    KeybindingAction::ToggleTask,
                )
                .on(KeyCode::Char(' '))
                .on(KeyCode::Enter)
                .on(KeyCode::Char('c')),
                Keybinding::new("d", "delete", "Delete selected task", KeybindingAction::DeleteTask)
                    .on(KeyCode::Char('d'))
                    .on(KeyCode::Char('x'))
                    .on(KeyCode::Delete),
                Keybinding::new("a", "new", "Focus the task entry", KeybindingAction::FocusInput)
                    .on(KeyCode::Char('a'))
                    .on(KeyCode::Char('i'))
                    .on(KeyCode::Tab),
                Keybinding::new("?", "help", "Show keybindings", KeybindingAction::ShowHelp)
                    .on(KeyCode::Char('?'))
                    .on(KeyCode::F(1)),
                Keybinding::new("q", "", "Quit application", KeybindingAction::Quit)
                    .on(KeyCode::Char('q'))
                    .on(KeyCode::Char('Q'))
                    .on(KeyCode::Esc)
                    .on_ctrl('c'),
            ],
        )
    }
}
