use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};
use crossterm::event::KeyCode;

pub struct WarningProvider;

impl KeybindingProvider for WarningProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Warning",
            vec![
                Keybinding::new(
                    "Enter/Esc/Space",
                    "ok",
                    "Dismiss the warning",
                    KeybindingAction::Acknowledge,
                )
                .on(KeyCode::Enter)
                .on(KeyCode::Esc)
                .on(KeyCode::Char(' ')),
                Keybinding::new("^C", "", "Quit application", KeybindingAction::Quit)
                    .on_ctrl('c'),
            ],
        )
    }
}

pub struct HelpProvider;

impl KeybindingProvider for HelpProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Help",
            vec![
                Keybinding::new("Esc/?", "close", "Close help", KeybindingAction::Acknowledge)
                    .on(KeyCode::Esc)
                    .on(KeyCode::Char('?'))
                    .on(KeyCode::F(1))
                    .on(KeyCode::Enter)
                    .on(KeyCode::Char('q')),
                Keybinding::new("^C", "", "Quit application", KeybindingAction::Quit)
                    .on_ctrl('c'),
            ],
        )
    }
}
