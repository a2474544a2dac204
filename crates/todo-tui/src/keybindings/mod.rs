pub mod dialog_modes;
pub mod input_field;
pub mod registry;
pub mod task_list;

pub use registry::KeybindingRegistry;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    AddTask,
    ToggleTask,
    DeleteTask,
    NavigateDown,
    NavigateUp,
    JumpToTop,
    JumpToBottom,
    FocusInput,
    FocusList,
    ShowHelp,
    Acknowledge,
    Quit,
}

/// One physical key that fires a binding. Plain triggers accept Shift (so
/// `G` and `?` work) but never Ctrl or Alt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTrigger {
    pub code: KeyCode,
    pub ctrl: bool,
}

impl KeyTrigger {
    pub fn plain(code: KeyCode) -> Self {
        Self { code, ctrl: false }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            ctrl: true,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::ALT)
            || key.modifiers.contains(KeyModifiers::CONTROL) != self.ctrl
        {
            return false;
        }
        match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) if self.ctrl => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        }
    }

    pub fn label(&self) -> String {
        let name = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) if self.ctrl => c.to_ascii_uppercase().to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        };
        if self.ctrl {
            format!("^{}", name)
        } else {
            name
        }
    }
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Compact label shown in the footer.
    pub key: String,
    /// Footer text; bindings with an empty one are listed in help only.
    pub short_description: String,
    pub description: String,
    pub action: KeybindingAction,
    pub triggers: Vec<KeyTrigger>,
}

impl Keybinding {
    pub fn new(
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
        action: KeybindingAction,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
            action,
            triggers: Vec::new(),
        }
    }

    pub fn on(mut self, code: KeyCode) -> Self {
        self.triggers.push(KeyTrigger::plain(code));
        self
    }

    pub fn on_ctrl(mut self, c: char) -> Self {
        self.triggers.push(KeyTrigger::ctrl(c));
        self
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.triggers.iter().any(|t| t.matches(key))
    }

    /// Every key that fires this binding, e.g. `j/↓`.
    pub fn keys_label(&self) -> String {
        self.triggers
            .iter()
            .map(KeyTrigger::label)
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// The action bound to `key` in this context, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<KeybindingAction> {
        self.bindings
            .iter()
            .find(|b| b.matches(key))
            .map(|b| b.action)
    }

    /// Compact `key: short` hints for the footer.
    pub fn footer_hints(&self) -> String {
        self.bindings
            .iter()
            .filter(|b| !b.short_description.is_empty())
            .map(|b| format!("{}: {}", b.key, b.short_description))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_trigger_accepts_shift_only() {
        let trigger = KeyTrigger::plain(KeyCode::Char('G'));
        assert!(trigger.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(trigger.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
        assert!(!trigger.matches(&key(KeyCode::Char('G'), KeyModifiers::CONTROL)));
        assert!(!trigger.matches(&key(KeyCode::Char('g'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_ctrl_trigger_ignores_case() {
        let trigger = KeyTrigger::ctrl('c');
        assert!(trigger.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(trigger.matches(&key(
            KeyCode::Char('C'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
        assert!(!trigger.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_keys_label_lists_every_trigger() {
        let binding = Keybinding::new("j", "down", "Select next task", KeybindingAction::NavigateDown)
            .on(KeyCode::Char('j'))
            .on(KeyCode::Down);
        assert_eq!(binding.keys_label(), "j/↓");

        let quit = Keybinding::new("^C", "", "Quit", KeybindingAction::Quit).on_ctrl('c');
        assert_eq!(quit.keys_label(), "^C");
    }

    #[test]
    fn test_footer_skips_help_only_bindings() {
        let context = KeybindingContext::new(
            "Test",
            vec![
                Keybinding::new("a", "new", "Focus entry", KeybindingAction::FocusInput)
                    .on(KeyCode::Char('a')),
                Keybinding::new("^C", "", "Quit", KeybindingAction::Quit).on_ctrl('c'),
            ],
        );
        assert_eq!(context.footer_hints(), "a: new");
        assert_eq!(
            context.action_for(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeybindingAction::Quit)
        );
        assert_eq!(
            context.action_for(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
    }
}
