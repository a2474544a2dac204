use super::{
    dialog_modes::{HelpProvider, WarningProvider},
    input_field::InputFieldProvider,
    task_list::TaskListProvider,
    KeybindingProvider,
};
use crate::app::{App, AppMode, Focus};

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    /// Bindings that handle keys in the app's current state.
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        Self::get_provider_for_mode(&app.mode, app.focus)
    }

    /// Bindings of the view underneath the help popup.
    pub fn get_help_provider(app: &App) -> Box<dyn KeybindingProvider> {
        Self::get_provider_for_mode(&AppMode::Normal, app.focus)
    }

    fn get_provider_for_mode(mode: &AppMode, focus: Focus) -> Box<dyn KeybindingProvider> {
        match mode {
            AppMode::Warning(_) => Box::new(WarningProvider),
            AppMode::Help => Box::new(HelpProvider),
            AppMode::Normal => match focus {
                Focus::Input => Box::new(InputFieldProvider),
                Focus::List => Box::new(TaskListProvider),
            },
        }
    }
}
