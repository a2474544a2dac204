use crate::{
    dialog::handle_text_input,
    events::{Event, EventHandler},
    keybindings::{KeybindingAction, KeybindingRegistry},
    mouse::{self, ClickTracker, LayoutAreas},
    ui,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use todo_core::{AppConfig, TodoError, TodoResult};
use todo_domain::TaskListController;

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub controller: TaskListController,
    pub config: AppConfig,
    pub layout_areas: LayoutAreas,
    /// First visible row of the list, carried between frames.
    pub list_offset: usize,
    pub clicks: ClickTracker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Modal warning; input is swallowed until it is acknowledged.
    Warning(String),
    /// Keybinding list for the focused view.
    Help,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let controller = TaskListController::new(config.effective_completion_marker());
        let clicks = ClickTracker::new(Duration::from_millis(config.effective_double_click_ms()));
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Focus::Input,
            controller,
            config,
            layout_areas: LayoutAreas::default(),
            list_offset: 0,
            clicks,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn add_task(&mut self) {
        if let Err(e) = self.controller.add_task() {
            self.report(e);
        }
    }

    pub fn toggle_selected_task(&mut self) {
        if let Err(e) = self.controller.toggle_selected_task() {
            self.report(e);
        }
    }

    pub fn delete_selected_task(&mut self) {
        match self.controller.delete_selected_task() {
            // rows below the deleted one shift up; a pending click no longer
            // points at the same task
            Ok(()) => self.clicks.reset(),
            Err(e) => self.report(e),
        }
    }

    /// Closes the warning or help popup.
    pub fn dismiss_popup(&mut self) {
        self.mode = AppMode::Normal;
    }

    fn report(&mut self, error: TodoError) {
        tracing::warn!("{}", error);
        self.clicks.reset();
        self.mode = AppMode::Warning(error.user_message());
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let context = KeybindingRegistry::get_provider(self).get_context();
        if let Some(action) = context.action_for(&key) {
            tracing::debug!("{}: {:?}", context.name, action);
            self.apply(action);
            return;
        }

        let typing = self.mode == AppMode::Normal && self.focus == Focus::Input;
        if typing
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            handle_text_input(self.controller.input_mut(), key.code);
        }
    }

    pub fn apply(&mut self, action: KeybindingAction) {
        match action {
            KeybindingAction::AddTask => self.add_task(),
            KeybindingAction::ToggleTask => self.toggle_selected_task(),
            KeybindingAction::DeleteTask => self.delete_selected_task(),
            KeybindingAction::NavigateDown => self.controller.select_next(),
            KeybindingAction::NavigateUp => self.controller.select_prev(),
            KeybindingAction::JumpToTop => self.controller.select_first(),
            KeybindingAction::JumpToBottom => self.controller.select_last(),
            KeybindingAction::FocusInput => self.focus = Focus::Input,
            KeybindingAction::FocusList => self.focus = Focus::List,
            KeybindingAction::ShowHelp => self.mode = AppMode::Help,
            KeybindingAction::Acknowledge => self.dismiss_popup(),
            KeybindingAction::Quit => self.quit(),
        }
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        let mut terminal = setup_terminal(self.config.effective_title())?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> TodoResult<()> {
        let mut needs_redraw = true;

        while !self.should_quit {
            if needs_redraw {
                terminal.draw(|frame| ui::render(self, frame))?;
            }

            needs_redraw = match events.next().await {
                Some(Event::Key(key)) => {
                    self.handle_key_event(key);
                    true
                }
                Some(Event::Mouse(event)) => {
                    mouse::handle_mouse(self, event);
                    true
                }
                Some(Event::Resize) => true,
                Some(Event::Tick) => false,
                None => break,
            };
        }

        Ok(())
    }
}

fn setup_terminal(title: &str) -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
