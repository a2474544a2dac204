//! The task list controller.
//!
//! Owns the tasks, the entry buffer and the selection. Every public mutation
//! either succeeds completely or returns an error and leaves all three
//! untouched.

use crate::commands::{AddTask, Command, CommandContext, DeleteTask, ToggleTask};
use crate::{Task, TaskList};
use todo_core::config::DEFAULT_COMPLETION_MARKER;
use todo_core::{InputState, SelectionState, TodoError, TodoResult};

#[derive(Debug, Clone)]
pub struct TaskListController {
    tasks: TaskList,
    input: InputState,
    selection: SelectionState,
    marker: String,
}

impl TaskListController {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            tasks: TaskList::new(),
            input: InputState::new(),
            selection: SelectionState::new(),
            marker: marker.into(),
        }
    }

    fn execute(&mut self, command: &dyn Command) -> TodoResult<()> {
        let mut context = CommandContext {
            tasks: &mut self.tasks,
        };
        command.execute(&mut context)?;
        tracing::info!("{}", command.description());
        Ok(())
    }

    fn require_selection(&self, action: &str) -> TodoResult<usize> {
        self.selection
            .get()
            .filter(|&idx| idx < self.tasks.len())
            .ok_or_else(|| TodoError::SelectionRequired(format!("select a task to {}", action)))
    }

    /// Commits the trimmed input buffer as a new task at the end of the list
    /// and clears the buffer. Blank input is rejected and left as typed.
    pub fn add_task(&mut self) -> TodoResult<()> {
        if self.input.trimmed().is_empty() {
            return Err(TodoError::Validation(
                "task text must not be empty".to_string(),
            ));
        }
        let command = AddTask {
            text: self.input.trimmed().to_string(),
        };
        self.execute(&command)?;
        self.input.clear();
        Ok(())
    }

    /// Flips completion of the selected task in place. The same index stays
    /// selected afterwards.
    pub fn toggle_selected_task(&mut self) -> TodoResult<()> {
        let index = self.require_selection("mark it")?;
        self.execute(&ToggleTask { index })?;
        self.selection.select(Some(index), self.tasks.len());
        Ok(())
    }

    /// Removes the selected task. Nothing is selected afterwards.
    pub fn delete_selected_task(&mut self) -> TodoResult<()> {
        let index = self.require_selection("delete it")?;
        self.execute(&DeleteTask { index })?;
        self.selection.clear();
        Ok(())
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selection.select(index, self.tasks.len());
    }

    pub fn select_next(&mut self) {
        self.selection.next(self.tasks.len());
    }

    pub fn select_prev(&mut self) {
        self.selection.prev(self.tasks.len());
    }

    pub fn select_first(&mut self) {
        self.selection.first(self.tasks.len());
    }

    pub fn select_last(&mut self) {
        self.selection.last(self.tasks.len());
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.get()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn rows(&self) -> Vec<String> {
        self.tasks.rows(&self.marker)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.completed_count()
    }
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLETION_MARKER)
    }
}
