use super::{Command, CommandContext};
use crate::Task;
use todo_core::{TodoError, TodoResult};

/// Append a new open task at the end of the list
pub struct AddTask {
    pub text: String,
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(TodoError::Validation(
                "task text must not be empty".to_string(),
            ));
        }
        context.tasks.push(Task::new(text));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.text.trim())
    }
}

/// Flip the completion flag of the task at `index`, in place
pub struct ToggleTask {
    pub index: usize,
}

impl Command for ToggleTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        let task = context
            .tasks
            .get_mut(self.index)
            .ok_or_else(|| missing_task(self.index))?;
        task.toggle();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle task at position {}", self.index)
    }
}

/// Remove the task at `index`
pub struct DeleteTask {
    pub index: usize,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context
            .tasks
            .remove(self.index)
            .map(|_| ())
            .ok_or_else(|| missing_task(self.index))
    }

    fn description(&self) -> String {
        format!("Delete task at position {}", self.index)
    }
}

fn missing_task(index: usize) -> TodoError {
    TodoError::SelectionRequired(format!("no task at position {}", index))
}
