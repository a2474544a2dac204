use todo_core::TodoResult;

pub mod task_commands;

pub use task_commands::*;

/// Trait for domain commands that mutate the task list.
/// Commands carry intent; the controller decides which ones to run.
pub trait Command {
    /// Execute this command, mutating the task list
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub tasks: &'a mut crate::TaskList,
}
