pub mod commands;
pub mod controller;
pub mod task;
pub mod task_list;

pub use controller::TaskListController;
pub use task::Task;
pub use task_list::TaskList;
