//! CLI command handlers. Each command is in its own file.

mod completions;
mod fetch;
mod get;
mod man;
mod task;
mod tasks;

pub use completions::run_completions;
pub use get::run_get;
pub use man::run_man;
pub use task::run_task;
pub use tasks::run_list_tasks;
