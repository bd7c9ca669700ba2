//! CLI command handlers, one file per command.

mod completions;
mod filters;
mod list;
mod show;

pub use completions::run_completions;
pub use filters::run_filters;
pub use list::run_list;
pub use show::run_show;
