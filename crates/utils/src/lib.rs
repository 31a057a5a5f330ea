mod console;
mod list_paths;
mod run_command;

pub use console::{detail, done, section, warn};
pub use list_paths::list_paths_sorted_by_components;
pub use run_command::{CommandFailed, CommandOutput, run_in_dir, run_with_stdin};
