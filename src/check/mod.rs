pub mod file_walk;
pub mod results_formatter;
pub mod runner;

// Public exports
pub use file_walk::find_source_files;
pub use results_formatter::{format_and_print_check_results, OutputFormat};
pub use runner::{run_check, CheckOptions};
