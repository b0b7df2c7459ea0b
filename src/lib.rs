pub mod report;
pub mod utils;

// Re-export common items
pub use report::{exit_status, read_summary, run_report};
pub use utils::config::Config;
