//! User interface
//!
//! Command-line parsing for the `dirprobe` binary.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
