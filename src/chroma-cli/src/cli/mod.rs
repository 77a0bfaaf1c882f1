//! CLI argument parsing and command dispatch.
//!
//! - `args` - Command-line argument structures and settings resolution
//! - `handlers` - Command execution handlers

pub mod args;
pub mod handlers;

// Re-export main types
pub use args::{Cli, Commands, DecodeArgs, EncodeArgs, HsvArgs, Settings};
pub use handlers::{build_report, dispatch_command};
