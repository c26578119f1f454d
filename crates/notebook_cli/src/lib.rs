//! Terminal shell for the notebook.
//!
//! # Responsibility
//! - Read configuration and bootstrap logging for the binary.
//! - Provide a testable REPL generic over its input and output streams.

pub mod config;
pub mod shell;

pub use config::ShellConfig;
pub use shell::{Command, Shell};
