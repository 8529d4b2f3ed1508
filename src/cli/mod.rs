//! Command-line interface
//!
//! clap definitions, command handlers and output formatting.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::errors::DomainError;
use crate::infrastructure::config::ConfigError;

/// Process exit code for a failed command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::InvalidConfig(_)) => 2,
        Some(e) if e.is_collaborator_failure() => 3,
        _ => 1,
    }
}

/// Report an error on stderr and exit
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": err.to_string(),
            "causes": chain.get(1..).unwrap_or_default(),
        });
        eprintln!("{body}");
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }

    std::process::exit(exit_code(&err));
}
