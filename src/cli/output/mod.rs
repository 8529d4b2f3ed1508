//! Output formatting utilities for the CLI.
//!
//! Every command result implements [`CommandOutput`] and is printed either
//! as human-readable text or as a JSON document on stdout.

pub mod progress;
pub mod table;

use serde::Serialize;

pub use progress::create_spinner;
pub use table::TableFormatter;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Shorten `s` to at most `max_chars` characters, ending in "..." when cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
