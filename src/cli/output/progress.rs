//! Spinner shown while a document is being indexed

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner:.green} {msg}";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create a spinner on stderr.
///
/// Hidden in JSON mode so machine-readable output is never interleaved
/// with terminal control sequences.
pub fn create_spinner(message: impl Into<String>, json_mode: bool) -> ProgressBar {
    if json_mode {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_draw_target(ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
        spinner.set_style(style.tick_chars(SPINNER_CHARS));
    }
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
