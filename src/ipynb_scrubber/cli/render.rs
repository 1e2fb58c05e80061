use colored::Colorize;
use ipynb_scrubber::api::{CmdMessage, MessageLevel};
use ipynb_scrubber::error::ScrubberError;
use std::io::IsTerminal;

const SUCCESS_MARKER: &str = "✓";
const ERROR_MARKER: &str = "✗";

/// Turn colors off when stderr is not a terminal.
pub(super) fn configure_colors() {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Success => format!("{} {}", SUCCESS_MARKER, message.content)
            .green()
            .to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => format!("{} {}", ERROR_MARKER, message.content)
            .red()
            .to_string(),
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", format_message(message));
    }
}

pub fn print_error(error: &ScrubberError) {
    eprintln!("{}", format!("Error: {}", error).red());
}
