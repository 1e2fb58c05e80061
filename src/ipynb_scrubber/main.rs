//! # ipynb-scrubber CLI
//!
//! The binary is thin: the CLI lives in `cli/` and this file only invokes
//! `cli::run()` and maps the outcome to a process exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command dispatch + stdin/stdout wiring (commands.rs)     │
//! │  - Colored status lines on stderr (render.rs)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!          ScrubberApi<FileStore> (library, no terminal I/O)
//! ```
//!
//! stdout carries only the scrubbed notebook. Everything meant for a human
//! (status lines, warnings, errors, logs) goes to stderr.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            cli::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
