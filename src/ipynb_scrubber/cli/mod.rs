//! # CLI Behavior
//!
//! This is **one possible UI client** for the scrubber, not the application
//! itself. It is the only place that knows about stdin/stdout, stderr, and
//! exit codes.
//!
//! ## `scrub-notebook`
//!
//! Reads a notebook from stdin and writes the exercise version to stdout.
//! Notes are written to `--notes-file`; without it, noted cells still get
//! their placeholder but a warning says the notes were dropped.
//!
//! ## `scrub-project`
//!
//! Processes every `[[files]]` entry of the project config, in order. The
//! config is `--config-file` or the nearest `.ipynb-scrubber.toml` /
//! `pyproject.toml` above the working directory. Each processed file gets a
//! `✓` line; the first failure gets a `✗` line and the run exits with 1.

mod commands;
mod render;
mod setup;

pub use commands::run;
pub use render::print_error;
