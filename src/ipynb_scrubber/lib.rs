//! # ipynb-scrubber Architecture
//!
//! ipynb-scrubber turns instructor notebooks into exercise notebooks. Cells can
//! be dropped, cleared down to a placeholder, or cleared while their original
//! content is kept in a separate notes document. Cells are selected by
//! metadata tags or by comment directives at the top of the cell.
//!
//! It is a library with a CLI client, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads stdin, writes stdout             │
//! │  - The ONLY place that knows about stderr and exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves the project config (explicit or discovered)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One notebook from text, or a whole project in order      │
//! │  - Returns CmdResult with leveled messages                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (process, classify, directives, transform, notes)   │
//! │  - Pure functions over the notebook model                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NotebookStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Processing Rules
//!
//! For every cell, in order:
//!
//! 1. Omitted cells (`scrub-omit` tag or directive) are dropped, even if they
//!    also ask to be noted or cleared.
//! 2. Code cells with an inline note directive (`#| scrub-note: id`) have their
//!    original source captured under `id` and are replaced by a pointer to it.
//! 3. Cells asking to be cleared get the clear text (or the directive's own
//!    text). Raw cells only respond to the clear tag.
//! 4. Every surviving cell loses its outputs and execution count.
//!
//! The notebook metadata gains `exercise_version: true`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `scrub_notebook` and `scrub_project`
//! - [`process`]: Whole-notebook pass, notes and diagnostics
//! - [`classify`]: Omit / clear / note decisions for one cell
//! - [`directives`]: Comment directive scanner
//! - [`transform`]: Applies a decision to a cell
//! - [`notes`]: Insertion-ordered notes and their Markdown rendering
//! - [`model`]: Notebook and cell types
//! - [`config`]: Scrubbing options and project files
//! - [`store`]: Storage abstraction and implementations
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod classify;
pub mod commands;
pub mod config;
pub mod directives;
pub mod error;
pub mod logging;
pub mod model;
pub mod notes;
pub mod process;
pub mod store;
pub mod transform;
