use super::render::{configure_colors, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use ipynb_scrubber::api::ScrubberApi;
use ipynb_scrubber::config::ScrubbingOptions;
use ipynb_scrubber::error::Result;
use ipynb_scrubber::logging;
use ipynb_scrubber::store::fs::FileStore;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    configure_colors();

    let mut api = ScrubberApi::new(FileStore::new());

    match cli.command {
        Commands::ScrubNotebook {
            options,
            notes_file,
            indent,
        } => {
            let options = ScrubbingOptions::from(options);
            handle_scrub_notebook(&mut api, &options, notes_file.as_deref(), indent)
        }
        Commands::ScrubProject {
            config_file,
            indent,
        } => handle_scrub_project(&mut api, config_file.as_deref(), indent),
    }
}

fn handle_scrub_notebook(
    api: &mut ScrubberApi<FileStore>,
    options: &ScrubbingOptions,
    notes_file: Option<&Path>,
    indent: usize,
) -> Result<ExitCode> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let result = api.scrub_notebook(&input, options, notes_file)?;
    print_messages(&result.messages);

    if let Some(notebook) = &result.notebook {
        let mut out = std::io::stdout().lock();
        notebook.write_json(&mut out, indent)?;
        writeln!(out)?;
        out.flush()?;
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_scrub_project(
    api: &mut ScrubberApi<FileStore>,
    config_file: Option<&Path>,
    indent: usize,
) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = api.load_project(config_file, &cwd)?;
    tracing::info!(files = config.files.len(), "loaded project config");

    let result = api.scrub_project(&config, indent)?;
    print_messages(&result.messages);

    if result.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
