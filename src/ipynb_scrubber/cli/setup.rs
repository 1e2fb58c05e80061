use clap::{Args, Parser, Subcommand};
use ipynb_scrubber::config::{
    ScrubbingOptions, DEFAULT_CLEAR_TAG, DEFAULT_CLEAR_TEXT, DEFAULT_NOTE_TAG, DEFAULT_OMIT_TAG,
};
use std::path::PathBuf;

pub const DEFAULT_INDENT: usize = 1;

#[derive(Parser, Debug)]
#[command(name = "ipynb-scrubber", bin_name = "ipynb-scrubber", version)]
#[command(
    about = "Turn Jupyter notebooks into exercise notebooks",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scrub one notebook read from stdin and write it to stdout
    ScrubNotebook {
        #[command(flatten)]
        options: OptionArgs,

        /// Write noted cells' original content to this Markdown file
        #[arg(long)]
        notes_file: Option<PathBuf>,

        /// Spaces per JSON indentation level
        #[arg(long, default_value_t = DEFAULT_INDENT)]
        indent: usize,
    },

    /// Scrub every notebook listed in a project config
    ScrubProject {
        /// Project config to use instead of searching upward from the
        /// current directory
        #[arg(long)]
        config_file: Option<PathBuf>,

        /// Spaces per JSON indentation level
        #[arg(long, default_value_t = DEFAULT_INDENT)]
        indent: usize,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Tag (or directive) that clears a cell
    #[arg(long, default_value = DEFAULT_CLEAR_TAG)]
    pub clear_tag: String,

    /// Replacement text for cleared cells
    #[arg(long, default_value = DEFAULT_CLEAR_TEXT)]
    pub clear_text: String,

    /// Tag (or directive) that drops a cell
    #[arg(long, default_value = DEFAULT_OMIT_TAG)]
    pub omit_tag: String,

    /// Directive that moves a code cell into the notes file
    #[arg(long, default_value = DEFAULT_NOTE_TAG)]
    pub note_tag: String,
}

impl From<OptionArgs> for ScrubbingOptions {
    fn from(args: OptionArgs) -> Self {
        ScrubbingOptions {
            clear_tag: args.clear_tag,
            clear_text: args.clear_text,
            omit_tag: args.omit_tag,
            note_tag: args.note_tag,
        }
    }
}
