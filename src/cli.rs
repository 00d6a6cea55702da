use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "polyclip")]
#[command(about = "Browse PolyTrack record histories and copy recordings to the clipboard", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// History file to open in the browser
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive browser (default)
    Tui {
        file: Option<PathBuf>,
    },
    /// Print the entries of a history file
    List {
        file: PathBuf,
    },
    /// Copy one entry's recording to the clipboard
    Copy {
        file: PathBuf,

        /// 1-based entry index, as shown by `list`
        index: usize,
    },
}
