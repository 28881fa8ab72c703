use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotz")]
#[command(about = "Per-user command-line note-taking tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir, or $JOTZ_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in as (or switch to) a user
    Login {
        /// Username (freeform, trimmed)
        name: String,
    },

    /// Log out the active user
    Logout,

    /// Print the active user
    Whoami,

    /// List every user ever logged in
    Users,

    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Title of the note
        title: String,

        /// Content of the note (markdown)
        #[arg(required = false)]
        content: Option<String>,
    },

    /// List the active user's notes
    #[command(alias = "ls")]
    List,

    /// View a note
    #[command(alias = "v")]
    View {
        /// Id of the note
        id: String,

        /// Render the markdown body as HTML
        #[arg(long)]
        html: bool,
    },

    /// Edit a note's title and content
    #[command(alias = "e")]
    Edit {
        /// Id of the note
        id: String,

        /// New title
        title: String,

        /// New content (markdown)
        #[arg(required = false)]
        content: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Id of the note
        id: String,
    },

    /// Search notes by title or content
    Search { query: String },

    /// Export the active user's notes to <username>_notes.json
    Export {
        /// Directory to write the file into (defaults to the current dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import notes from a JSON file (merges by id, overwriting matches)
    Import {
        /// Path to a JSON array of notes
        file: PathBuf,
    },
}
