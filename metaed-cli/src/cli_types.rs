//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "metaed")]
#[command(about = "Check, format and inspect game metadata files", long_about = None)]
pub(crate) struct Cli {
    /// Storage root to use instead of discovered roots
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Parse metadata files and report every problem found
    Check {
        /// Metadata files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also report games without a title
        #[arg(long)]
        require_title: bool,

        /// Exit with an error status if any issue is found
        #[arg(long)]
        strict: bool,

        /// Stop reading a file after this many issues
        #[arg(long)]
        max_issues: Option<usize>,
    },

    /// Rewrite metadata files in canonical form
    Fmt {
        /// Metadata files to format
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write the result back to each file instead of printing it
        #[arg(short, long, conflicts_with = "check")]
        write: bool,

        /// Only report files that are not in canonical form
        #[arg(long)]
        check: bool,

        /// Write even when the file has issues (unknown keys are dropped)
        #[arg(long, requires = "write")]
        force: bool,
    },

    /// List the games in a metadata file
    Show {
        /// Metadata file to read
        file: PathBuf,

        /// Print games as JSON
        #[arg(long)]
        json: bool,
    },

    /// List storage roots, primary first
    Roots,

    /// Find metadata files under the storage roots and summarize them
    Scan {
        /// How many directory levels to descend below each root
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings file
    Show,

    /// Print the settings file path
    Path,

    /// Add an extra storage root
    AddRoot {
        /// Directory to add
        path: PathBuf,
    },

    /// Remove an extra storage root
    RemoveRoot {
        /// Directory to remove
        path: PathBuf,
    },
}
