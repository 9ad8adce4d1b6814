//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Graph-structured stack: build keyed DAGs with shared nodes from flat entry lists
#[derive(Parser, Debug)]
#[command(name = "gss")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every root and its descendants as a tree
    Tree {
        /// Entry file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List root keys in first-seen order
    Roots {
        /// Entry file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Resolve a '/'-separated key path
    Get {
        /// Entry file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Key path, e.g. 1/4/2
        path: String,
        /// Start at this key instead of a root (path is then relative)
        #[arg(short, long)]
        from: Option<String>,
    },

    /// Search for a key anywhere below a node
    Find {
        /// Entry file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Key to search for
        key: String,
        /// Search below this key only (default: all roots)
        #[arg(short, long)]
        from: Option<String>,
    },

    /// List leaf keys per root
    Leaves {
        /// Entry file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List every root-to-leaf key path
    Branches {
        /// Entry file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings (optionally including the local .gss.toml of a directory)
    Show {
        /// Directory holding a local .gss.toml
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },

    /// Show config file locations
    Path,
}
