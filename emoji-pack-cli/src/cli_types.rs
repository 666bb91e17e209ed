//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "emoji-pack")]
#[command(about = "Create custom emoji import packs from folders of images", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
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
    /// Create a zip file from emoji images in directories
    Pack {
        /// Input directory containing emoji images (subdirectories are used as categories)
        input: PathBuf,

        /// Output zip file path (default: settings `pack.output`, then emoji-pack.zip)
        output: Option<PathBuf>,

        /// License string added to every emoji
        #[arg(long)]
        license: Option<String>,

        /// Deflate compression level, 0-9
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=9))]
        level: Option<i64>,

        /// Show planned names without writing the archive
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where they come from
    Show,

    /// Print the settings file path
    Path,
}
