//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sdv")]
#[command(about = "Stardew Valley content extraction", long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Content and output locations, each falling back to the configured default
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Directory with unpacked content tables (Objects.json, sprites.json)
    #[arg(long, env = "SDV_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory with unpacked string tables (Objects.json, StringsFromCSFiles.json)
    #[arg(long, env = "SDV_STRINGS_DIR")]
    pub strings_dir: Option<PathBuf>,

    /// Directory to write generated JSON into
    #[arg(short, long, env = "SDV_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build objects.json from unpacked game content
    #[command(visible_alias = "o")]
    Objects {
        #[command(flatten)]
        paths: PathArgs,

        /// Sort output keys instead of keeping content order
        #[arg(long)]
        sort: bool,

        /// Build the catalog and report, without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show catalog entries for object IDs
    #[command(visible_alias = "s")]
    Show {
        /// Object IDs (e.g. 24 126)
        #[arg(required = true)]
        ids: Vec<String>,

        #[command(flatten)]
        paths: PathArgs,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        #[command(flatten)]
        paths: PathArgs,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
