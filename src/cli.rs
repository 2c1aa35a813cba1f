//! Command-line interface implementation for crig.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_TEMPLATE_FILE;

/// Command-line arguments structure for crig.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "crig: project structure generator from a plain-text tree template",
    long_about = None,
    after_help = "Typical flow: crig --init, edit template.txt, then crig."
)]
pub struct Args {
    /// Directory where the project structure will be created
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Template file describing the structure
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Write a starter template instead of generating
    #[arg(short, long)]
    pub init: bool,

    /// Overwrite existing files (and the template with --init)
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be created without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Explain ignored template lines and shadowed duplicate entries
    #[arg(short = 'x', long)]
    pub explain: bool,

    /// Only accept tab indentation in the template
    #[arg(long)]
    pub tabs_only: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
