use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Generate a directory tree structure with emoji icons.
///
/// PATH is the directory to generate the tree from. Defaults to current directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "dstree", version, about)]
pub struct Cli {
    /// Directory to render
    #[arg(default_value = ".", value_parser = readable_path)]
    pub path: PathBuf,

    /// Show absolute paths
    #[arg(short, long)]
    pub absolute: bool,

    /// Maximum depth of recursion, default is full recursion
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Disable emoji icons in output
    #[arg(long)]
    pub no_emoji: bool,

    /// Copy the output to your clipboard
    #[arg(long)]
    pub clip: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

fn readable_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    let metadata =
        fs::metadata(&path).map_err(|_| format!("Path '{value}' does not exist."))?;

    if !metadata.is_dir() {
        return Err(format!("Path '{value}' is not a directory."));
    }
    if fs::read_dir(&path).is_err() {
        return Err(format!("Path '{value}' is not readable."));
    }

    Ok(path)
}
