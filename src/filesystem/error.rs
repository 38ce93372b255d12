use std::path::PathBuf;

use snafu::Snafu;

use crate::ext::PathExt;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TreeError {
    #[snafu(display("Cannot resolve path: {}", path.best_effort_path_display()))]
    InvalidPath {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("The supplied path {} is not a directory", path.best_effort_path_display()))]
    NotADirectory { path: PathBuf },
    #[snafu(display("Failed to read directory {}", path.best_effort_path_display()))]
    Traversal {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Maximum depth must not be negative, got {depth}"))]
    InvalidDepth { depth: i64 },
}
