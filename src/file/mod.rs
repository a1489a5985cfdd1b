// src/file/mod.rs
use std::path::PathBuf;
use thiserror::Error;

pub mod export;
pub mod launches;

pub use launches::LaunchFileHandler;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open launch data {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed launch data in {}: {}", .path.display(), .source)]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("launch data {} is missing required column `{}`", .path.display(), .column)]
    MissingColumn {
        path: PathBuf,
        column: String,
    },

    #[error("row {} of {}: class must be 0 or 1, found {}", .row, .path.display(), .value)]
    InvalidClass {
        path: PathBuf,
        row: usize,
        value: u8,
    },

    #[error("row {} of {}: payload mass must be a non-negative number, found {}", .row, .path.display(), .value)]
    InvalidPayload {
        path: PathBuf,
        row: usize,
        value: f64,
    },

    #[error("launch data {} contains no records", .path.display())]
    Empty {
        path: PathBuf,
    },
}
