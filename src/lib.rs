pub mod build_cmd;
pub mod config;
pub mod core;
pub mod site;
pub mod storage;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// The CSV dataset could not be read or parsed.
    #[error("input error in {}: {message}", path.display())]
    Input { path: PathBuf, message: String },

    /// A single data row is unusable.
    #[error("row {row}: {message}")]
    Record { row: usize, message: String },

    /// The output tree could not be prepared or written.
    #[error("output error at {}: {message}", path.display())]
    Output { path: PathBuf, message: String },

    #[error("config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Some detail pages failed to write. The index omits their links.
    #[error("{failed} of {total} restaurant page(s) failed to render")]
    RenderFailures { failed: usize, total: usize },
}

impl SiteError {
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SiteError::Input { path: path.into(), message: message.into() }
    }

    pub fn output(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SiteError::Output { path: path.into(), message: message.into() }
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
