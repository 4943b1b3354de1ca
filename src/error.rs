use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteDataError {
    #[error("file '{}' could not be read: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("file '{}' does not contain valid JSON", .path.display())]
    SourceMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("key '{0}' not found in the file")]
    NotFound(String),
    #[error("Invalid account spec: {0}")]
    InvalidAccount(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SiteDataError {
    /// Process exit code the `sitedata` tool reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SiteDataError::NotFound(_) => 1,
            SiteDataError::SourceUnavailable { .. } => 2,
            SiteDataError::SourceMalformed { .. } => 3,
            SiteDataError::InvalidAccount(_)
            | SiteDataError::CsvError(_)
            | SiteDataError::IoError(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteDataError>;
