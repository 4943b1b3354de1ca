use crate::domain::document::Document;
use crate::error::{Result, SiteDataError};
use std::fs;
use std::path::Path;

/// Loads a site-data document from a JSON file.
///
/// A file that cannot be read is reported as
/// [`SiteDataError::SourceUnavailable`]. Contents that are empty, not UTF-8
/// JSON, or not a JSON object are reported as [`SiteDataError::SourceMalformed`].
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|source| SiteDataError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Document =
        serde_json::from_slice(&contents).map_err(|source| SiteDataError::SourceMalformed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), keys = document.len(), "loaded site-data document");
    Ok(document)
}
