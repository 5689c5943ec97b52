use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::error;

/// Failure to obtain document content at construction.
///
/// This is fatal for the resolver instance: the content was already
/// identified by the caller, so re-reading it is not expected to succeed
/// differently and no retry is attempted.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unable to read content of {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An immutable text buffer plus its URI, captured once at construction.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    uri: String,
    text: String,
}

impl SourceDocument {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
        }
    }

    /// Reads the document content eagerly from disk.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path).map_err(|source| {
            error!(path = %path.display(), "unable to read document content");
            DocumentError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let uri = javelin_vfs::path_to_uri(&path.to_string_lossy());
        Ok(Self { uri, text })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
