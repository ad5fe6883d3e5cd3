//! Error types for locating and updating config files

use std::path::PathBuf;

/// Why a config file could not be located or updated
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// No candidate directory holds the file and it may not be created
    #[error("config file not found: {path}: {reason}")]
    FileNotFound { path: PathBuf, reason: String },

    /// Existing file could not be read
    #[error("failed to read {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line-oriented file could not be rewritten
    #[error("failed to write {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Existing XML is malformed
    #[error("malformed XML in {path}: {message}")]
    XmlParseError { path: PathBuf, message: String },

    /// XML root element is not the one the component expects
    #[error("unexpected root element in {path}: expected <{expected}>, found <{found}>")]
    XmlInvalidRoot {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// The document could not be updated or serialized
    #[error("failed to update XML in {path}: {message}")]
    XmlUpdateError { path: PathBuf, message: String },

    /// No format is known for the file
    #[error("unsupported config file type: '{file}'")]
    InvalidConfigFileType { file: String },

    /// Updated XML could not be written back
    #[error("failed to save {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MutationError {
    /// Create file-not-found error
    pub fn not_found(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileNotFound {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create read error for path
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.into(),
            source,
        }
    }

    /// Create write error for path
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.into(),
            source,
        }
    }

    /// Create XML parse error for path
    pub fn xml_parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::XmlParseError {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create XML update error for path
    pub fn xml_update(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::XmlUpdateError {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create save error for path
    pub fn save_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SaveFailed {
            path: path.into(),
            source,
        }
    }

    /// Path the error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FileNotFound { path, .. }
            | Self::FileReadError { path, .. }
            | Self::FileWriteError { path, .. }
            | Self::XmlParseError { path, .. }
            | Self::XmlInvalidRoot { path, .. }
            | Self::XmlUpdateError { path, .. }
            | Self::SaveFailed { path, .. } => Some(path),
            Self::InvalidConfigFileType { .. } => None,
        }
    }
}
