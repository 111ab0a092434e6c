use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Could not read configuration file \"{}\": {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse configuration file \"{}\": {}", .path.display(), .reason)]
    ConfigParse {
        path: PathBuf,
        reason: String,
    },

    #[error("Missing key '{}' in configuration file \"{}\"", .key, .path.display())]
    MissingConfigKey {
        key: String,
        path: PathBuf,
    },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a body we cannot interpret.
    #[error("Unexpected response from FortiCare: {0}")]
    UnexpectedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("PDF error in \"{entry}\": {reason}")]
    Pdf {
        entry: String,
        reason: String,
    },

    #[error("No serial number left to pair with \"{entry}\" ({available} found in the license folder)")]
    NotEnoughSerials {
        entry: String,
        available: usize,
    },
}

impl ToolkitError {
    pub fn unexpected_response(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }

    pub fn pdf(entry: &str, reason: impl ToString) -> Self {
        Self::Pdf {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
