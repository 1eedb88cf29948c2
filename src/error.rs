//! Error type shared by the fragment reader, the generator and the output sinks.
use std::path::PathBuf;

/// Errors that can be returned by `cashuff`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fragment file does not follow the `>name (begin..end)` layout,
    /// e.g. residues appear before the first header.
    #[error("malformed fragment input: {0}")]
    MalformedInput(String),

    /// The left and right sequences of a junction are textually identical.
    #[error("invalid combination: left and right sequences are identical\n{sequence}\n{sequence}")]
    InvalidCombination { sequence: String },

    /// A run parameter is out of range.
    #[error("invalid parameter: {0}")]
    Parameter(String),

    #[error("I/O error: {source} ({path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl Error {
    /// Convenience for wrapping an `io::Error` with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            source: err,
            path: PathBuf::from("<stream>"),
        }
    }
}
