use std::path::PathBuf;

use thiserror::Error;

/// Result type for bridge emission.
pub type Result<T> = std::result::Result<T, EmitError>;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("file already open: '{}'", .path.display())]
    AlreadyOpen { path: PathBuf },

    #[error("stream unavailable: '{}' is not open", .path.display())]
    NotOpen { path: PathBuf },

    #[error("builder already built '{}'", .path.display())]
    AlreadyBuilt { path: PathBuf },

    #[error("builder is closed")]
    Closed,

    #[error("failed to create '{}'", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
