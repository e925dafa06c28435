use std::io;
use std::path::PathBuf;

/// Failure while turning one syntax node into a `Value`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Node kind outside the supported set of type expressions.
    #[error("unsupported type expression: {kind}")]
    UnsupportedType { kind: String },

    /// Package prefix (or original package) with no known import path.
    #[error("import '{name}' not found")]
    ImportNotFound { name: String },
}

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse file {}", .path.display())]
    Parse { path: PathBuf },

    #[error("no module found for directory '{}'", .dir.display())]
    ModuleNotFound { dir: PathBuf },

    #[error("failed to get absolute path of {}: {source}", .path.display())]
    AbsolutePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error while scanning {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: ResolveError,
    },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
