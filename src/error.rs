use std::path::PathBuf;

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A file could not be opened, created or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row of a tabular input could not be decoded.
    #[error("{}: malformed input: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row of the interaction list does not hold exactly two IDs.
    #[error("{}: line {line}: expected 2 columns, found {found}", path.display())]
    Columns {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    /// The visualization payload could not be serialized.
    #[error("failed to encode visualization data: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
