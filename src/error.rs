//! Per-file failure taxonomy. One variant per way a configured file can fail;
//! the batch loop catches these, reports, and moves on.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write output {path}: {source}")]
    OutputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
