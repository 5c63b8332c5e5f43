use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the vocabulary table at startup
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open frequency file {path}: {source}")]
    OpenFrequency {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read frequency file header: {source}")]
    ReadHeader {
        #[source]
        source: csv::Error,
    },

    #[error("frequency file has no `word` column")]
    MissingWordColumn,

    #[error("failed to read frequency row {row}: {source}")]
    ReadRow {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("frequency row {row} has no `word` value")]
    EmptyWord { row: usize },

    #[error("failed to read vocabulary file {path}: {source}")]
    ReadVocabulary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
