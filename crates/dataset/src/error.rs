use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open dataset file '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Failed to read dataset header row: {0}")]
    Header(#[from] csv::Error),

    #[error("Failed to parse dataset row {row}: {source}")]
    Row { row: u64, source: csv::Error },
}
