use std::path::PathBuf;

use thiserror::Error;

/// Message shown in place of the list when the dataset could not be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Erreur lors du chargement des formations";

/// The dataset could not be read or parsed. Loading is all-or-nothing.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not a JSON array: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("formation #{index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadFailure {
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}
