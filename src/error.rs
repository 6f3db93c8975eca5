use thiserror::Error;

/// Errors that can occur while loading, filtering or rendering recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Dataset is not a `{ "recipes": [...] }` collection of records
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Failed to fetch the dataset over HTTP
    #[error("Failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Failed to read the dataset from disk
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The rendering collaborator could not consume the results
    #[error("Rendering failed: {0}")]
    RenderingFault(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl FinderError {
    /// Whether this error halts initialization.
    ///
    /// Dataset failures are fatal for the session; rendering faults are not.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FinderError::InvalidDataset(_) | FinderError::Fetch(_) | FinderError::Io(_)
        )
    }
}

impl From<serde_json::Error> for FinderError {
    fn from(err: serde_json::Error) -> Self {
        FinderError::InvalidDataset(err.to_string())
    }
}
