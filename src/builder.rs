use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::FinderConfig;
use crate::source::{load_catalog, DatasetSource, FileSource, HttpSource, InlineSource};
use crate::{FinderError, Session};

/// Where the builder loads the dataset from
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Read a local JSON file
    Path(PathBuf),
    /// Fetch JSON over HTTP(S)
    Url(String),
    /// Use JSON text already in memory
    Json(String),
}

/// Builder for loading a dataset and opening a browsing session
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    source: Option<DataSource>,
    timeout: Option<Duration>,
    address: Option<String>,
}

impl RecipeFinderBuilder {
    /// Load the dataset from a local file
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .path("data/recipes.json");
    /// ```
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(DataSource::Path(path.into()));
        self
    }

    /// Fetch the dataset from a URL
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .url("https://example.com/data/recipes.json");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(DataSource::Url(url.into()));
        self
    }

    /// Use a dataset given as JSON text
    pub fn json(mut self, json: impl Into<String>) -> Self {
        self.source = Some(DataSource::Json(json.into()));
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Restore the filter state from an address query string
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .path("data/recipes.json")
    ///     .address("tags=dessert&atoms=apple&mode=and");
    /// ```
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Apply a loaded configuration: its dataset location, timeout and,
    /// unless one was already given, its initial address
    pub fn config(self, config: &FinderConfig) -> Self {
        let builder = if config.is_remote() {
            self.url(config.data.clone())
        } else {
            self.path(config.data.clone())
        };
        let builder = builder.timeout(config.timeout());

        if builder.address.is_none() && !config.address.is_empty() {
            builder.address(config.address.clone())
        } else {
            builder
        }
    }

    /// Load the dataset and open a session
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - No data source was specified
    /// - The dataset cannot be read or fetched
    /// - The dataset is not a `{ "recipes": [...] }` collection
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let session = RecipeFinder::builder()
    ///     .path("data/recipes.json")
    ///     .build()
    ///     .await?;
    /// println!("{} recipes", session.results().len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Session, FinderError> {
        let source = self.source.ok_or_else(|| {
            FinderError::BuilderError(
                "No data source specified. Use .path(), .url() or .json()".to_string(),
            )
        })?;

        let source: Box<dyn DatasetSource> = match source {
            DataSource::Path(path) => Box::new(FileSource::new(path)),
            DataSource::Url(url) => Box::new(HttpSource::new(url, self.timeout)),
            DataSource::Json(json) => Box::new(InlineSource::new(json)),
        };

        let catalog = load_catalog(source.as_ref()).await?;
        Ok(Session::new(
            Arc::new(catalog),
            self.address.as_deref().unwrap_or_default(),
        ))
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for opening a session
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
