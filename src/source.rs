use crate::catalog::Catalog;
use crate::error::FinderError;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{CACHE_CONTROL, USER_AGENT};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Where the raw dataset comes from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs
    fn describe(&self) -> String;

    /// Fetch the raw JSON text
    async fn fetch(&self) -> Result<String, FinderError>;
}

/// Dataset stored in a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, FinderError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Dataset served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            timeout: timeout.unwrap_or(Duration::from_secs(30)),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, FinderError> {
        let client = Client::builder().timeout(self.timeout).build()?;
        let response = client
            .get(&self.url)
            .header(USER_AGENT, "recipe-finder/0.1")
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::InvalidDataset(format!(
                "HTTP {} while fetching {}",
                status.as_u16(),
                self.url
            )));
        }

        Ok(response.text().await?)
    }
}

/// Dataset already held in memory
#[derive(Debug, Clone)]
pub struct InlineSource {
    json: String,
}

impl InlineSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl DatasetSource for InlineSource {
    fn describe(&self) -> String {
        format!("inline dataset ({} bytes)", self.json.len())
    }

    async fn fetch(&self) -> Result<String, FinderError> {
        Ok(self.json.clone())
    }
}

/// Fetch, normalize and index a dataset.
///
/// Any failure is fatal for the caller; nothing is retried.
pub async fn load_catalog(source: &dyn DatasetSource) -> Result<Catalog, FinderError> {
    debug!("Loading recipes from {}", source.describe());

    let result = match source.fetch().await {
        Ok(text) => Catalog::from_json(&text),
        Err(e) => Err(e),
    };

    result.map_err(|e| {
        error!("Failed to load recipes from {}: {}", source.describe(), e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inline_source() {
        let source = InlineSource::new(r#"{"recipes":[{"name":"Toast"}]}"#);
        let catalog = load_catalog(&source).await.unwrap();
        assert_eq!(catalog.recipes()[0].name, "Toast");
    }

    #[tokio::test]
    async fn test_inline_source_invalid() {
        let source = InlineSource::new(r#"{"dishes":[]}"#);
        let err = load_catalog(&source).await.unwrap_err();
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here/recipes.json");
        let err = load_catalog(&source).await.unwrap_err();
        assert!(matches!(err, FinderError::Io(_)));
    }

    #[test]
    fn test_http_source_default_timeout() {
        let source = HttpSource::new("https://example.com/recipes.json", None);
        assert_eq!(source.timeout, Duration::from_secs(30));
        assert_eq!(source.describe(), "https://example.com/recipes.json");
    }
}
