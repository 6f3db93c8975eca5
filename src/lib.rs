pub mod builder;
pub mod catalog;
pub mod codec;
pub mod collation;
pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod query;
pub mod render;
pub mod session;
pub mod source;

// Re-exports for convenience
pub use builder::{DataSource, RecipeFinder, RecipeFinderBuilder};
pub use catalog::Catalog;
pub use codec::{decode, decode_url, encode};
pub use config::FinderConfig;
pub use error::FinderError;
pub use facets::Facets;
pub use filter::{matches, FilterState, Mode};
pub use model::{Component, IngredientLine, Recipe};
pub use normalize::{normalize, parse_dataset};
pub use query::execute;
pub use render::{PlainTextRenderer, Renderer, View};
pub use session::Session;
pub use source::{load_catalog, DatasetSource, FileSource, HttpSource, InlineSource};

/// Open a session over a local dataset file
///
/// # Arguments
/// * `path` - Path to a `{ "recipes": [...] }` JSON file
/// * `address` - Initial filter address, e.g. `"tags=dessert&mode=and"`
pub async fn open_from_path(
    path: impl Into<std::path::PathBuf>,
    address: &str,
) -> Result<Session, FinderError> {
    RecipeFinder::builder()
        .path(path)
        .address(address)
        .build()
        .await
}

/// Open a session over a dataset served at `url`
pub async fn open_from_url(url: &str, address: &str) -> Result<Session, FinderError> {
    RecipeFinder::builder().url(url).address(address).build().await
}

/// One-shot search: normalize `json`, apply the filters in `address` and
/// return the matching recipes sorted by name
pub fn search(json: &str, address: &str) -> Result<Vec<Recipe>, FinderError> {
    let catalog = Catalog::from_json(json)?;
    let state = decode(address);
    Ok(execute(catalog.recipes(), &state)
        .into_iter()
        .cloned()
        .collect())
}
