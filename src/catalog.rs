use crate::error::FinderError;
use crate::facets::Facets;
use crate::model::Recipe;
use crate::normalize::parse_dataset;
use log::info;

/// A loaded dataset: normalized recipes plus the facets computed from them.
///
/// Read-only once built; sessions share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    facets: Facets,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let facets = Facets::extract(&recipes);
        info!(
            "Loaded {} recipes ({} tags, {} ingredient atoms)",
            recipes.len(),
            facets.tags.len(),
            facets.atoms.len()
        );
        Catalog { recipes, facets }
    }

    /// Parse and normalize a JSON dataset
    pub fn from_json(text: &str) -> Result<Self, FinderError> {
        Ok(Self::new(parse_dataset(text)?))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
