use crate::collation::locale_cmp;
use crate::model::Recipe;
use serde::Serialize;
use std::collections::HashSet;

/// All filterable values present in a dataset.
///
/// Built from the full dataset, never from a filtered subset, so the options
/// offered to the user do not change as the selection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub tags: Vec<String>,
    pub atoms: Vec<String>,
}

impl Facets {
    pub fn extract(recipes: &[Recipe]) -> Self {
        Facets {
            tags: unique_sorted(recipes.iter().flat_map(|r| &r.tags)),
            atoms: unique_sorted(recipes.iter().flat_map(|r| &r.ingredient_atoms)),
        }
    }

    /// Atoms containing `filter` (trimmed, case-insensitive), in facet order.
    /// An empty filter returns every atom.
    pub fn atoms_matching(&self, filter: &str) -> Vec<&str> {
        let needle = filter.trim().to_lowercase();
        self.atoms
            .iter()
            .filter(|atom| atom.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = values
        .filter(|&value| seen.insert(value.as_str()))
        .cloned()
        .collect();
    unique.sort_by(|a, b| locale_cmp(a, b));
    unique
}
