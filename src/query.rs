use crate::collation::locale_cmp;
use crate::filter::{matches, FilterState};
use crate::model::Recipe;

/// Recipes matching `state`, sorted by name.
///
/// The sort is stable, so recipes with equal names keep their dataset order.
/// Returns an empty list when nothing matches.
pub fn execute<'a>(recipes: &'a [Recipe], state: &FilterState) -> Vec<&'a Recipe> {
    let mut results: Vec<&Recipe> = recipes.iter().filter(|r| matches(r, state)).collect();
    results.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    results
}
