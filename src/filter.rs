//! Filter state and the predicate that evaluates one recipe against it.

use crate::model::Recipe;
use std::collections::BTreeSet;
use std::fmt;

/// How selected ingredient atoms combine. Tags always combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every selected atom must be present
    #[default]
    And,
    /// At least one selected atom must be present
    Or,
    /// A token read from an address that is neither `and` nor `or`.
    /// Kept verbatim so it survives re-encoding; filters like [`Mode::And`].
    Unrecognized(String),
}

impl Mode {
    /// Parse an address token; never fails
    pub fn parse(token: &str) -> Self {
        match token {
            "" | "and" => Mode::And,
            "or" => Mode::Or,
            other => Mode::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mode::And => "and",
            Mode::Or => "or",
            Mode::Unrecognized(token) => token,
        }
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Mode::Or)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current search criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, compared trimmed and case-insensitively
    pub query: String,
    /// Required tags; a recipe must carry all of them
    pub tags: BTreeSet<String>,
    /// Selected ingredient atoms, combined according to `mode`
    pub atoms: BTreeSet<String>,
    pub mode: Mode,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion is active, i.e. every recipe matches
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty() && self.tags.is_empty() && self.atoms.is_empty()
    }
}

/// Whether `recipe` satisfies every active criterion of `state`
pub fn matches(recipe: &Recipe, state: &FilterState) -> bool {
    let query = state.query.trim().to_lowercase();
    if !query.is_empty() && !haystack(recipe).contains(&query) {
        return false;
    }

    if !state.tags.iter().all(|tag| recipe.has_tag(tag)) {
        return false;
    }

    if state.atoms.is_empty() {
        return true;
    }
    if state.mode.is_or() {
        state.atoms.iter().any(|atom| recipe.has_atom(atom))
    } else {
        state.atoms.iter().all(|atom| recipe.has_atom(atom))
    }
}

/// Name, tags, ingredient tags and atoms, space-joined and lower-cased
fn haystack(recipe: &Recipe) -> String {
    std::iter::once(&recipe.name)
        .chain(&recipe.tags)
        .chain(&recipe.ingredient_tags)
        .chain(&recipe.ingredient_atoms)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, tags: &[&str], atoms: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            ingredient_atoms: atoms.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_state_matches_everything() {
        let state = FilterState::new();
        assert!(state.is_unconstrained());
        assert!(matches(&recipe("Anything", &[], &[]), &state));
        assert!(matches(&Recipe::default(), &state));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let stew = recipe("Beef Stew", &["savory"], &["beef"]);
        let state = FilterState {
            query: "  STEW ".to_string(),
            ..Default::default()
        };
        assert!(matches(&stew, &state));

        let state = FilterState {
            query: "sav".to_string(),
            ..Default::default()
        };
        assert!(matches(&stew, &state));

        let state = FilterState {
            query: "pie".to_string(),
            ..Default::default()
        };
        assert!(!matches(&stew, &state));
    }

    #[test]
    fn test_query_searches_ingredient_tags() {
        let mut casserole = recipe("Casserole", &[], &["chicken"]);
        casserole.ingredient_tags = vec!["chicken-breast".to_string()];

        let state = FilterState {
            query: "chicken-b".to_string(),
            ..Default::default()
        };
        assert!(matches(&casserole, &state));
    }

    #[test]
    fn test_whitespace_query_is_inactive() {
        let state = FilterState {
            query: "   ".to_string(),
            ..Default::default()
        };
        assert!(state.is_unconstrained());
        assert!(matches(&recipe("Toast", &[], &[]), &state));
    }

    #[test]
    fn test_tags_always_and() {
        let pie = recipe("Apple Pie", &["dessert", "baked"], &["apple"]);
        let state = FilterState {
            tags: set(&["dessert", "baked"]),
            mode: Mode::Or,
            ..Default::default()
        };
        assert!(matches(&pie, &state));

        let state = FilterState {
            tags: set(&["dessert", "savory"]),
            mode: Mode::Or,
            ..Default::default()
        };
        assert!(!matches(&pie, &state));
    }

    #[test]
    fn test_atoms_and_requires_superset() {
        let pie = recipe("Apple Pie", &[], &["apple", "butter", "flour"]);
        let mut state = FilterState {
            atoms: set(&["apple", "butter"]),
            ..Default::default()
        };
        assert!(matches(&pie, &state));

        state.atoms.insert("beef".to_string());
        assert!(!matches(&pie, &state));
    }

    #[test]
    fn test_atoms_or_requires_intersection() {
        let pie = recipe("Apple Pie", &[], &["apple", "butter"]);
        let state = FilterState {
            atoms: set(&["beef", "apple"]),
            mode: Mode::Or,
            ..Default::default()
        };
        assert!(matches(&pie, &state));

        let state = FilterState {
            atoms: set(&["beef", "carrot"]),
            mode: Mode::Or,
            ..Default::default()
        };
        assert!(!matches(&pie, &state));
    }

    #[test]
    fn test_unrecognized_mode_behaves_like_and() {
        let pie = recipe("Apple Pie", &[], &["apple"]);
        let state = FilterState {
            atoms: set(&["apple", "beef"]),
            mode: Mode::Unrecognized("xor".to_string()),
            ..Default::default()
        };
        assert!(!matches(&pie, &state));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("and"), Mode::And);
        assert_eq!(Mode::parse(""), Mode::And);
        assert_eq!(Mode::parse("or"), Mode::Or);
        assert_eq!(Mode::parse("OR"), Mode::Unrecognized("OR".to_string()));
        assert_eq!(Mode::Unrecognized("OR".to_string()).to_string(), "OR");
    }
}
