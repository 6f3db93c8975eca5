use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single recipe record from the dataset.
///
/// Instances are produced by [`crate::normalize`], which guarantees that every
/// collection field is present (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque identifier, kept exactly as it appears in the source data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Display name, also the sort key for results
    #[serde(default)]
    pub name: String,
    /// Servings as given by the source (number or free text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Composite ingredient identifiers, e.g. "chicken-breast"
    #[serde(default, rename = "ingredientTags")]
    pub ingredient_tags: Vec<String>,
    /// Normalized ingredient tokens, e.g. "chicken"
    #[serde(default, rename = "ingredientAtoms")]
    pub ingredient_atoms: Vec<String>,
    #[serde(default)]
    pub components: Vec<Component>,
    /// Flat ingredient list used when no component provides one
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
    /// Flat instruction list used when no component provides one
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// A named part of a recipe, e.g. "Sauce" or "Dough"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// One line of an ingredient list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Composite identifier matching one of the recipe's `ingredientTags`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

/// A headed block of ingredient lines or instruction steps
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a, T> {
    pub heading: &'a str,
    pub lines: &'a [T],
}

const INGREDIENTS_HEADING: &str = "Ingredients";
const INSTRUCTIONS_HEADING: &str = "Instructions";

impl IngredientLine {
    /// Text shown for this line: the non-empty parts among amount, item and
    /// notes, plus "(optional)" when flagged, separated by single spaces.
    pub fn display(&self) -> String {
        let parts = [
            self.amount.as_deref(),
            self.item.as_deref(),
            self.notes.as_deref(),
            self.optional.then_some("(optional)"),
        ];

        parts
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_atom(&self, atom: &str) -> bool {
        self.ingredient_atoms.iter().any(|a| a == atom)
    }

    /// Servings rendered for display; strings are shown without quotes and
    /// a missing value is shown as an empty string.
    pub fn servings_label(&self) -> String {
        match &self.servings {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Ingredient blocks to display, one per component that has ingredients.
    ///
    /// Falls back to the top-level `ingredients` list when no component
    /// contributed a block.
    pub fn ingredient_sections(&self) -> Vec<Section<'_, IngredientLine>> {
        let sections: Vec<_> = self
            .components
            .iter()
            .filter(|c| !c.ingredients.is_empty())
            .map(|c| Section {
                heading: heading_or(&c.component_name, INGREDIENTS_HEADING),
                lines: c.ingredients.as_slice(),
            })
            .collect();

        if sections.is_empty() && !self.ingredients.is_empty() {
            return vec![Section {
                heading: INGREDIENTS_HEADING,
                lines: self.ingredients.as_slice(),
            }];
        }
        sections
    }

    /// Instruction blocks to display, with the same fallback rule as
    /// [`Recipe::ingredient_sections`].
    pub fn instruction_sections(&self) -> Vec<Section<'_, String>> {
        let sections: Vec<_> = self
            .components
            .iter()
            .filter(|c| !c.instructions.is_empty())
            .map(|c| Section {
                heading: heading_or(&c.component_name, INSTRUCTIONS_HEADING),
                lines: c.instructions.as_slice(),
            })
            .collect();

        if sections.is_empty() && !self.instructions.is_empty() {
            return vec![Section {
                heading: INSTRUCTIONS_HEADING,
                lines: self.instructions.as_slice(),
            }];
        }
        sections
    }
}

fn heading_or<'a>(name: &'a str, default: &'a str) -> &'a str {
    if name.is_empty() {
        default
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(amount: &str, item: &str, notes: &str, optional: bool) -> IngredientLine {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        IngredientLine {
            amount: opt(amount),
            item: opt(item),
            notes: opt(notes),
            key: None,
            optional,
        }
    }

    #[test]
    fn test_display_joins_non_empty_parts() {
        assert_eq!(
            line("500 g", "chicken breast", "cubed", false).display(),
            "500 g chicken breast cubed"
        );
        assert_eq!(line("", "salt", "", false).display(), "salt");
    }

    #[test]
    fn test_display_marks_optional() {
        assert_eq!(
            line("1 tbsp", "dill", "", true).display(),
            "1 tbsp dill (optional)"
        );
    }

    #[test]
    fn test_display_skips_empty_strings() {
        let l = IngredientLine {
            amount: Some(String::new()),
            item: Some("rice".to_string()),
            notes: Some(String::new()),
            key: None,
            optional: false,
        };
        assert_eq!(l.display(), "rice");
    }

    #[test]
    fn test_servings_label() {
        let mut recipe = Recipe::default();
        assert_eq!(recipe.servings_label(), "");

        recipe.servings = Some(Value::from(4));
        assert_eq!(recipe.servings_label(), "4");

        recipe.servings = Some(Value::from("4-6"));
        assert_eq!(recipe.servings_label(), "4-6");
    }

    #[test]
    fn test_sections_come_from_components() {
        let recipe = Recipe {
            components: vec![
                Component {
                    component_name: "Ingredients".to_string(),
                    ingredients: vec![line("", "rice", "", false)],
                    instructions: vec![],
                },
                Component {
                    component_name: String::new(),
                    ingredients: vec![],
                    instructions: vec!["Bake.".to_string()],
                },
            ],
            ingredients: vec![line("", "ignored", "", false)],
            instructions: vec!["Ignored.".to_string()],
            ..Default::default()
        };

        let ingredients = recipe.ingredient_sections();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].heading, "Ingredients");
        assert_eq!(ingredients[0].lines[0].display(), "rice");

        let instructions = recipe.instruction_sections();
        assert_eq!(instructions.len(), 1);
        assert_eq!(instructions[0].heading, "Instructions");
        assert_eq!(instructions[0].lines, ["Bake.".to_string()]);
    }

    #[test]
    fn test_sections_fall_back_to_top_level() {
        let recipe = Recipe {
            components: vec![Component {
                component_name: "Sauce".to_string(),
                ..Default::default()
            }],
            ingredients: vec![line("2", "eggs", "", false)],
            instructions: vec!["Whisk.".to_string()],
            ..Default::default()
        };

        let ingredients = recipe.ingredient_sections();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].heading, "Ingredients");

        let instructions = recipe.instruction_sections();
        assert_eq!(instructions[0].lines, ["Whisk.".to_string()]);
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{
            "id": 1,
            "name": "Casserole",
            "servings": 4,
            "tags": ["savory"],
            "ingredientTags": ["chicken-breast"],
            "ingredientAtoms": ["breast", "chicken"],
            "components": [{
                "component_name": "Ingredients",
                "ingredients": [{"amount": "500 g", "item": "chicken breast", "key": "chicken-breast"}]
            }]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.ingredient_tags, vec!["chicken-breast"]);
        assert!(recipe.has_atom("chicken"));
        assert!(recipe.has_tag("savory"));
        assert_eq!(
            recipe.components[0].ingredients[0].key.as_deref(),
            Some("chicken-breast")
        );
        assert!(recipe.instructions.is_empty());
    }
}
