//! Dataset normalization.
//!
//! The raw dataset is a JSON document shaped `{ "recipes": [ {...}, ... ] }`.
//! Normalization runs once at load time and produces fully populated
//! [`Recipe`] values: every collection field is present, possibly empty, so
//! nothing downstream has to check for absence again.
//!
//! Only the overall shape is fatal. A field of the wrong type inside an
//! otherwise valid record degrades to empty and is logged.

use crate::error::FinderError;
use crate::model::{Component, IngredientLine, Recipe};
use log::{debug, warn};
use serde_json::{Map, Value};

/// Parse JSON text and normalize it into a list of recipes
pub fn parse_dataset(text: &str) -> Result<Vec<Recipe>, FinderError> {
    let raw: Value = serde_json::from_str(text)?;
    normalize(raw)
}

/// Normalize an already parsed dataset.
///
/// Fails with [`FinderError::InvalidDataset`] when the root is not an object
/// with a `recipes` array, or when an element of that array is not an object.
pub fn normalize(raw: Value) -> Result<Vec<Recipe>, FinderError> {
    let records = match raw {
        Value::Object(mut root) => match root.remove("recipes") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(FinderError::InvalidDataset(
                    "expected { recipes: [...] }".to_string(),
                ))
            }
        },
        _ => {
            return Err(FinderError::InvalidDataset(
                "dataset root must be an object".to_string(),
            ))
        }
    };

    let recipes = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record {
            Value::Object(fields) => Ok(normalize_record(index, &fields)),
            other => Err(FinderError::InvalidDataset(format!(
                "recipe #{} is not an object: {}",
                index,
                type_name(&other)
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Normalized {} recipes", recipes.len());
    Ok(recipes)
}

fn normalize_record(index: usize, fields: &Map<String, Value>) -> Recipe {
    let ctx = RecordContext { index };

    Recipe {
        id: present(fields.get("id")),
        name: ctx.text(fields, "name").unwrap_or_default(),
        servings: present(fields.get("servings")),
        tags: ctx.string_list(fields, "tags"),
        ingredient_tags: ctx.string_list(fields, "ingredientTags"),
        ingredient_atoms: ctx.string_list(fields, "ingredientAtoms"),
        components: ctx.components(fields),
        ingredients: ctx.ingredient_lines(fields, "ingredients"),
        instructions: ctx.string_list(fields, "instructions"),
    }
}

struct RecordContext {
    index: usize,
}

impl RecordContext {
    fn text(&self, fields: &Map<String, Value>, key: &str) -> Option<String> {
        match fields.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Null => None,
            other => {
                self.degraded(key, other);
                None
            }
        }
    }

    fn array<'a>(&self, fields: &'a Map<String, Value>, key: &str) -> &'a [Value] {
        match fields.get(key) {
            Some(Value::Array(items)) => items.as_slice(),
            None | Some(Value::Null) => &[],
            Some(other) => {
                self.degraded(key, other);
                &[]
            }
        }
    }

    fn string_list(&self, fields: &Map<String, Value>, key: &str) -> Vec<String> {
        self.array(fields, key)
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect()
    }

    fn ingredient_lines(&self, fields: &Map<String, Value>, key: &str) -> Vec<IngredientLine> {
        self.array(fields, key)
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(IngredientLine {
                    item: Some(s.clone()),
                    ..Default::default()
                }),
                Value::Object(line) => Some(IngredientLine {
                    amount: self.text(line, "amount"),
                    item: self.text(line, "item"),
                    notes: self.text(line, "notes"),
                    key: self.text(line, "key"),
                    optional: line
                        .get("optional")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                }),
                _ => None,
            })
            .collect()
    }

    fn components(&self, fields: &Map<String, Value>) -> Vec<Component> {
        self.array(fields, "components")
            .iter()
            .filter_map(Value::as_object)
            .map(|component| Component {
                component_name: self.text(component, "component_name").unwrap_or_default(),
                ingredients: self.ingredient_lines(component, "ingredients"),
                instructions: self.string_list(component, "instructions"),
            })
            .collect()
    }

    fn degraded(&self, key: &str, value: &Value) {
        warn!(
            "recipe #{}: field '{}' has unexpected type {}, treating as empty",
            self.index,
            key,
            type_name(value)
        );
    }
}

fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
