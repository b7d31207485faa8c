use super::dietary::Dietary;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Image shown on cards when a recipe carries no image of its own.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "images/default-recipe.jpg";

/// A single dish entry of the loaded collection.
///
/// Recipes are immutable once loaded. The JSON shape accepts a few variants
/// for convenience:
/// - `kitchen` may be a single string or a list of strings
/// - `serves` may be a number or free text
/// - `ingredients` may be a flat list or a map of section name to list
///
/// Shapes that do not match are kept as [`Ingredients::Unavailable`] or
/// [`Instructions::Unavailable`] so a single odd record never fails rendering.
///
/// # Examples
///
/// ```
/// use recipe_browser::Recipe;
///
/// let recipe: Recipe = serde_json::from_str(r#"{
///     "title": "Pasta Primavera",
///     "kitchen": "Italian",
///     "type": "Main",
///     "dietary": { "vegetarian": true },
///     "serves": 4,
///     "ingredients": ["pasta", "peas"],
///     "instructions": ["Boil", "Toss"]
/// }"#)?;
///
/// assert_eq!(recipe.kitchen, vec!["Italian".to_string()]);
/// assert_eq!(recipe.dietary.label(), "Vegetarian");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub kitchen: Vec<String>,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default)]
    pub dietary: Dietary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves: Option<Serves>,
    #[serde(default)]
    pub ingredients: Ingredients,
    #[serde(default)]
    pub instructions: Instructions,
}

impl Recipe {
    /// Returns the recipe image, or `fallback` when none is set.
    ///
    /// An empty image string counts as absent.
    pub fn image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.image.as_deref() {
            Some(image) if !image.trim().is_empty() => image,
            _ => fallback,
        }
    }

    /// Kitchen labels joined for display, e.g. `Italian, French`.
    pub fn kitchen_text(&self) -> String {
        self.kitchen.join(", ")
    }

    /// Serving size for display.
    pub fn serves_text(&self) -> String {
        match &self.serves {
            Some(serves) => serves.to_string(),
            None => "Not specified".to_string(),
        }
    }

    pub fn has_kitchen(&self, kitchen: &str) -> bool {
        self.kitchen.iter().any(|k| k == kitchen)
    }
}

/// Serving-size descriptor, numeric or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Serves {
    Count(serde_json::Number),
    Text(String),
}

impl fmt::Display for Serves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Serves::Count(n) => write!(f, "{n}"),
            Serves::Text(s) => f.write_str(s),
        }
    }
}

/// Ingredient list of a recipe.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Ingredients {
    /// Flat ordered list.
    List(Vec<String>),
    /// Named sections in their original order.
    Sections(Vec<IngredientSection>),
    /// The source data had an unexpected shape.
    #[default]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSection {
    pub name: String,
    pub items: Vec<String>,
}

impl From<Value> for Ingredients {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => text_items(items)
                .map(Ingredients::List)
                .unwrap_or(Ingredients::Unavailable),
            Value::Object(map) => {
                let mut sections = Vec::with_capacity(map.len());
                for (name, items) in map {
                    let Value::Array(items) = items else {
                        return Ingredients::Unavailable;
                    };
                    let Some(items) = text_items(items) else {
                        return Ingredients::Unavailable;
                    };
                    sections.push(IngredientSection { name, items });
                }
                Ingredients::Sections(sections)
            }
            _ => Ingredients::Unavailable,
        }
    }
}

impl From<Ingredients> for Value {
    fn from(ingredients: Ingredients) -> Self {
        match ingredients {
            Ingredients::List(items) => Value::from(items),
            Ingredients::Sections(sections) => Value::Object(
                sections
                    .into_iter()
                    .map(|s| (s.name, Value::from(s.items)))
                    .collect(),
            ),
            Ingredients::Unavailable => Value::Null,
        }
    }
}

/// Ordered preparation steps of a recipe.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Instructions {
    Steps(Vec<String>),
    #[default]
    Unavailable,
}

impl From<Value> for Instructions {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => text_items(items)
                .map(Instructions::Steps)
                .unwrap_or(Instructions::Unavailable),
            _ => Instructions::Unavailable,
        }
    }
}

impl From<Instructions> for Value {
    fn from(instructions: Instructions) -> Self {
        match instructions {
            Instructions::Steps(steps) => Value::from(steps),
            Instructions::Unavailable => Value::Null,
        }
    }
}

/// Converts JSON scalars to display text. Nested arrays or objects make the
/// whole list unusable.
fn text_items(items: Vec<Value>) -> Option<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(kitchen) => vec![kitchen],
        OneOrMany::Many(kitchens) => kitchens,
    })
}
