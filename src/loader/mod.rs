//! Dataset loading.
//!
//! The recipe collection is a single JSON array of recipe records. It is read
//! once, validated, and handed to the [`RecipeStore`](crate::RecipeStore).
//! There is no streaming or partial load: either every record is usable or
//! the load fails as a whole.

use crate::model::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a recipe dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read dataset {path}: {source}")]
    IoError {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Recipe #{index} is invalid: {reason}")]
    InvalidRecipe { index: usize, reason: String },
}

/// Parses a dataset from JSON text.
///
/// # Errors
///
/// Returns `LoadError` if the text is not a JSON array of recipes or if a
/// recipe has an empty title or no kitchen label.
///
/// # Examples
///
/// ```
/// use recipe_browser::load_recipes_str;
///
/// let recipes = load_recipes_str(r#"[
///     { "title": "Soup", "kitchen": "Thai", "type": "Starter" }
/// ]"#)?;
/// assert_eq!(recipes.len(), 1);
/// # Ok::<(), recipe_browser::LoadError>(())
/// ```
pub fn load_recipes_str(json: &str) -> Result<Vec<Recipe>, LoadError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    for (index, recipe) in recipes.iter().enumerate() {
        validate(index, recipe)?;
    }
    tracing::debug!(count = recipes.len(), "parsed recipe dataset");
    Ok(recipes)
}

/// Reads and parses a dataset file.
///
/// # Errors
///
/// Returns `LoadError::IoError` if the file cannot be read, otherwise the
/// errors of [`load_recipes_str`].
pub fn load_recipes<P: AsRef<Utf8Path>>(path: P) -> Result<Vec<Recipe>, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let recipes = load_recipes_str(&json)?;
    tracing::info!(path = %path, count = recipes.len(), "loaded recipes");
    Ok(recipes)
}

fn validate(index: usize, recipe: &Recipe) -> Result<(), LoadError> {
    if recipe.title.trim().is_empty() {
        return Err(LoadError::InvalidRecipe {
            index,
            reason: "title is empty".to_string(),
        });
    }
    if recipe.kitchen.is_empty() {
        return Err(LoadError::InvalidRecipe {
            index,
            reason: format!("'{}' has no kitchen", recipe.title),
        });
    }
    Ok(())
}
