mod criteria;
mod dietary;
mod recipe;

pub(crate) use criteria::selection;
pub use criteria::FilterCriteria;
pub use dietary::{Dietary, DietaryOption, UnknownDietaryOption};
pub use recipe::{
    IngredientSection, Ingredients, Instructions, Recipe, Serves, DEFAULT_PLACEHOLDER_IMAGE,
};
