//! Fixtures shared by unit tests.

use crate::model::{Dietary, Ingredients, Instructions, Recipe, Serves};

pub(crate) fn recipe(title: &str) -> Recipe {
    recipe_with(title, &["Italian"], "Main", Dietary::default())
}

pub(crate) fn recipe_with(
    title: &str,
    kitchens: &[&str],
    category: &str,
    dietary: Dietary,
) -> Recipe {
    Recipe {
        title: title.to_string(),
        image: None,
        kitchen: kitchens.iter().map(|k| k.to_string()).collect(),
        category: category.to_string(),
        dietary,
        serves: Some(Serves::Count(serde_json::Number::from(4u32))),
        ingredients: Ingredients::List(vec!["salt".to_string(), "pepper".to_string()]),
        instructions: Instructions::Steps(vec!["Season".to_string(), "Serve".to_string()]),
    }
}

pub(crate) fn numbered(count: usize) -> Vec<Recipe> {
    (1..=count).map(|n| recipe(&format!("Recipe {n}"))).collect()
}

pub(crate) const VEGETARIAN: Dietary = Dietary {
    vegetarian: true,
    gluten_free: false,
};

pub(crate) const GLUTEN_FREE: Dietary = Dietary {
    vegetarian: false,
    gluten_free: true,
};

pub(crate) const BOTH: Dietary = Dietary {
    vegetarian: true,
    gluten_free: true,
};
