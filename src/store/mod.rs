use crate::model::Recipe;

/// Index of a recipe in the loaded dataset.
pub type RecipeId = usize;

/// Holds the full dataset and the currently filtered subset.
///
/// The dataset never changes after construction. The filtered subset is a
/// list of dataset indices in dataset order, so it is always an
/// order-preserving subset.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    filtered: Vec<RecipeId>,
}

impl RecipeStore {
    /// Creates a store with every recipe visible.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let filtered = (0..recipes.len()).collect();
        RecipeStore { recipes, filtered }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Ids of the recipes passing the current filter, in dataset order.
    pub fn filtered(&self) -> &[RecipeId] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub(crate) fn set_filtered(&mut self, filtered: Vec<RecipeId>) {
        debug_assert!(filtered.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(filtered.iter().all(|&id| id < self.recipes.len()));
        self.filtered = filtered;
    }
}
