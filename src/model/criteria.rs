use super::dietary::DietaryOption;
use super::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// The live combination of filter selections.
///
/// Every field defaults to "no filter on this facet".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub kitchen: Option<String>,
    pub dietary: Option<DietaryOption>,
    pub category: Option<String>,
    pub search: String,
}

impl FilterCriteria {
    /// True when no facet restricts the result.
    pub fn is_empty(&self) -> bool {
        self.kitchen.is_none()
            && self.dietary.is_none()
            && self.category.is_none()
            && self.search.is_empty()
    }

    /// A recipe passes iff every active predicate holds.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_kitchen(recipe)
            && self.matches_dietary(recipe)
            && self.matches_category(recipe)
            && self.matches_search(recipe)
    }

    fn matches_kitchen(&self, recipe: &Recipe) -> bool {
        self.kitchen
            .as_deref()
            .map_or(true, |kitchen| recipe.has_kitchen(kitchen))
    }

    fn matches_dietary(&self, recipe: &Recipe) -> bool {
        self.dietary
            .map_or(true, |option| option.matches(&recipe.dietary))
    }

    fn matches_category(&self, recipe: &Recipe) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| recipe.category == category)
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        if self.search.is_empty() {
            return true;
        }
        recipe
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

/// Treats an empty selector value as "all".
pub(crate) fn selection(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
