use crate::model::{DietaryOption, FilterCriteria, Recipe};
use crate::store::RecipeId;
use std::collections::BTreeSet;

mod model;

pub use model::{FilterControls, FilterOptions, SelectOption};

pub const ALL_KITCHENS: &str = "All Kitchens";
pub const ALL_DIETS: &str = "All Diets";
pub const ALL_TYPES: &str = "All Types";

/// Returns the ids of the recipes matching `criteria`, in dataset order.
pub fn filter_recipes(recipes: &[Recipe], criteria: &FilterCriteria) -> Vec<RecipeId> {
    if criteria.is_empty() {
        return (0..recipes.len()).collect();
    }

    recipes
        .iter()
        .enumerate()
        .filter(|(_, recipe)| criteria.matches(recipe))
        .map(|(id, _)| id)
        .collect()
}

/// Derives the selectable kitchen and type values from the dataset.
///
/// Multi-kitchen recipes contribute every label. Both lists are sorted and
/// deduplicated; the dietary list is the fixed enumeration.
pub fn derive_options(recipes: &[Recipe]) -> FilterOptions {
    let kitchens: BTreeSet<&str> = recipes
        .iter()
        .flat_map(|recipe| recipe.kitchen.iter().map(String::as_str))
        .collect();
    let categories: BTreeSet<&str> = recipes.iter().map(|r| r.category.as_str()).collect();

    FilterOptions {
        kitchens: kitchens.into_iter().map(String::from).collect(),
        categories: categories.into_iter().map(String::from).collect(),
        dietary: DietaryOption::ALL.to_vec(),
    }
}

/// Builds the selector entries for the current criteria, each list led by
/// its "all" entry.
pub fn filter_controls(options: &FilterOptions, criteria: &FilterCriteria) -> FilterControls {
    FilterControls {
        kitchen: select_options(ALL_KITCHENS, &options.kitchens, criteria.kitchen.as_deref()),
        dietary: select_options(
            ALL_DIETS,
            options.dietary.iter().map(DietaryOption::label),
            criteria.dietary.as_ref().map(DietaryOption::label),
        ),
        category: select_options(ALL_TYPES, &options.categories, criteria.category.as_deref()),
        search: criteria.search.clone(),
    }
}

fn select_options<I, S>(all_label: &str, values: I, selected: Option<&str>) -> Vec<SelectOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = vec![SelectOption::all(all_label, selected.is_none())];
    entries.extend(values.into_iter().map(|value| {
        let value = value.as_ref();
        SelectOption::value(value, selected == Some(value))
    }));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{recipe, recipe_with, BOTH, GLUTEN_FREE, VEGETARIAN};
    use crate::Dietary;

    fn dataset() -> Vec<Recipe> {
        vec![
            recipe_with("Margherita Pizza", &["Italian"], "Main", VEGETARIAN),
            recipe_with("Beef Tacos", &["Mexican"], "Main", Dietary::default()),
            recipe_with("Rice Pudding", &["Indian", "British"], "Dessert", BOTH),
            recipe_with("Grilled Fish", &["Greek"], "Main", GLUTEN_FREE),
            recipe_with("Pizza Bianca", &["Italian"], "Starter", VEGETARIAN),
        ]
    }

    #[test]
    fn test_no_criteria_returns_everything() {
        let recipes = dataset();
        let filtered = filter_recipes(&recipes, &FilterCriteria::default());
        assert_eq!(filtered, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_kitchen_exact_match() {
        let recipes = dataset();
        let criteria = FilterCriteria {
            kitchen: Some("British".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_recipes(&recipes, &criteria), vec![2]);

        let criteria = FilterCriteria {
            kitchen: Some("Brit".to_string()),
            ..Default::default()
        };
        assert!(filter_recipes(&recipes, &criteria).is_empty());
    }

    #[test]
    fn test_dietary_options() {
        let recipes = dataset();
        let by = |option| FilterCriteria {
            dietary: Some(option),
            ..Default::default()
        };

        assert_eq!(
            filter_recipes(&recipes, &by(DietaryOption::Vegetarian)),
            vec![0, 2, 4]
        );
        assert_eq!(
            filter_recipes(&recipes, &by(DietaryOption::GlutenFree)),
            vec![2, 3]
        );
        assert_eq!(
            filter_recipes(&recipes, &by(DietaryOption::VegetarianAndGlutenFree)),
            vec![2]
        );
    }

    #[test]
    fn test_type_and_search_combined() {
        let recipes = dataset();
        let criteria = FilterCriteria {
            category: Some("Main".to_string()),
            search: "PIZZA".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_recipes(&recipes, &criteria), vec![0]);
    }

    #[test]
    fn test_all_predicates_are_anded() {
        let recipes = dataset();
        let criteria = FilterCriteria {
            kitchen: Some("Italian".to_string()),
            dietary: Some(DietaryOption::GlutenFree),
            category: None,
            search: String::new(),
        };
        assert!(filter_recipes(&recipes, &criteria).is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let criteria = FilterCriteria {
            search: "anything".to_string(),
            ..Default::default()
        };
        assert!(filter_recipes(&[], &criteria).is_empty());
    }

    #[test]
    fn test_derive_options_sorted_and_flattened() {
        let options = derive_options(&dataset());
        assert_eq!(
            options.kitchens,
            vec!["British", "Greek", "Indian", "Italian", "Mexican"]
        );
        assert_eq!(options.categories, vec!["Dessert", "Main", "Starter"]);
        assert_eq!(options.dietary.len(), 3);
    }

    #[test]
    fn test_derive_options_empty_dataset() {
        let options = derive_options(&[]);
        assert!(options.kitchens.is_empty());
        assert!(options.categories.is_empty());
        assert_eq!(options.dietary, DietaryOption::ALL.to_vec());
    }

    #[test]
    fn test_filter_controls_lead_with_all_entry() {
        let options = derive_options(&[recipe("Soup")]);
        let criteria = FilterCriteria {
            kitchen: Some("Italian".to_string()),
            ..Default::default()
        };
        let controls = filter_controls(&options, &criteria);

        assert_eq!(controls.kitchen[0].label, ALL_KITCHENS);
        assert_eq!(controls.kitchen[0].value, "");
        assert!(!controls.kitchen[0].selected);
        assert!(controls.kitchen[1].selected);

        assert_eq!(controls.dietary[0].label, ALL_DIETS);
        assert!(controls.dietary[0].selected);
        assert_eq!(controls.dietary[3].value, "Vegetarian & Gluten-Free");

        assert_eq!(controls.category[0].label, ALL_TYPES);
        assert!(controls.category[0].selected);
    }
}
