use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Independent boolean dietary facets of a recipe. Absent facets are false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dietary {
    pub vegetarian: bool,
    #[serde(rename = "glutenFree", alias = "gluten_free")]
    pub gluten_free: bool,
}

impl Dietary {
    /// Joins the true facets with `" & "`, or returns `None` when no facet is
    /// set.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_browser::Dietary;
    ///
    /// let both = Dietary { vegetarian: true, gluten_free: true };
    /// assert_eq!(both.label(), "Vegetarian & Gluten-Free");
    /// assert_eq!(Dietary::default().label(), "None");
    /// ```
    pub fn label(&self) -> String {
        let mut labels = Vec::new();
        if self.vegetarian {
            labels.push(DietaryOption::Vegetarian.label());
        }
        if self.gluten_free {
            labels.push(DietaryOption::GlutenFree.label());
        }
        if labels.is_empty() {
            return "None".to_string();
        }
        labels.join(" & ")
    }
}

/// The closed set of dietary filter selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryOption {
    #[serde(rename = "Vegetarian")]
    Vegetarian,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Vegetarian & Gluten-Free")]
    VegetarianAndGlutenFree,
}

impl DietaryOption {
    pub const ALL: [DietaryOption; 3] = [
        DietaryOption::Vegetarian,
        DietaryOption::GlutenFree,
        DietaryOption::VegetarianAndGlutenFree,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietaryOption::Vegetarian => "Vegetarian",
            DietaryOption::GlutenFree => "Gluten-Free",
            DietaryOption::VegetarianAndGlutenFree => "Vegetarian & Gluten-Free",
        }
    }

    /// Whether `dietary` satisfies this selection.
    pub fn matches(&self, dietary: &Dietary) -> bool {
        match self {
            DietaryOption::Vegetarian => dietary.vegetarian,
            DietaryOption::GlutenFree => dietary.gluten_free,
            DietaryOption::VegetarianAndGlutenFree => dietary.vegetarian && dietary.gluten_free,
        }
    }

    /// Parses a selector value. Unknown values mean "no dietary filter".
    pub fn parse_selection(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for DietaryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dietary option: {0}")]
pub struct UnknownDietaryOption(pub String);

impl FromStr for DietaryOption {
    type Err = UnknownDietaryOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryOption::ALL
            .into_iter()
            .find(|option| option.label() == s.trim())
            .ok_or_else(|| UnknownDietaryOption(s.to_string()))
    }
}
