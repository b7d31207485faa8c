use crate::model::DietaryOption;
use serde::Serialize;

/// Selectable values offered by the filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterOptions {
    /// Distinct kitchen labels, sorted
    pub kitchens: Vec<String>,
    /// Distinct type labels, sorted
    pub categories: Vec<String>,
    /// Fixed dietary selections
    pub dietary: Vec<DietaryOption>,
}

/// One entry of a selector control.
///
/// An empty `value` is the "all" entry that disables the facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub(crate) fn all(label: &str, selected: bool) -> Self {
        SelectOption {
            value: String::new(),
            label: label.to_string(),
            selected,
        }
    }

    pub(crate) fn value(value: &str, selected: bool) -> Self {
        SelectOption {
            value: value.to_string(),
            label: value.to_string(),
            selected,
        }
    }
}

/// The four filter controls as they should be presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControls {
    pub kitchen: Vec<SelectOption>,
    pub dietary: Vec<SelectOption>,
    pub category: Vec<SelectOption>,
    pub search: String,
}
