//! View-models for the browse screen.
//!
//! Rendering is a one-way function of state: the builders here turn a page of
//! recipes into plain data, and the [`html`] and [`text`] renderers turn that
//! data into output. Nothing in this module touches a rendering target.

use crate::model::Recipe;
use crate::paginate::page_window;
use crate::store::{RecipeId, RecipeStore};

pub mod html;
mod model;
pub mod text;

pub use model::{BrowseView, CardView, RecipeListView, NO_RESULTS_MESSAGE};

/// Builds the card for one recipe.
pub fn card_view(id: RecipeId, recipe: &Recipe, placeholder_image: &str) -> CardView {
    CardView {
        id,
        title: recipe.title.clone(),
        image: recipe.image_or(placeholder_image).to_string(),
        image_alt: recipe.title.clone(),
        category: recipe.category.clone(),
        dietary: recipe.dietary.label(),
        aria_label: format!("View details for {}", recipe.title),
    }
}

/// Builds the grid for `page` of the store's filtered subset.
///
/// An empty window becomes the explicit "no results" state.
pub fn list_view(store: &RecipeStore, page: usize, placeholder_image: &str) -> RecipeListView {
    let cards: Vec<CardView> = page_window(store.filtered(), page)
        .iter()
        .filter_map(|&id| store.get(id).map(|recipe| card_view(id, recipe, placeholder_image)))
        .collect();

    if cards.is_empty() {
        RecipeListView::Empty {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    } else {
        RecipeListView::Cards { cards }
    }
}
