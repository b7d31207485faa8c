use crate::filter::FilterControls;
use crate::paginate::PageControl;
use crate::store::RecipeId;
use serde::Serialize;

pub const NO_RESULTS_MESSAGE: &str = "No recipes found matching your criteria.";

/// Everything a card in the grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: RecipeId,
    pub title: String,
    pub image: String,
    /// Image alternative text, the recipe title
    pub image_alt: String,
    pub category: String,
    pub dietary: String,
    pub aria_label: String,
}

/// The recipe grid for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecipeListView {
    Cards { cards: Vec<CardView> },
    Empty { message: String },
}

impl RecipeListView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            RecipeListView::Cards { cards } => cards,
            RecipeListView::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RecipeListView::Empty { .. })
    }
}

/// The full browse screen derived from application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseView {
    pub filters: FilterControls,
    pub list: RecipeListView,
    pub pagination: Vec<PageControl>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}
