//! The single-recipe detail surface.
//!
//! [`DetailState`] is a two-state machine: closed, or open on one recipe with
//! a [`FocusTrap`] that lives exactly as long as the open state.

use crate::model::{Ingredients, Instructions, Recipe};
use crate::store::RecipeId;

mod model;

pub use model::{
    DetailControl, DetailView, IngredientsBlock, InstructionsBlock, SectionBlock,
    INGREDIENTS_UNAVAILABLE, INSTRUCTIONS_UNAVAILABLE,
};

/// Builds the detail view-model for a recipe.
pub fn detail_view(recipe: &Recipe) -> DetailView {
    DetailView {
        title: recipe.title.clone(),
        kitchen: recipe.kitchen_text(),
        category: recipe.category.clone(),
        dietary: recipe.dietary.label(),
        serves: recipe.serves_text(),
        ingredients: ingredients_block(&recipe.ingredients),
        instructions: instructions_block(&recipe.instructions),
    }
}

pub fn ingredients_block(ingredients: &Ingredients) -> IngredientsBlock {
    match ingredients {
        Ingredients::List(items) => IngredientsBlock::List {
            items: items.clone(),
        },
        Ingredients::Sections(sections) => IngredientsBlock::Sections {
            sections: sections
                .iter()
                .map(|section| SectionBlock {
                    heading: capitalize(&section.name),
                    items: section.items.clone(),
                })
                .collect(),
        },
        Ingredients::Unavailable => IngredientsBlock::Unavailable {
            message: INGREDIENTS_UNAVAILABLE.to_string(),
        },
    }
}

pub fn instructions_block(instructions: &Instructions) -> InstructionsBlock {
    match instructions {
        Instructions::Steps(steps) => InstructionsBlock::Steps {
            steps: steps.clone(),
        },
        Instructions::Unavailable => InstructionsBlock::Unavailable {
            message: INSTRUCTIONS_UNAVAILABLE.to_string(),
        },
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cyclic keyboard focus over the detail controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    controls: Vec<DetailControl>,
    focused: usize,
}

impl FocusTrap {
    /// Creates a trap focused on the first control, or `None` when there is
    /// nothing to focus.
    pub fn new(controls: Vec<DetailControl>) -> Option<Self> {
        if controls.is_empty() {
            return None;
        }
        Some(FocusTrap {
            controls,
            focused: 0,
        })
    }

    pub fn focused(&self) -> DetailControl {
        self.controls[self.focused]
    }

    /// Moves forward; the last control wraps to the first.
    pub fn tab(&mut self) -> DetailControl {
        self.focused = (self.focused + 1) % self.controls.len();
        self.focused()
    }

    /// Moves backward; the first control wraps to the last.
    pub fn shift_tab(&mut self) -> DetailControl {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.controls.len() - 1);
        self.focused()
    }

    /// Focuses `control` if it belongs to the trap.
    pub fn focus(&mut self, control: DetailControl) -> bool {
        match self.controls.iter().position(|&c| c == control) {
            Some(index) => {
                self.focused = index;
                true
            }
            None => false,
        }
    }
}

/// State of the open detail surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDetail {
    pub recipe: RecipeId,
    pub view: DetailView,
    pub focus: FocusTrap,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Open(Box<OpenDetail>),
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        matches!(self, DetailState::Open(_))
    }

    pub fn current(&self) -> Option<&OpenDetail> {
        match self {
            DetailState::Open(open) => Some(open.as_ref()),
            DetailState::Closed => None,
        }
    }

    pub(crate) fn current_mut(&mut self) -> Option<&mut OpenDetail> {
        match self {
            DetailState::Open(open) => Some(open.as_mut()),
            DetailState::Closed => None,
        }
    }

    /// Opens (or replaces) the surface on `recipe`. Returns whether the
    /// surface was closed before.
    pub fn open(&mut self, id: RecipeId, recipe: &Recipe) -> bool {
        let was_closed = !self.is_open();
        let focus = FocusTrap::new(DetailControl::TAB_ORDER.to_vec());
        *self = match focus {
            Some(focus) => DetailState::Open(Box::new(OpenDetail {
                recipe: id,
                view: detail_view(recipe),
                focus,
            })),
            None => DetailState::Closed,
        };
        was_closed
    }

    /// Closes the surface. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = DetailState::Closed;
        was_open
    }
}
