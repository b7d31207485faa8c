//! Browse a static recipe collection.
//!
//! The collection is loaded once from a JSON dataset. It can then be filtered
//! by kitchen, dietary restriction, type and title search, paged six cards
//! at a time, opened in a detail view and exported to PDF.
//!
//! ```
//! use recipe_browser::browser::{AppState, Event};
//! use recipe_browser::load_recipes_str;
//!
//! let recipes = load_recipes_str(r#"[
//!     { "title": "Dal", "kitchen": "Indian", "type": "Main",
//!       "dietary": { "vegetarian": true, "glutenFree": true } },
//!     { "title": "Ramen", "kitchen": ["Japanese"], "type": "Main" }
//! ]"#)?;
//!
//! let mut state = AppState::new(recipes);
//! state.dispatch(Event::SetSearch("DAL".to_string()));
//! assert_eq!(state.browse_view().list.cards()[0].title, "Dal");
//! # Ok::<(), recipe_browser::LoadError>(())
//! ```

pub mod browser;
pub mod config;
pub mod detail;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod paginate;
pub mod store;
pub mod view;

mod ffi;
#[cfg(test)]
mod testing;

pub use browser::{AppState, Browser, Effect, Event};
pub use config::BrowserConfig;
pub use export::{sanitize_file_name, ExportError, Exporter};
pub use filter::{derive_options, filter_recipes};
pub use loader::{load_recipes, load_recipes_str, LoadError};
pub use model::*;
pub use store::{RecipeId, RecipeStore};

uniffi::setup_scaffolding!();
