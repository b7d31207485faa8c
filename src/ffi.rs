//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! A host drives one [`FfiRecipeBrowser`] per screen: it forwards user input
//! as method calls, carries out the returned [`FfiEffect`]s, and re-reads the
//! page and detail records to render.

use crate::browser::{AppState, Effect, Event, Key};
use crate::detail::{DetailControl, DetailView, IngredientsBlock, InstructionsBlock};
use crate::export::{ExportError, Exporter};
use crate::filter::{FilterControls, SelectOption};
use crate::loader::{load_recipes, load_recipes_str, LoadError};
use crate::model::{Dietary, DietaryOption};
use crate::paginate::{PageControl, PageControlKind, PageNavigation};
use crate::view::{BrowseView, CardView, RecipeListView};
use camino::Utf8Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum BrowserError {
    #[error("Load error: {message}")]
    LoadError { message: String },

    #[error("Export unavailable: {message}")]
    ExportUnavailable { message: String },

    #[error("Export error: {message}")]
    ExportError { message: String },

    #[error("Recipe not found: {message}")]
    NotFound { message: String },
}

impl From<LoadError> for BrowserError {
    fn from(e: LoadError) -> Self {
        BrowserError::LoadError {
            message: e.to_string(),
        }
    }
}

impl From<ExportError> for BrowserError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::BackendUnavailable => BrowserError::ExportUnavailable {
                message: crate::browser::EXPORT_UNAVAILABLE_MESSAGE.to_string(),
            },
            e => BrowserError::ExportError {
                message: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiKey {
    Enter,
    Escape,
    Tab,
    ShiftTab,
    Other,
}

impl From<FfiKey> for Key {
    fn from(key: FfiKey) -> Self {
        match key {
            FfiKey::Enter => Key::Enter,
            FfiKey::Escape => Key::Escape,
            FfiKey::Tab => Key::Tab,
            FfiKey::ShiftTab => Key::ShiftTab,
            FfiKey::Other => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiDetailControl {
    Close,
    Print,
    Export,
}

impl From<FfiDetailControl> for DetailControl {
    fn from(control: FfiDetailControl) -> Self {
        match control {
            FfiDetailControl::Close => DetailControl::Close,
            FfiDetailControl::Print => DetailControl::Print,
            FfiDetailControl::Export => DetailControl::Export,
        }
    }
}

impl From<DetailControl> for FfiDetailControl {
    fn from(control: DetailControl) -> Self {
        match control {
            DetailControl::Close => FfiDetailControl::Close,
            DetailControl::Print => FfiDetailControl::Print,
            DetailControl::Export => FfiDetailControl::Export,
        }
    }
}

/// Work the host must carry out after an input.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum FfiEffect {
    /// Smoothly scroll to the top of the page
    ScrollToTop,
    BackgroundScroll { locked: bool },
    Focus { control: FfiDetailControl },
    /// Print the detail view
    Print,
    /// Export the recipe, e.g. with `export_recipe`
    Export { recipe_id: u32 },
}

impl From<Effect> for FfiEffect {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::ScrollToTop => FfiEffect::ScrollToTop,
            Effect::BackgroundScroll { locked } => FfiEffect::BackgroundScroll { locked },
            Effect::Focus(control) => FfiEffect::Focus {
                control: control.into(),
            },
            Effect::Print => FfiEffect::Print,
            Effect::Export(id) => FfiEffect::Export {
                recipe_id: id as u32,
            },
        }
    }
}

/// FFI-safe representation of a recipe card.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCard {
    pub id: u32,
    pub title: String,
    /// Image reference, the placeholder when the recipe has none
    pub image: String,
    pub image_alt: String,
    pub category: String,
    pub dietary: String,
    pub aria_label: String,
}

impl From<&CardView> for FfiCard {
    fn from(card: &CardView) -> Self {
        FfiCard {
            id: card.id as u32,
            title: card.title.clone(),
            image: card.image.clone(),
            image_alt: card.image_alt.clone(),
            category: card.category.clone(),
            dietary: card.dietary.clone(),
            aria_label: card.aria_label.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiPageControlKind {
    Previous,
    Page,
    Next,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPageControl {
    pub kind: FfiPageControlKind,
    pub text: String,
    pub aria_label: String,
    /// Page shown when the control is activated
    pub target: u32,
    pub disabled: bool,
}

impl From<&PageControl> for FfiPageControl {
    fn from(control: &PageControl) -> Self {
        FfiPageControl {
            kind: match control.kind {
                PageControlKind::Previous => FfiPageControlKind::Previous,
                PageControlKind::Page => FfiPageControlKind::Page,
                PageControlKind::Next => FfiPageControlKind::Next,
            },
            text: control.text.clone(),
            aria_label: control.aria_label.clone(),
            target: control.target as u32,
            disabled: control.disabled,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSelectOption {
    /// Empty for the "all" entry
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl From<&SelectOption> for FfiSelectOption {
    fn from(option: &SelectOption) -> Self {
        FfiSelectOption {
            value: option.value.clone(),
            label: option.label.clone(),
            selected: option.selected,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFilterControls {
    pub kitchen: Vec<FfiSelectOption>,
    pub dietary: Vec<FfiSelectOption>,
    pub category: Vec<FfiSelectOption>,
    pub search: String,
}

impl From<&FilterControls> for FfiFilterControls {
    fn from(controls: &FilterControls) -> Self {
        let options = |list: &[SelectOption]| list.iter().map(FfiSelectOption::from).collect();
        FfiFilterControls {
            kitchen: options(&controls.kitchen),
            dietary: options(&controls.dietary),
            category: options(&controls.category),
            search: controls.search.clone(),
        }
    }
}

/// Everything needed to render the browse screen.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBrowsePage {
    pub filters: FfiFilterControls,
    pub cards: Vec<FfiCard>,
    /// Set instead of cards when nothing matches
    pub empty_message: Option<String>,
    pub pagination: Vec<FfiPageControl>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_matches: u32,
}

impl From<&BrowseView> for FfiBrowsePage {
    fn from(view: &BrowseView) -> Self {
        let empty_message = match &view.list {
            RecipeListView::Empty { message } => Some(message.clone()),
            RecipeListView::Cards { .. } => None,
        };
        FfiBrowsePage {
            filters: FfiFilterControls::from(&view.filters),
            cards: view.list.cards().iter().map(FfiCard::from).collect(),
            empty_message,
            pagination: view.pagination.iter().map(FfiPageControl::from).collect(),
            current_page: view.current_page as u32,
            total_pages: view.total_pages as u32,
            total_matches: view.total_matches as u32,
        }
    }
}

/// A group of ingredients. Flat lists come as one group without a heading.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredientGroup {
    pub heading: Option<String>,
    pub items: Vec<String>,
}

/// FFI-safe representation of the detail view.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDetail {
    pub title: String,
    pub kitchen: String,
    pub category: String,
    pub dietary: String,
    pub serves: String,
    pub ingredients: Vec<FfiIngredientGroup>,
    /// Set when the ingredients could not be read
    pub ingredients_message: Option<String>,
    pub steps: Vec<String>,
    /// Set when the instructions could not be read
    pub instructions_message: Option<String>,
}

impl From<&DetailView> for FfiDetail {
    fn from(view: &DetailView) -> Self {
        let (ingredients, ingredients_message) = match &view.ingredients {
            IngredientsBlock::List { items } => (
                vec![FfiIngredientGroup {
                    heading: None,
                    items: items.clone(),
                }],
                None,
            ),
            IngredientsBlock::Sections { sections } => (
                sections
                    .iter()
                    .map(|section| FfiIngredientGroup {
                        heading: Some(section.heading.clone()),
                        items: section.items.clone(),
                    })
                    .collect(),
                None,
            ),
            IngredientsBlock::Unavailable { message } => (Vec::new(), Some(message.clone())),
        };
        let (steps, instructions_message) = match &view.instructions {
            InstructionsBlock::Steps { steps } => (steps.clone(), None),
            InstructionsBlock::Unavailable { message } => (Vec::new(), Some(message.clone())),
        };
        FfiDetail {
            title: view.title.clone(),
            kitchen: view.kitchen.clone(),
            category: view.category.clone(),
            dietary: view.dietary.clone(),
            serves: view.serves.clone(),
            ingredients,
            ingredients_message,
            steps,
            instructions_message,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFilterOptions {
    pub kitchens: Vec<String>,
    pub categories: Vec<String>,
    pub dietary: Vec<String>,
}

/// A browsing session over one loaded dataset.
#[derive(uniffi::Object)]
pub struct FfiRecipeBrowser {
    state: Mutex<AppState>,
    exporter: Exporter,
}

#[uniffi::export]
impl FfiRecipeBrowser {
    /// Creates a browser from dataset JSON text.
    #[uniffi::constructor]
    pub fn from_json(json: String) -> Result<Arc<Self>, BrowserError> {
        let recipes = load_recipes_str(&json)?;
        Ok(Arc::new(FfiRecipeBrowser::new(AppState::new(recipes))))
    }

    /// Creates a browser from a dataset file.
    #[uniffi::constructor]
    pub fn from_path(path: String) -> Result<Arc<Self>, BrowserError> {
        let recipes = load_recipes(&path)?;
        Ok(Arc::new(FfiRecipeBrowser::new(AppState::new(recipes))))
    }

    /// Returns the options offered by the filter selectors.
    pub fn options(&self) -> FfiFilterOptions {
        let state = self.state();
        let options = state.options();
        FfiFilterOptions {
            kitchens: options.kitchens.clone(),
            categories: options.categories.clone(),
            dietary: options.dietary.iter().map(|d| d.label().to_string()).collect(),
        }
    }

    /// Selects a kitchen; `None` or an empty string selects all.
    pub fn set_kitchen(&self, kitchen: Option<String>) -> Vec<FfiEffect> {
        self.dispatch(Event::SetKitchen(kitchen))
    }

    /// Selects a dietary option by label. Unknown labels select all.
    pub fn set_dietary(&self, dietary: Option<String>) -> Vec<FfiEffect> {
        let option = dietary.as_deref().and_then(DietaryOption::parse_selection);
        self.dispatch(Event::SetDietary(option))
    }

    pub fn set_category(&self, category: Option<String>) -> Vec<FfiEffect> {
        self.dispatch(Event::SetCategory(category))
    }

    pub fn set_search(&self, search: String) -> Vec<FfiEffect> {
        self.dispatch(Event::SetSearch(search))
    }

    pub fn clear_filters(&self) -> Vec<FfiEffect> {
        self.dispatch(Event::ClearFilters)
    }

    pub fn previous_page(&self) -> Vec<FfiEffect> {
        self.dispatch(Event::Navigate(PageNavigation::Previous))
    }

    pub fn next_page(&self) -> Vec<FfiEffect> {
        self.dispatch(Event::Navigate(PageNavigation::Next))
    }

    /// Jumps to a one-based page number.
    pub fn go_to_page(&self, page: u32) -> Vec<FfiEffect> {
        self.dispatch(Event::Navigate(PageNavigation::Page(page as usize)))
    }

    pub fn click_card(&self, id: u32) -> Vec<FfiEffect> {
        self.dispatch(Event::ClickCard(id as usize))
    }

    pub fn card_key(&self, id: u32, key: FfiKey) -> Vec<FfiEffect> {
        self.dispatch(Event::CardKey(id as usize, key.into()))
    }

    /// Forwards a key press while the detail view is shown.
    pub fn key(&self, key: FfiKey) -> Vec<FfiEffect> {
        self.dispatch(Event::Key(key.into()))
    }

    pub fn click_outside(&self) -> Vec<FfiEffect> {
        self.dispatch(Event::ClickOutside)
    }

    pub fn activate(&self, control: FfiDetailControl) -> Vec<FfiEffect> {
        self.dispatch(Event::Activate(control.into()))
    }

    /// Returns the current browse screen.
    pub fn browse_page(&self) -> FfiBrowsePage {
        FfiBrowsePage::from(&self.state().browse_view())
    }

    /// Returns the open detail view, if any.
    pub fn detail(&self) -> Option<FfiDetail> {
        self.state().detail_view().map(FfiDetail::from)
    }

    /// Writes the PDF of a recipe into `out_dir` and returns its path.
    pub fn export_recipe(&self, id: u32, out_dir: String) -> Result<String, BrowserError> {
        let state = self.state();
        let recipe = state
            .store()
            .get(id as usize)
            .ok_or_else(|| BrowserError::NotFound {
                message: format!("No recipe with id {id}"),
            })?;
        let path = self.exporter.export_to_dir(recipe, Utf8Path::new(&out_dir))?;
        Ok(path.into_string())
    }
}

impl FfiRecipeBrowser {
    fn new(state: AppState) -> Self {
        FfiRecipeBrowser {
            state: Mutex::new(state),
            exporter: Exporter::default(),
        }
    }

    fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn dispatch(&self, event: Event) -> Vec<FfiEffect> {
        self.state()
            .dispatch(event)
            .into_iter()
            .map(FfiEffect::from)
            .collect()
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Returns the display label for a dietary combination.
#[uniffi::export]
pub fn dietary_label(vegetarian: bool, gluten_free: bool) -> String {
    Dietary {
        vegetarian,
        gluten_free,
    }
    .label()
}

/// Derives the export file stem for a recipe title.
#[uniffi::export]
pub fn sanitize_file_name(name: String) -> String {
    crate::export::sanitize_file_name(&name)
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
