use crate::detail::{DetailControl, DetailState, DetailView};
use crate::filter::{derive_options, filter_controls, filter_recipes, FilterOptions};
use crate::model::{DietaryOption, FilterCriteria, Recipe, DEFAULT_PLACEHOLDER_IMAGE};
use crate::paginate::{navigate, page_controls, page_window, total_pages, PageNavigation};
use crate::store::{RecipeId, RecipeStore};
use crate::view::{list_view, BrowseView};
use serde::{Deserialize, Serialize};

/// Keys the browser reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Escape,
    Tab,
    ShiftTab,
    Other,
}

/// Discrete user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetKitchen(Option<String>),
    SetDietary(Option<DietaryOption>),
    SetCategory(Option<String>),
    SetSearch(String),
    ClearFilters,
    Navigate(PageNavigation),
    /// Pointer click on a card
    ClickCard(RecipeId),
    /// Key pressed while a card has focus
    CardKey(RecipeId, Key),
    /// Key pressed while the detail surface is shown
    Key(Key),
    /// Pointer click on the backdrop around the detail surface
    ClickOutside,
    /// Pointer click on a detail control
    Activate(DetailControl),
}

/// Work a front end must carry out after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Smoothly scroll the viewport to the top
    ScrollToTop,
    /// Suspend (`true`) or restore (`false`) background scrolling
    BackgroundScroll { locked: bool },
    Focus(DetailControl),
    /// Print the open detail surface
    Print,
    Export(RecipeId),
}

/// The whole application state. Rendering is a function of this value and
/// it only changes through [`AppState::dispatch`].
#[derive(Debug, Clone)]
pub struct AppState {
    store: RecipeStore,
    options: FilterOptions,
    criteria: FilterCriteria,
    page: usize,
    detail: DetailState,
    placeholder_image: String,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            store: RecipeStore::default(),
            options: FilterOptions::default(),
            criteria: FilterCriteria::default(),
            page: 1,
            detail: DetailState::Closed,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl AppState {
    /// Creates a populated state showing the first page of everything.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let options = derive_options(&recipes);
        AppState {
            store: RecipeStore::new(recipes),
            options,
            ..Default::default()
        }
    }

    pub fn with_placeholder_image(mut self, placeholder_image: impl Into<String>) -> Self {
        self.placeholder_image = placeholder_image.into();
        self
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.store.filtered_len())
    }

    /// Ids of the recipes on the current page.
    pub fn visible(&self) -> &[RecipeId] {
        page_window(self.store.filtered(), self.page)
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn detail_view(&self) -> Option<&DetailView> {
        self.detail.current().map(|open| &open.view)
    }

    /// Recipe shown in the detail surface, if open.
    pub fn open_recipe(&self) -> Option<(RecipeId, &Recipe)> {
        let id = self.detail.current()?.recipe;
        self.store.get(id).map(|recipe| (id, recipe))
    }

    pub fn background_scroll_locked(&self) -> bool {
        self.detail.is_open()
    }

    pub fn browse_view(&self) -> BrowseView {
        let count = self.store.filtered_len();
        BrowseView {
            filters: filter_controls(&self.options, &self.criteria),
            list: list_view(&self.store, self.page, &self.placeholder_image),
            pagination: page_controls(count, self.page),
            current_page: self.page,
            total_pages: total_pages(count),
            total_matches: count,
        }
    }

    /// Applies `event` and returns the effects the front end must run.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::SetKitchen(kitchen) => {
                self.criteria.kitchen = crate::model::selection(kitchen);
                self.apply_filters()
            }
            Event::SetDietary(dietary) => {
                self.criteria.dietary = dietary;
                self.apply_filters()
            }
            Event::SetCategory(category) => {
                self.criteria.category = crate::model::selection(category);
                self.apply_filters()
            }
            Event::SetSearch(search) => {
                self.criteria.search = search;
                self.apply_filters()
            }
            Event::ClearFilters => {
                self.criteria = FilterCriteria::default();
                self.apply_filters()
            }
            Event::Navigate(navigation) => self.navigate(navigation),
            Event::ClickCard(id) => self.open(id),
            Event::CardKey(id, Key::Enter) => self.open(id),
            Event::CardKey(_, _) => Vec::new(),
            Event::Key(key) => self.key(key),
            Event::ClickOutside => self.close(),
            Event::Activate(control) => self.activate(control),
        }
    }

    fn apply_filters(&mut self) -> Vec<Effect> {
        let filtered = filter_recipes(self.store.recipes(), &self.criteria);
        tracing::debug!(
            criteria = ?self.criteria,
            matches = filtered.len(),
            "applied filters"
        );
        self.store.set_filtered(filtered);
        self.page = 1;
        Vec::new()
    }

    fn navigate(&mut self, navigation: PageNavigation) -> Vec<Effect> {
        let target = navigate(self.page, self.store.filtered_len(), navigation);
        if target == self.page {
            return Vec::new();
        }
        tracing::debug!(from = self.page, to = target, "changed page");
        self.page = target;
        vec![Effect::ScrollToTop]
    }

    fn open(&mut self, id: RecipeId) -> Vec<Effect> {
        let Some(recipe) = self.store.get(id) else {
            tracing::warn!(id, "ignored activation of unknown recipe");
            return Vec::new();
        };
        let was_closed = self.detail.open(id, recipe);

        let mut effects = Vec::new();
        if was_closed {
            effects.push(Effect::BackgroundScroll { locked: true });
        }
        if let Some(open) = self.detail.current() {
            effects.push(Effect::Focus(open.focus.focused()));
        }
        effects
    }

    fn close(&mut self) -> Vec<Effect> {
        if self.detail.close() {
            vec![Effect::BackgroundScroll { locked: false }]
        } else {
            Vec::new()
        }
    }

    fn key(&mut self, key: Key) -> Vec<Effect> {
        let Some(open) = self.detail.current_mut() else {
            return Vec::new();
        };
        match key {
            Key::Escape => self.close(),
            Key::Tab => vec![Effect::Focus(open.focus.tab())],
            Key::ShiftTab => vec![Effect::Focus(open.focus.shift_tab())],
            Key::Enter => {
                let focused = open.focus.focused();
                self.activate(focused)
            }
            Key::Other => Vec::new(),
        }
    }

    fn activate(&mut self, control: DetailControl) -> Vec<Effect> {
        if control == DetailControl::Close {
            return self.close();
        }
        let Some(open) = self.detail.current_mut() else {
            return Vec::new();
        };
        let moved = open.focus.focused() != control && open.focus.focus(control);
        let mut effects = Vec::with_capacity(2);
        if moved {
            effects.push(Effect::Focus(control));
        }
        effects.push(match control {
            DetailControl::Print => Effect::Print,
            _ => Effect::Export(open.recipe),
        });
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::PageControlKind;
    use crate::testing::{numbered, recipe_with, BOTH, GLUTEN_FREE, VEGETARIAN};
    use crate::view::RecipeListView;

    fn titles(state: &AppState) -> Vec<String> {
        state
            .browse_view()
            .list
            .cards()
            .iter()
            .map(|card| card.title.clone())
            .collect()
    }

    #[test]
    fn test_seven_recipes_two_pages() {
        let mut state = AppState::new(numbered(7));
        assert_eq!(state.total_pages(), 2);
        assert_eq!(
            titles(&state),
            (1..=6).map(|n| format!("Recipe {n}")).collect::<Vec<_>>()
        );
        let controls = state.browse_view().pagination;
        assert!(!controls.iter().any(|c| c.kind == PageControlKind::Previous));

        let effects = state.dispatch(Event::Navigate(PageNavigation::Next));
        assert_eq!(effects, vec![Effect::ScrollToTop]);
        assert_eq!(state.page(), 2);
        assert_eq!(titles(&state), vec!["Recipe 7"]);
        let controls = state.browse_view().pagination;
        assert!(!controls.iter().any(|c| c.kind == PageControlKind::Next));
        assert!(controls.iter().any(|c| c.kind == PageControlKind::Previous));
    }

    #[test]
    fn test_every_filter_change_resets_page() {
        let events = vec![
            Event::SetKitchen(Some("Italian".to_string())),
            Event::SetDietary(None),
            Event::SetCategory(Some("Main".to_string())),
            Event::SetSearch("recipe".to_string()),
            Event::ClearFilters,
        ];
        for event in events {
            let mut state = AppState::new(numbered(20));
            state.dispatch(Event::Navigate(PageNavigation::Page(3)));
            assert_eq!(state.page(), 3);

            state.dispatch(event.clone());
            assert_eq!(state.page(), 1, "after {event:?}");
        }
    }

    #[test]
    fn test_filters_combine() {
        let mut state = AppState::new(vec![
            recipe_with("Veggie Lasagne", &["Italian"], "Main", VEGETARIAN),
            recipe_with("Polenta", &["Italian"], "Side", BOTH),
            recipe_with("Ceviche", &["Peruvian"], "Starter", GLUTEN_FREE),
        ]);

        state.dispatch(Event::SetKitchen(Some("Italian".to_string())));
        assert_eq!(titles(&state), vec!["Veggie Lasagne", "Polenta"]);

        state.dispatch(Event::SetDietary(Some(DietaryOption::GlutenFree)));
        assert_eq!(titles(&state), vec!["Polenta"]);

        state.dispatch(Event::SetSearch("lasagne".to_string()));
        assert!(state.browse_view().list.is_empty());

        state.dispatch(Event::ClearFilters);
        assert_eq!(titles(&state).len(), 3);
        assert!(state.criteria().is_empty());
    }

    #[test]
    fn test_empty_selection_means_all() {
        let mut state = AppState::new(numbered(3));
        state.dispatch(Event::SetKitchen(Some(String::new())));
        assert_eq!(state.criteria().kitchen, None);
        assert_eq!(titles(&state).len(), 3);
    }

    #[test]
    fn test_no_matches_shows_message() {
        let mut state = AppState::new(numbered(3));
        state.dispatch(Event::SetSearch("nothing like this".to_string()));
        let view = state.browse_view();
        assert!(matches!(view.list, RecipeListView::Empty { .. }));
        assert!(view.pagination.is_empty());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_clicking_current_page_is_noop() {
        let mut state = AppState::new(numbered(13));
        assert!(state
            .dispatch(Event::Navigate(PageNavigation::Page(1)))
            .is_empty());
        assert!(state
            .dispatch(Event::Navigate(PageNavigation::Previous))
            .is_empty());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_card_click_and_enter_open_detail() {
        let mut state = AppState::new(numbered(3));

        let effects = state.dispatch(Event::ClickCard(1));
        assert_eq!(
            effects,
            vec![
                Effect::BackgroundScroll { locked: true },
                Effect::Focus(DetailControl::Close)
            ]
        );
        assert_eq!(state.detail_view().unwrap().title, "Recipe 2");
        assert!(state.background_scroll_locked());

        let mut by_key = AppState::new(numbered(3));
        by_key.dispatch(Event::CardKey(1, Key::Enter));
        assert_eq!(by_key.detail_view(), state.detail_view());

        let mut other_key = AppState::new(numbered(3));
        assert!(other_key.dispatch(Event::CardKey(1, Key::Other)).is_empty());
        assert!(!other_key.detail().is_open());
    }

    #[test]
    fn test_open_twice_keeps_one_surface() {
        let mut state = AppState::new(numbered(3));
        state.dispatch(Event::ClickCard(0));
        let effects = state.dispatch(Event::ClickCard(2));

        assert_eq!(effects, vec![Effect::Focus(DetailControl::Close)]);
        assert_eq!(state.detail_view().unwrap().title, "Recipe 3");
        assert_eq!(state.open_recipe().unwrap().0, 2);
    }

    #[test]
    fn test_close_paths_and_idempotence() {
        for close in [
            Event::Key(Key::Escape),
            Event::ClickOutside,
            Event::Activate(DetailControl::Close),
        ] {
            let mut state = AppState::new(numbered(3));
            state.dispatch(Event::ClickCard(0));

            let first = state.dispatch(close.clone());
            assert_eq!(first, vec![Effect::BackgroundScroll { locked: false }]);
            assert!(!state.detail().is_open());
            assert!(!state.background_scroll_locked());

            let second = state.dispatch(close);
            assert!(second.is_empty());
        }
    }

    #[test]
    fn test_focus_trap_cycles() {
        let mut state = AppState::new(numbered(1));
        state.dispatch(Event::ClickCard(0));

        assert_eq!(
            state.dispatch(Event::Key(Key::ShiftTab)),
            vec![Effect::Focus(DetailControl::Export)]
        );
        assert_eq!(
            state.dispatch(Event::Key(Key::Tab)),
            vec![Effect::Focus(DetailControl::Close)]
        );
        assert_eq!(
            state.dispatch(Event::Key(Key::Tab)),
            vec![Effect::Focus(DetailControl::Print)]
        );
        assert_eq!(state.dispatch(Event::Key(Key::Enter)), vec![Effect::Print]);
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let mut state = AppState::new(numbered(1));
        assert!(state.dispatch(Event::Key(Key::Tab)).is_empty());
        assert!(state.dispatch(Event::Key(Key::Escape)).is_empty());
        assert!(state
            .dispatch(Event::Activate(DetailControl::Print))
            .is_empty());
    }

    #[test]
    fn test_export_effect_names_open_recipe() {
        let mut state = AppState::new(numbered(4));
        state.dispatch(Event::ClickCard(3));
        assert_eq!(
            state.dispatch(Event::Activate(DetailControl::Export)),
            vec![Effect::Focus(DetailControl::Export), Effect::Export(3)]
        );
    }

    #[test]
    fn test_activate_moves_focus_to_control() {
        let mut state = AppState::new(numbered(1));
        state.dispatch(Event::ClickCard(0));

        assert_eq!(
            state.dispatch(Event::Activate(DetailControl::Print)),
            vec![Effect::Focus(DetailControl::Print), Effect::Print]
        );
        // Already focused, so only the action repeats
        assert_eq!(
            state.dispatch(Event::Activate(DetailControl::Print)),
            vec![Effect::Print]
        );
        assert_eq!(
            state.dispatch(Event::Key(Key::Tab)),
            vec![Effect::Focus(DetailControl::Export)]
        );
    }

    #[test]
    fn test_unpopulated_state() {
        let state = AppState::default();
        let view = state.browse_view();
        assert!(view.list.is_empty());
        assert_eq!(view.filters.kitchen.len(), 1);
        assert_eq!(view.total_pages, 0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_placeholder_image_override() {
        let state = AppState::new(numbered(1)).with_placeholder_image("img/blank.png");
        assert_eq!(state.browse_view().list.cards()[0].image, "img/blank.png");
    }
}
