//! The interactive browsing session.
//!
//! [`AppState`] is a pure state machine: every input is an [`Event`] and every
//! side effect it asks for comes back as an [`Effect`]. A [`Browser`] pairs the
//! state with an [`Exporter`] and a [`Platform`], and carries the effects out.

use crate::detail::{DetailControl, DetailView};
use crate::export::{write_document, ExportError, Exporter};
use crate::loader::LoadError;
use crate::model::Recipe;
use crate::store::RecipeId;
use camino::{Utf8Path, Utf8PathBuf};

mod state;

pub use state::{AppState, Effect, Event, Key};

/// Shown when a recipe export is requested but no document backend exists.
pub const EXPORT_UNAVAILABLE_MESSAGE: &str = "PDF export is not available.";

/// The host environment a [`Browser`] runs in.
pub trait Platform {
    fn scroll_to_top(&mut self) {}

    fn set_background_scroll(&mut self, _locked: bool) {}

    fn focus(&mut self, _control: DetailControl) {}

    /// Hands the open detail surface to the host's print facility.
    fn print(&mut self, detail: &DetailView);

    /// Stores an exported document under `file_name`.
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), ExportError>;

    /// Shows a user-visible notice.
    fn notify(&mut self, message: &str);
}

impl AppState {
    /// Builds the state from the outcome of a dataset load.
    ///
    /// A failed load is logged and leaves the browser unpopulated.
    pub fn from_load(result: Result<Vec<Recipe>, LoadError>) -> Self {
        match result {
            Ok(recipes) => AppState::new(recipes),
            Err(e) => {
                tracing::error!("Failed to load recipes: {e}");
                AppState::default()
            }
        }
    }
}

/// A browsing session bound to a host platform.
#[derive(Debug)]
pub struct Browser<P: Platform> {
    state: AppState,
    exporter: Exporter,
    platform: P,
}

impl<P: Platform> Browser<P> {
    pub fn new(state: AppState, exporter: Exporter, platform: P) -> Self {
        Browser {
            state,
            exporter,
            platform,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn into_platform(self) -> P {
        self.platform
    }

    /// Dispatches `event` and runs the resulting effects in order.
    pub fn handle(&mut self, event: Event) {
        for effect in self.state.dispatch(event) {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::ScrollToTop => self.platform.scroll_to_top(),
            Effect::BackgroundScroll { locked } => self.platform.set_background_scroll(locked),
            Effect::Focus(control) => self.platform.focus(control),
            Effect::Print => {
                if let Some(view) = self.state.detail_view() {
                    self.platform.print(view);
                }
            }
            Effect::Export(id) => self.export(id),
        }
    }

    fn export(&mut self, id: RecipeId) {
        let Some(recipe) = self.state.store().get(id) else {
            return;
        };
        let result = match (self.exporter.render(recipe), self.exporter.file_name(recipe)) {
            (Ok(bytes), Some(file_name)) => self.platform.save(&file_name, &bytes),
            (Ok(_), None) => Err(ExportError::BackendUnavailable),
            (Err(e), _) => Err(e),
        };
        match result {
            Ok(()) => {}
            Err(ExportError::BackendUnavailable) => {
                tracing::warn!(title = %recipe.title, "export requested without a document backend");
                self.platform.notify(EXPORT_UNAVAILABLE_MESSAGE);
            }
            Err(e) => {
                tracing::error!("Failed to export {}: {e}", recipe.title);
                self.platform.notify(&format!("Export failed: {e}"));
            }
        }
    }
}

/// A platform that writes exports into a directory and collects everything
/// else for the caller to present.
#[derive(Debug, Clone)]
pub struct DirectoryPlatform {
    out_dir: Utf8PathBuf,
    saved: Vec<Utf8PathBuf>,
    printed: Vec<DetailView>,
    notices: Vec<String>,
    scroll_locked: bool,
    focused: Option<DetailControl>,
}

impl DirectoryPlatform {
    pub fn new<P: AsRef<Utf8Path>>(out_dir: P) -> Self {
        DirectoryPlatform {
            out_dir: out_dir.as_ref().to_path_buf(),
            saved: Vec::new(),
            printed: Vec::new(),
            notices: Vec::new(),
            scroll_locked: false,
            focused: None,
        }
    }

    /// Paths of the files written so far.
    pub fn saved(&self) -> &[Utf8PathBuf] {
        &self.saved
    }

    pub fn printed(&self) -> &[DetailView] {
        &self.printed
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn focused(&self) -> Option<DetailControl> {
        self.focused
    }
}

impl Platform for DirectoryPlatform {
    fn set_background_scroll(&mut self, locked: bool) {
        self.scroll_locked = locked;
        if !locked {
            self.focused = None;
        }
    }

    fn focus(&mut self, control: DetailControl) {
        self.focused = Some(control);
    }

    fn print(&mut self, detail: &DetailView) {
        self.printed.push(detail.clone());
    }

    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let path = self.out_dir.join(file_name);
        write_document(&path, bytes)?;
        self.saved.push(path);
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::PageNavigation;
    use crate::testing::numbered;
    use tempfile::TempDir;

    fn temp_path(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_export_writes_sanitized_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut recipes = numbered(2);
        recipes[1].title = "Chef's Special: V2!".to_string();

        let mut browser = Browser::new(
            AppState::new(recipes),
            Exporter::default(),
            DirectoryPlatform::new(temp_path(&temp_dir)),
        );
        browser.handle(Event::ClickCard(1));
        browser.handle(Event::Activate(DetailControl::Export));

        let platform = browser.platform();
        assert_eq!(
            platform.saved(),
            &[temp_path(&temp_dir).join("chef_s_special__v2_.pdf")]
        );
        assert!(platform.notices().is_empty());
        assert!(std::fs::read(&platform.saved()[0])
            .unwrap()
            .starts_with(b"%PDF-"));
    }

    #[test]
    fn test_export_without_backend_notifies() {
        let temp_dir = TempDir::new().unwrap();
        let mut browser = Browser::new(
            AppState::new(numbered(1)),
            Exporter::unavailable(),
            DirectoryPlatform::new(temp_path(&temp_dir)),
        );
        browser.handle(Event::ClickCard(0));
        browser.handle(Event::Activate(DetailControl::Export));

        let platform = browser.into_platform();
        assert!(platform.saved().is_empty());
        assert_eq!(platform.notices(), &[EXPORT_UNAVAILABLE_MESSAGE.to_string()]);
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_failure_notifies() {
        let mut browser = Browser::new(
            AppState::new(numbered(1)),
            Exporter::default(),
            DirectoryPlatform::new("/nonexistent/directory"),
        );
        browser.handle(Event::ClickCard(0));
        browser.handle(Event::Activate(DetailControl::Export));

        let platform = browser.platform();
        assert!(platform.saved().is_empty());
        assert_eq!(platform.notices().len(), 1);
        assert!(platform.notices()[0].starts_with("Export failed"));
        assert!(platform.notices()[0].contains("/nonexistent/directory/recipe_1.pdf"));
    }

    #[test]
    fn test_print_and_scroll_lock() {
        let mut browser = Browser::new(
            AppState::new(numbered(2)),
            Exporter::default(),
            DirectoryPlatform::new("."),
        );
        browser.handle(Event::ClickCard(0));
        assert!(browser.platform().scroll_locked());
        assert_eq!(browser.platform().focused(), Some(DetailControl::Close));

        browser.handle(Event::Activate(DetailControl::Print));
        assert_eq!(browser.platform().printed()[0].title, "Recipe 1");
        assert_eq!(browser.platform().focused(), Some(DetailControl::Print));

        browser.handle(Event::Key(Key::Tab));
        assert_eq!(browser.platform().focused(), Some(DetailControl::Export));

        browser.handle(Event::Key(Key::Escape));
        assert!(!browser.platform().scroll_locked());
        assert_eq!(browser.platform().focused(), None);
    }

    #[test]
    fn test_navigation_through_session() {
        let mut browser = Browser::new(
            AppState::new(numbered(7)),
            Exporter::default(),
            DirectoryPlatform::new("."),
        );
        browser.handle(Event::Navigate(PageNavigation::Next));
        assert_eq!(browser.state().page(), 2);
        assert_eq!(browser.state().visible(), &[6]);
    }

    #[test]
    fn test_failed_load_leaves_state_empty() {
        let state = AppState::from_load(crate::load_recipes_str("{ not json"));
        assert!(state.store().is_empty());
        assert!(state.browse_view().list.is_empty());
    }
}
