use anyhow::{bail, Context};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use recipe_browser::browser::{AppState, Browser, DirectoryPlatform, Event};
use recipe_browser::config::BrowserConfig;
use recipe_browser::detail::DetailControl;
use recipe_browser::export::{Exporter, PdfBackend};
use recipe_browser::paginate::PageNavigation;
use recipe_browser::view::{html, text};
use recipe_browser::{load_recipes, DietaryOption, RecipeId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "recipe-browser")]
#[command(version, about = "Browse, filter and export a recipe collection", long_about = None)]
struct Cli {
    /// Recipe dataset (JSON)
    #[arg(long, global = true, env = "RECIPE_BROWSER_DATA")]
    data: Option<Utf8PathBuf>,

    /// Config file (defaults to ./recipe-browser.yaml when present)
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the available filter values
    Options,
    /// List one page of recipes
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a recipe in full
    Show {
        /// Recipe title (case-insensitive)
        title: String,
    },
    /// Export a recipe as PDF
    Export {
        /// Recipe title (case-insensitive)
        title: String,
        /// Output directory
        #[arg(long)]
        out_dir: Option<Utf8PathBuf>,
    },
    /// Render the browse page as static HTML
    Html {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Also render the detail view of this recipe
        #[arg(long)]
        detail: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long)]
    kitchen: Option<String>,
    /// "Vegetarian", "Gluten-Free" or "Vegetarian & Gluten-Free"
    #[arg(long)]
    dietary: Option<DietaryOption>,
    #[arg(long = "type")]
    category: Option<String>,
    /// Case-insensitive title search
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn events(self) -> Vec<Event> {
        let mut events = Vec::new();
        if self.kitchen.is_some() {
            events.push(Event::SetKitchen(self.kitchen));
        }
        if self.dietary.is_some() {
            events.push(Event::SetDietary(self.dietary));
        }
        if self.category.is_some() {
            events.push(Event::SetCategory(self.category));
        }
        if let Some(search) = self.search {
            events.push(Event::SetSearch(search));
        }
        events
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_browser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = BrowserConfig::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data = data;
    }

    match cli.command {
        Commands::Options => {
            let state = load_state(&config)?;
            print!("{}", text::render_options(state.options()));
        }
        Commands::List { filters, page } => {
            let mut state = load_state(&config)?;
            apply(&mut state, filters, page);
            print!("{}", text::render_browse(&state.browse_view()));
        }
        Commands::Show { title } => {
            let mut state = load_state(&config)?;
            let id = find_recipe(&state, &title)?;
            state.dispatch(Event::ClickCard(id));
            if let Some(view) = state.detail_view() {
                print!("{}", text::render_detail(view));
            }
        }
        Commands::Export { title, out_dir } => {
            let state = load_state(&config)?;
            let id = find_recipe(&state, &title)?;
            let out_dir = out_dir.unwrap_or(config.export.out_dir);
            let exporter = Exporter::new(config.export.page, Some(Box::new(PdfBackend)));

            let mut browser = Browser::new(state, exporter, DirectoryPlatform::new(&out_dir));
            browser.handle(Event::ClickCard(id));
            browser.handle(Event::Activate(DetailControl::Export));

            let platform = browser.into_platform();
            if let Some(notice) = platform.notices().first() {
                bail!("{notice}");
            }
            for path in platform.saved() {
                println!("{path}");
            }
        }
        Commands::Html {
            filters,
            page,
            detail,
            output,
        } => {
            // The page renders even when the dataset cannot be loaded.
            let mut state = AppState::from_load(load_recipes(&config.data))
                .with_placeholder_image(&config.placeholder_image);
            apply(&mut state, filters, page);
            if let Some(title) = detail {
                let id = find_recipe(&state, &title)?;
                state.dispatch(Event::ClickCard(id));
            }

            let document = html::render_document(&state.browse_view(), state.detail_view());
            match output {
                Some(path) => write_file(&path, &document)?,
                None => print!("{document}"),
            }
        }
    }

    Ok(())
}

fn load_state(config: &BrowserConfig) -> anyhow::Result<AppState> {
    let recipes = load_recipes(&config.data)
        .with_context(|| format!("Could not load recipes from {}", config.data))?;
    Ok(AppState::new(recipes).with_placeholder_image(&config.placeholder_image))
}

fn apply(state: &mut AppState, filters: FilterArgs, page: usize) {
    for event in filters.events() {
        state.dispatch(event);
    }
    if page > 1 {
        state.dispatch(Event::Navigate(PageNavigation::Page(page)));
    }
}

fn find_recipe(state: &AppState, title: &str) -> anyhow::Result<RecipeId> {
    let wanted = title.trim().to_lowercase();
    state
        .store()
        .recipes()
        .iter()
        .position(|recipe| recipe.title.to_lowercase() == wanted)
        .with_context(|| format!("No recipe titled '{title}'"))
}

fn write_file(path: &Utf8Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Could not write {path}"))?;
    tracing::info!(path = %path, "wrote page");
    Ok(())
}
