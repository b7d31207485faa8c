//! Plain-text rendering for terminals.

use super::{BrowseView, RecipeListView};
use crate::detail::{DetailView, IngredientsBlock, InstructionsBlock};
use crate::filter::FilterOptions;
use crate::paginate::PageControlKind;
use std::fmt::Write;

pub fn render_browse(view: &BrowseView) -> String {
    let mut out = String::new();
    match &view.list {
        RecipeListView::Cards { cards } => {
            for card in cards {
                let _ = writeln!(
                    out,
                    "{}\n    [{}] [{}]",
                    card.title, card.category, card.dietary
                );
            }
        }
        RecipeListView::Empty { message } => {
            let _ = writeln!(out, "{message}");
        }
    }

    if !view.pagination.is_empty() {
        let bar: Vec<String> = view
            .pagination
            .iter()
            .map(|control| match control.kind {
                PageControlKind::Page if control.disabled => format!("[{}]", control.text),
                _ => control.text.clone(),
            })
            .collect();
        let _ = writeln!(out, "\n{}", bar.join(" "));
    }
    let _ = writeln!(
        out,
        "{} recipe(s), page {} of {}",
        view.total_matches,
        view.current_page,
        view.total_pages.max(1)
    );
    out
}

pub fn render_detail(view: &DetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));
    let _ = writeln!(out, "Kitchen: {}", view.kitchen);
    let _ = writeln!(out, "Type: {}", view.category);
    let _ = writeln!(out, "Dietary: {}", view.dietary);
    let _ = writeln!(out, "Serves: {}", view.serves);

    out.push_str("\nIngredients\n");
    match &view.ingredients {
        IngredientsBlock::List { items } => bullets(&mut out, items),
        IngredientsBlock::Sections { sections } => {
            for section in sections {
                let _ = writeln!(out, "  {}", section.heading);
                bullets(&mut out, &section.items);
            }
        }
        IngredientsBlock::Unavailable { message } => {
            let _ = writeln!(out, "  {message}");
        }
    }

    out.push_str("\nInstructions\n");
    match &view.instructions {
        InstructionsBlock::Steps { steps } => {
            for (n, step) in steps.iter().enumerate() {
                let _ = writeln!(out, "  {}. {step}", n + 1);
            }
        }
        InstructionsBlock::Unavailable { message } => {
            let _ = writeln!(out, "  {message}");
        }
    }
    out
}

pub fn render_options(options: &FilterOptions) -> String {
    let dietary: Vec<&str> = options.dietary.iter().map(|d| d.label()).collect();
    format!(
        "Kitchens: {}\nTypes: {}\nDietary: {}\n",
        options.kitchens.join(", "),
        options.categories.join(", "),
        dietary.join(", ")
    )
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}
