//! Static HTML rendering of the view-models.
//!
//! The markup mirrors the structure a browser front end would build: a
//! filter bar, a card grid, a pagination bar and an optional detail modal.
//! All recipe text is escaped.

use super::{BrowseView, CardView, RecipeListView};
use crate::detail::{DetailControl, DetailView, IngredientsBlock, InstructionsBlock};
use crate::filter::SelectOption;
use crate::paginate::PageControl;
use std::fmt::Write;

/// Escapes text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a complete standalone page.
pub fn render_document(browse: &BrowseView, detail: Option<&DetailView>) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Recipes</title>\n</head>\n");
    // Background scrolling is suspended while the detail modal is shown.
    if detail.is_some() {
        html.push_str("<body style=\"overflow: hidden\">\n");
    } else {
        html.push_str("<body>\n");
    }
    html.push_str(&render_browse(browse));
    if let Some(detail) = detail {
        html.push_str(&render_detail(detail));
    }
    html.push_str("</body>\n</html>\n");
    html
}

pub fn render_browse(view: &BrowseView) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"filters\">\n");
    html.push_str(&render_select("kitchen-filter", &view.filters.kitchen));
    html.push_str(&render_select("dietary-filter", &view.filters.dietary));
    html.push_str(&render_select("type-filter", &view.filters.category));
    let _ = writeln!(
        html,
        "<input id=\"search-bar\" type=\"search\" placeholder=\"Search recipes...\" value=\"{}\">",
        escape(&view.filters.search)
    );
    html.push_str("<button id=\"clear-filters\">Clear Filters</button>\n</div>\n");
    html.push_str(&render_list(&view.list));
    html.push_str(&render_pagination(&view.pagination));
    html
}

fn render_select(id: &str, options: &[SelectOption]) -> String {
    let mut html = format!("<select id=\"{id}\">\n");
    for option in options {
        let selected = if option.selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            escape(&option.value),
            escape(&option.label)
        );
    }
    html.push_str("</select>\n");
    html
}

pub fn render_list(list: &RecipeListView) -> String {
    match list {
        RecipeListView::Cards { cards } => {
            let mut html = String::from("<div id=\"recipe-list\">\n");
            for card in cards {
                html.push_str(&render_card(card));
            }
            html.push_str("</div>\n");
            html
        }
        RecipeListView::Empty { message } => format!(
            "<div id=\"recipe-list\">\n<p style=\"text-align: center\">{}</p>\n</div>\n",
            escape(message)
        ),
    }
}

pub fn render_card(card: &CardView) -> String {
    format!(
        concat!(
            "<div class=\"recipe-card\" tabindex=\"0\" data-recipe=\"{id}\" aria-label=\"{aria}\">\n",
            "<img src=\"{image}\" alt=\"{alt}\">\n",
            "<div class=\"recipe-card-content\">\n",
            "<h3>{title}</h3>\n",
            "<div class=\"tags\"><span class=\"tag\">{category}</span>",
            "<span class=\"tag\">{dietary}</span></div>\n",
            "</div>\n</div>\n"
        ),
        id = card.id,
        aria = escape(&card.aria_label),
        image = escape(&card.image),
        alt = escape(&card.image_alt),
        title = escape(&card.title),
        category = escape(&card.category),
        dietary = escape(&card.dietary),
    )
}

pub fn render_pagination(controls: &[PageControl]) -> String {
    let mut html = String::from("<div id=\"pagination\">");
    for control in controls {
        let state = if control.disabled {
            " disabled class=\"current\""
        } else {
            ""
        };
        let _ = write!(
            html,
            "<button data-page=\"{}\" aria-label=\"{}\"{state}>{}</button>",
            control.target,
            escape(&control.aria_label),
            escape(&control.text)
        );
    }
    html.push_str("</div>\n");
    html
}

pub fn render_detail(view: &DetailView) -> String {
    let mut html = String::from(
        "<div id=\"recipe-modal\" class=\"modal show\" role=\"dialog\" aria-modal=\"true\">\n<div class=\"modal-content\">\n",
    );
    let _ = writeln!(
        html,
        "<button class=\"close-button\" aria-label=\"{}\">&times;</button>",
        DetailControl::Close.label()
    );
    let _ = writeln!(
        html,
        "<div class=\"modal-header\"><h2>{}</h2></div>",
        escape(&view.title)
    );
    html.push_str("<div class=\"modal-body\">\n");
    for (label, value) in [
        ("Kitchen", &view.kitchen),
        ("Type", &view.category),
        ("Dietary", &view.dietary),
        ("Serves", &view.serves),
    ] {
        let _ = writeln!(html, "<p><strong>{label}:</strong> {}</p>", escape(value));
    }
    html.push_str("<hr>\n<div class=\"modal-section\">\n<h4>Ingredients</h4>\n");
    html.push_str(&render_ingredients(&view.ingredients));
    html.push_str("</div>\n<hr>\n<div class=\"modal-section\">\n<h4>Instructions</h4>\n");
    html.push_str(&render_instructions(&view.instructions));
    html.push_str("</div>\n</div>\n<div class=\"modal-footer\">\n");
    let _ = writeln!(
        html,
        "<button id=\"print-button\">{}</button>",
        DetailControl::Print.label()
    );
    let _ = writeln!(
        html,
        "<button id=\"export-button\">{}</button>",
        DetailControl::Export.label()
    );
    html.push_str("</div>\n</div>\n</div>\n");
    html
}

fn render_items(tag: &str, items: &[String]) -> String {
    let mut html = format!("<{tag}>");
    for item in items {
        let _ = write!(html, "<li>{}</li>", escape(item));
    }
    let _ = writeln!(html, "</{tag}>");
    html
}

fn render_ingredients(block: &IngredientsBlock) -> String {
    match block {
        IngredientsBlock::List { items } => render_items("ul", items),
        IngredientsBlock::Sections { sections } => sections
            .iter()
            .map(|section| {
                format!(
                    "<h5>{}</h5>{}",
                    escape(&section.heading),
                    render_items("ul", &section.items)
                )
            })
            .collect(),
        IngredientsBlock::Unavailable { message } => format!("<p>{}</p>\n", escape(message)),
    }
}

fn render_instructions(block: &InstructionsBlock) -> String {
    match block {
        InstructionsBlock::Steps { steps } => render_items("ol", steps),
        InstructionsBlock::Unavailable { message } => format!("<p>{}</p>\n", escape(message)),
    }
}
