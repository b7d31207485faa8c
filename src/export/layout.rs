use crate::detail::capitalize;
use crate::model::{Ingredients, Instructions, Recipe};
use super::metrics::{glyph_width, mm_per_unit, text_units, MM_PER_PT};
use serde::{Deserialize, Serialize};

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;
/// Left indent of list items, in mm
const ITEM_INDENT: f32 = 10.0;
/// Vertical advance per wrapped line of a list item, in mm
const ITEM_LINE_HEIGHT: f32 = 5.0;

/// Page geometry in millimetres. Defaults to A4 portrait with 15mm margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 15.0,
        }
    }
}

impl PageLayout {
    pub fn content_width(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Offset past which a new page is started.
    pub fn bottom_limit(&self) -> f32 {
        self.height_mm - self.margin_mm
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Font {
    Heading,
    Body,
}

/// One line of text placed on a page. `y` is the baseline measured from
/// the top edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub size: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Page {
    pub runs: Vec<TextRun>,
}

/// A laid-out, backend-neutral document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub layout: PageLayout,
    pub pages: Vec<Page>,
}

impl Document {
    /// All text of the document in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.runs.iter().map(|run| run.text.as_str()))
    }
}

/// Wraps `text` into lines whose rendered width in `font` at `size` points
/// stays within `max_width_mm`.
///
/// Words wider than a whole line are split between characters.
pub fn wrap_text(text: &str, max_width_mm: f32, font: Font, size: f32) -> Vec<String> {
    let max_units = (max_width_mm / mm_per_unit(size)).floor().max(0.0) as u32;
    let space = glyph_width(' ', font);

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_units = 0;
    for mut word in text.split_whitespace() {
        while !word.is_empty() {
            let word_units = text_units(word, font);
            let needed = if line.is_empty() {
                word_units
            } else {
                line_units + space + word_units
            };
            if needed <= max_units {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_units = needed;
                break;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_units = 0;
                continue;
            }
            let split = split_point(word, font, max_units);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Byte offset of the longest prefix of `word` that fits in `max_units`.
/// At least one character is taken.
fn split_point(word: &str, font: Font, max_units: u32) -> usize {
    let mut units = 0;
    for (i, c) in word.char_indices() {
        units += glyph_width(c, font);
        if units > max_units {
            return if i == 0 { c.len_utf8() } else { i };
        }
    }
    word.len()
}

struct Cursor {
    layout: PageLayout,
    finished: Vec<Page>,
    page: Page,
    y: f32,
}

impl Cursor {
    fn new(layout: PageLayout) -> Self {
        Cursor {
            layout,
            finished: Vec::new(),
            page: Page::default(),
            y: layout.margin_mm,
        }
    }

    /// Places wrapped text at the current offset and returns the number of
    /// lines used.
    fn place(&mut self, text: &str, indent: f32, font: Font, size: f32, line_height: f32) -> usize {
        let x = self.layout.margin_mm + indent;
        let lines = wrap_text(text, self.layout.content_width() - indent, font, size);
        let count = lines.len();
        for (i, line) in lines.into_iter().enumerate() {
            self.page.runs.push(TextRun {
                x,
                y: self.y + i as f32 * line_height,
                font,
                size,
                text: line,
            });
        }
        count
    }

    /// Places a heading or metadata line followed by `gap` millimetres.
    fn line(&mut self, text: &str, font: Font, size: f32, gap: f32) {
        let line_height = size * MM_PER_PT * 1.15;
        let count = self.place(text, 0.0, font, size, line_height);
        self.advance(gap + (count - 1) as f32 * line_height);
    }

    fn item(&mut self, text: &str) {
        let count = self.place(text, ITEM_INDENT, Font::Body, BODY_SIZE, ITEM_LINE_HEIGHT);
        self.advance(count as f32 * ITEM_LINE_HEIGHT);
    }

    fn paragraph(&mut self, text: &str) {
        let count = self.place(text, 0.0, Font::Body, BODY_SIZE, ITEM_LINE_HEIGHT);
        self.advance(count as f32 * ITEM_LINE_HEIGHT);
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
        if self.y > self.layout.bottom_limit() {
            self.finished.push(std::mem::take(&mut self.page));
            self.y = self.layout.margin_mm;
        }
    }

    fn finish(mut self) -> Document {
        // A break after the last block leaves nothing on the new page.
        if !self.page.runs.is_empty() || self.finished.is_empty() {
            self.finished.push(self.page);
        }
        Document {
            layout: self.layout,
            pages: self.finished,
        }
    }
}

/// Lays out a recipe as a printable document.
pub fn layout_recipe(recipe: &Recipe, layout: PageLayout) -> Document {
    let mut cursor = Cursor::new(layout);

    cursor.line(&recipe.title, Font::Heading, TITLE_SIZE, 10.0);
    cursor.line(&format!("Kitchen: {}", recipe.kitchen_text()), Font::Body, BODY_SIZE, 7.0);
    cursor.line(&format!("Type: {}", recipe.category), Font::Body, BODY_SIZE, 7.0);
    cursor.line(&format!("Dietary: {}", recipe.dietary.label()), Font::Body, BODY_SIZE, 7.0);
    cursor.line(&format!("Serves: {}", recipe.serves_text()), Font::Body, BODY_SIZE, 10.0);

    cursor.line("Ingredients:", Font::Heading, BODY_SIZE, 7.0);
    match &recipe.ingredients {
        Ingredients::List(items) => {
            for item in items {
                cursor.item(&format!("- {item}"));
            }
        }
        Ingredients::Sections(sections) => {
            for section in sections {
                cursor.line(&format!("{}:", capitalize(&section.name)), Font::Heading, BODY_SIZE, 7.0);
                for item in &section.items {
                    cursor.item(&format!("- {item}"));
                }
            }
        }
        Ingredients::Unavailable => cursor.paragraph(crate::detail::INGREDIENTS_UNAVAILABLE),
    }

    cursor.advance(5.0);
    cursor.line("Instructions:", Font::Heading, BODY_SIZE, 7.0);
    match &recipe.instructions {
        Instructions::Steps(steps) => {
            for (n, step) in steps.iter().enumerate() {
                cursor.item(&format!("{}. {step}", n + 1));
            }
        }
        Instructions::Unavailable => cursor.paragraph(crate::detail::INSTRUCTIONS_UNAVAILABLE),
    }

    cursor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::metrics::text_width;
    use crate::model::IngredientSection;
    use crate::testing::recipe;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("one two", 100.0, Font::Body, 12.0), vec!["one two"]);
        assert_eq!(wrap_text("", 100.0, Font::Body, 12.0), vec![""]);
    }

    #[test]
    fn test_wrap_measures_glyphs() {
        // 12 W at 12pt is 48mm, 12 i is 11.3mm
        let wide = wrap_text(&"W".repeat(12), 40.0, Font::Body, 12.0);
        assert_eq!(wide.len(), 2);
        let narrow = wrap_text(&"i".repeat(12), 40.0, Font::Body, 12.0);
        assert_eq!(narrow.len(), 1);

        let text = "WMWMWMW ".repeat(30);
        for font in [Font::Body, Font::Heading] {
            let lines = wrap_text(&text, 50.0, font, 12.0);
            assert!(lines.len() > 1);
            assert!(lines
                .iter()
                .all(|line| text_width(line, font, 12.0) <= 50.0 + 1e-3));
            assert_eq!(lines.join(" "), text.trim_end());
        }
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, 20.0, Font::Body, 12.0);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|line| text_width(line, Font::Body, 12.0) <= 20.0 + 1e-3));
        assert_eq!(lines.concat(), word);

        // A glyph wider than the line still makes progress
        assert_eq!(wrap_text("WW", 1.0, Font::Body, 12.0), vec!["W", "W"]);
    }

    #[test]
    fn test_runs_stay_inside_right_margin() {
        let mut r = recipe(&"WMWMWMW ".repeat(10));
        r.ingredients = Ingredients::List(vec!["WMWMWMW ".repeat(30)]);
        r.instructions = Instructions::Steps(vec!["MMMMMMMMMM".repeat(20)]);
        let layout = PageLayout::default();
        let doc = layout_recipe(&r, layout);

        let right_edge = layout.width_mm - layout.margin_mm;
        let runs: Vec<&TextRun> = doc.pages.iter().flat_map(|p| &p.runs).collect();
        assert!(runs.iter().any(|run| run.font == Font::Heading && run.text.starts_with("WMW")));
        for run in runs {
            let end = run.x + text_width(&run.text, run.font, run.size);
            assert!(end <= right_edge + 1e-3, "{:?} ends at {end}mm", run.text);
        }
    }

    #[test]
    fn test_layout_order_and_offsets() {
        let doc = layout_recipe(&recipe("Focaccia"), PageLayout::default());
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Focaccia",
                "Kitchen: Italian",
                "Type: Main",
                "Dietary: None",
                "Serves: 4",
                "Ingredients:",
                "- salt",
                "- pepper",
                "Instructions:",
                "1. Season",
                "2. Serve",
            ]
        );

        let runs = &doc.pages[0].runs;
        assert_eq!(runs[0].y, 15.0);
        assert_eq!(runs[0].font, Font::Heading);
        assert_eq!(runs[1].y, 25.0);
        assert_eq!(runs[4].y, 46.0);
        assert_eq!(runs[5].y, 56.0);
        assert_eq!(runs[6].x, 25.0);
        assert_eq!(runs[6].y, 63.0);
        assert_eq!(runs[7].y, 68.0);
        // 73 after the items, then 5 before the instructions heading
        assert_eq!(runs[8].y, 78.0);
    }

    #[test]
    fn test_layout_sections() {
        let mut r = recipe("Pie");
        r.ingredients = Ingredients::Sections(vec![IngredientSection {
            name: "crust".to_string(),
            items: vec!["flour".to_string()],
        }]);
        let doc = layout_recipe(&r, PageLayout::default());
        let lines: Vec<&str> = doc.lines().collect();
        assert!(lines.windows(2).any(|w| w == ["Crust:", "- flour"]));
    }

    #[test]
    fn test_layout_unavailable() {
        let mut r = recipe("Odd");
        r.ingredients = Ingredients::Unavailable;
        r.instructions = Instructions::Unavailable;
        let doc = layout_recipe(&r, PageLayout::default());
        let lines: Vec<&str> = doc.lines().collect();
        assert!(lines.contains(&"Ingredients information is unavailable."));
        assert!(lines.contains(&"Instructions information is unavailable."));
    }

    #[test]
    fn test_long_recipe_breaks_pages() {
        let mut r = recipe("Banquet");
        r.instructions = Instructions::Steps((1..=120).map(|n| format!("Step {n}")).collect());
        let layout = PageLayout::default();
        let doc = layout_recipe(&r, layout);

        assert!(doc.pages.len() >= 3);
        for page in &doc.pages[1..] {
            assert_eq!(page.runs.first().map(|run| run.y), Some(layout.margin_mm));
        }
        for run in doc.pages.iter().flat_map(|p| &p.runs) {
            assert!(run.y <= layout.bottom_limit());
        }
        assert_eq!(doc.lines().last(), Some("120. Step 120"));
    }
}
