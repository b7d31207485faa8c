use serde::Serialize;

pub const INGREDIENTS_UNAVAILABLE: &str = "Ingredients information is unavailable.";
pub const INSTRUCTIONS_UNAVAILABLE: &str = "Instructions information is unavailable.";

/// Single-recipe presentation shown in the detail surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub title: String,
    pub kitchen: String,
    pub category: String,
    pub dietary: String,
    pub serves: String,
    pub ingredients: IngredientsBlock,
    pub instructions: InstructionsBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum IngredientsBlock {
    /// Unordered list
    List { items: Vec<String> },
    /// Capitalized subheading followed by a list, per section
    Sections { sections: Vec<SectionBlock> },
    Unavailable { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum InstructionsBlock {
    /// Ordered list
    Steps { steps: Vec<String> },
    Unavailable { message: String },
}

/// Focusable controls of the detail surface, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DetailControl {
    Close,
    Print,
    Export,
}

impl DetailControl {
    pub const TAB_ORDER: [DetailControl; 3] =
        [DetailControl::Close, DetailControl::Print, DetailControl::Export];

    pub fn label(&self) -> &'static str {
        match self {
            DetailControl::Close => "Close",
            DetailControl::Print => "Print Recipe",
            DetailControl::Export => "Export as PDF",
        }
    }
}
