use serde::Serialize;

/// A pagination navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageNavigation {
    Previous,
    Next,
    Page(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageControlKind {
    Previous,
    Page,
    Next,
}

/// One button of the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub kind: PageControlKind,
    /// Visible text (`Prev`, `3`, `Next`)
    pub text: String,
    /// Accessible label (`Previous Page`, `Page 3`, `Next Page`)
    pub aria_label: String,
    /// Page shown when the control is activated
    pub target: usize,
    /// Set only on the current page's number; disabled controls are not
    /// clickable
    pub disabled: bool,
}

impl PageControl {
    pub(crate) fn previous(current: usize) -> Self {
        PageControl {
            kind: PageControlKind::Previous,
            text: "Prev".to_string(),
            aria_label: "Previous Page".to_string(),
            target: current - 1,
            disabled: false,
        }
    }

    pub(crate) fn page(number: usize, current: usize) -> Self {
        PageControl {
            kind: PageControlKind::Page,
            text: number.to_string(),
            aria_label: format!("Page {number}"),
            target: number,
            disabled: number == current,
        }
    }

    pub(crate) fn next(current: usize) -> Self {
        PageControl {
            kind: PageControlKind::Next,
            text: "Next".to_string(),
            aria_label: "Next Page".to_string(),
            target: current + 1,
            disabled: false,
        }
    }

    pub fn navigation(&self) -> PageNavigation {
        match self.kind {
            PageControlKind::Previous => PageNavigation::Previous,
            PageControlKind::Page => PageNavigation::Page(self.target),
            PageControlKind::Next => PageNavigation::Next,
        }
    }
}
