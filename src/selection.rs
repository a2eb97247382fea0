//! Country selection
//!
//! [`SelectionState`] is the checkbox model a front end mutates while the user
//! browses the option list. Starting a search takes a [`Selection`] snapshot,
//! so later checkbox changes cannot affect a scrape already in progress.

use serde::Serialize;

/// Mutable set of checked country labels, kept in the order they were checked
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    checked: Vec<String>,
}

impl SelectionState {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a label. Returns false if it was already checked or is blank.
    pub fn check<S: Into<String>>(&mut self, label: S) -> bool {
        let label = label.into();
        if label.trim().is_empty() || self.is_checked(&label) {
            return false;
        }
        self.checked.push(label);
        true
    }

    /// Uncheck a label. Returns false if it was not checked.
    pub fn uncheck(&mut self, label: &str) -> bool {
        let before = self.checked.len();
        self.checked.retain(|c| c != label);
        self.checked.len() != before
    }

    /// Apply a checkbox change
    pub fn set_checked(&mut self, label: &str, checked: bool) {
        if checked {
            self.check(label);
        } else {
            self.uncheck(label);
        }
    }

    /// Flip a label; returns its new state
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.uncheck(label) {
            false
        } else {
            self.check(label)
        }
    }

    /// Whether a label is checked
    pub fn is_checked(&self, label: &str) -> bool {
        self.checked.iter().any(|c| c == label)
    }

    /// Clear everything
    pub fn reset(&mut self) {
        self.checked.clear();
    }

    /// Number of checked labels
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Whether nothing is checked
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Status line: `Selected: None` or `Selected: a, b`
    pub fn summary(&self) -> String {
        if self.checked.is_empty() {
            "Selected: None".to_string()
        } else {
            format!("Selected: {}", self.checked.join(", "))
        }
    }

    /// Immutable copy for a search run
    pub fn snapshot(&self) -> Selection {
        Selection {
            countries: self.checked.clone(),
        }
    }
}

/// Immutable, ordered, duplicate-free list of countries to scrape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    countries: Vec<String>,
}

impl Selection {
    /// Countries in selection order
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Iterate countries in selection order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    /// Number of countries
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut state = SelectionState::new();
        for label in iter {
            state.check(label);
        }
        state.snapshot()
    }
}
