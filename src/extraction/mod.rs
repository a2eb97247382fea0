//! Content extraction module
//!
//! Each extractor reads one region of a parsed page. Extractors never fetch;
//! the caller parses a detail page once and runs every extractor against it.
//!
//! The country sheet extractors depend on the dashboard's current markup
//! (table row positions, class name prefixes). When the markup they expect is
//! missing they return blank fields and log a warning rather than failing.

pub mod cards;
pub mod indicators;
pub mod options;
pub mod pros_cons;

pub use cards::{CardExtractor, LeftCard, Ratings};
pub use indicators::{EconomicIndicators, IndicatorExtractor};
pub use options::OptionExtractor;
pub use pros_cons::{ProsCons, ProsConsExtractor};

use crate::error::ExtractionError;
use scraper::{ElementRef, Selector};

/// Compile a CSS selector
pub(crate) fn selector(css: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(css).map_err(|e| ExtractionError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Concatenated text content of an element and its descendants
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
