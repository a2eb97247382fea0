//! Strengths / weaknesses extraction

use super::{element_text, selector};
use crate::error::ExtractionError;
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// List items of the strengths section
pub const PROS_SELECTOR: &str = "article.prosAndCons__pros li";

/// List items of the weaknesses section
pub const CONS_SELECTOR: &str = "article.prosAndCons__cons li";

/// Strengths and weaknesses, one `"\n - item"` line per list item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsCons {
    /// Strengths ("Points forts")
    pub pros: String,
    /// Weaknesses ("Points faibles")
    pub cons: String,
}

/// Pros/cons extraction functionality
pub struct ProsConsExtractor;

impl ProsConsExtractor {
    /// Collect both sections. An absent section gives an empty string.
    #[instrument(skip(doc))]
    pub fn extract(doc: &Html) -> Result<ProsCons, ExtractionError> {
        let pros_cons = ProsCons {
            pros: Self::bullet_list(doc, PROS_SELECTOR)?,
            cons: Self::bullet_list(doc, CONS_SELECTOR)?,
        };
        debug!(
            "Pros: {} chars, cons: {} chars",
            pros_cons.pros.len(),
            pros_cons.cons.len()
        );
        Ok(pros_cons)
    }

    fn bullet_list(doc: &Html, css: &str) -> Result<String, ExtractionError> {
        let sel = selector(css)?;
        Ok(doc
            .select(&sel)
            .map(|item| format!("\n - {}", element_text(item)))
            .collect())
    }
}
