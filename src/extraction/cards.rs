//! Summary card extraction
//!
//! The header of a country sheet has two cards:
//!
//! - the left card, a `dt`/`dd` list with GDP per capita ("PIB par habitant")
//!   and population;
//! - the right card, `dl.rating` blocks whose `dd` carries the rating as a
//!   `color-<code>` class.
//!
//! The right card has no labels to tell the two ratings apart. The first coded
//! `dd` in document order is the country risk rating, the second the business
//! climate rating.

use super::{element_text, selector};
use crate::error::ExtractionError;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Left card container
pub const LEFT_CARD_SELECTOR: &str = "div.countrySheetHeader__content__card__left";

/// Rating block on the right card
pub const RATING_BLOCK_SELECTOR: &str = "dl.rating";

/// Class prefix carrying a rating code
pub const RATING_CLASS_PREFIX: &str = "color-";

const GDP_TERM: &str = "PIB";
const POPULATION_TERM: &str = "Population";
const GDP_UNIT: &str = "$";
const POPULATION_UNIT: &str = "Millions";

/// Figures from the left card, units stripped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftCard {
    /// GDP per capita (US$)
    pub gdp_per_capita: String,
    /// Population (millions)
    pub population: String,
}

/// Rating codes from the right card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    /// Country risk rating
    pub risk: String,
    /// Business climate rating
    pub business: String,
}

/// Summary card extraction functionality
pub struct CardExtractor;

impl CardExtractor {
    /// Extract GDP per capita and population from the left card
    #[instrument(skip(doc))]
    pub fn left(doc: &Html) -> Result<LeftCard, ExtractionError> {
        let card_sel = selector(LEFT_CARD_SELECTOR)?;
        let term_sel = selector("dt")?;

        let mut card = LeftCard::default();
        let mut containers = 0;

        for container in doc.select(&card_sel) {
            containers += 1;
            for term in container.select(&term_sel) {
                let label = element_text(term);
                if label.starts_with(GDP_TERM) {
                    if let Some(description) = paired_description(term) {
                        card.gdp_per_capita = text_before(&element_text(description), GDP_UNIT);
                    }
                } else if label.starts_with(POPULATION_TERM) {
                    if let Some(description) = paired_description(term) {
                        card.population =
                            text_before(&element_text(description), POPULATION_UNIT);
                    }
                }
            }
        }

        if containers == 0 {
            warn!("No left card matched '{}'", LEFT_CARD_SELECTOR);
        }
        debug!("Left card: {:?}", card);
        Ok(card)
    }

    /// Extract the risk and business climate codes from the right card
    #[instrument(skip(doc))]
    pub fn right(doc: &Html) -> Result<Ratings, ExtractionError> {
        let block_sel = selector(RATING_BLOCK_SELECTOR)?;
        let coded_sel = selector(&format!("dd[class^=\"{}\"]", RATING_CLASS_PREFIX))?;

        let mut codes = doc
            .select(&block_sel)
            .flat_map(|block| block.select(&coded_sel))
            .filter_map(|dd| dd.value().attr("class"))
            .filter_map(|class| class.strip_prefix(RATING_CLASS_PREFIX))
            .map(str::to_string);

        let ratings = Ratings {
            risk: codes.next().unwrap_or_default(),
            business: codes.next().unwrap_or_default(),
        };

        if ratings.risk.is_empty() {
            warn!("No rating found under '{}'", RATING_BLOCK_SELECTOR);
        }
        debug!("Ratings: {:?}", ratings);
        Ok(ratings)
    }
}

/// The `dd` immediately following a `dt`, if the next element is one.
fn paired_description(term: ElementRef<'_>) -> Option<ElementRef<'_>> {
    term.next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "dd")
}

fn text_before(text: &str, delimiter: &str) -> String {
    text.split(delimiter).next().unwrap_or_default().trim().to_string()
}
