//! Economic indicator table extraction
//!
//! The country sheet has a table whose screen-reader caption reads
//! "Principaux indicateurs économiques". Values are read by position:
//!
//! | row (0-based) | field     | cell (0-based) |
//! |---------------|-----------|----------------|
//! | 1             | growth    | 3              |
//! | 2             | inflation | 3              |
//!
//! Rows are every `tr` below the table in document order, header rows
//! included. If the site reorders rows or columns the values come out wrong or
//! blank; nothing here can tell.

use super::{element_text, selector};
use crate::error::ExtractionError;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Caption text identifying the indicators table
pub const INDICATORS_CAPTION: &str = "Principaux indicateurs économiques";

const GROWTH_ROW: usize = 1;
const INFLATION_ROW: usize = 2;
const VALUE_CELL: usize = 3;

/// GDP growth and inflation figures, as displayed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicIndicators {
    /// GDP growth
    pub growth: String,
    /// Inflation
    pub inflation: String,
}

/// Indicator table extraction functionality
pub struct IndicatorExtractor;

impl IndicatorExtractor {
    /// Read growth and inflation from the captioned indicators table.
    /// A missing table or short row leaves the field blank.
    #[instrument(skip(doc))]
    pub fn extract(doc: &Html) -> Result<EconomicIndicators, ExtractionError> {
        let caption_sel = selector("caption.sr-only")?;
        let row_sel = selector("tr")?;
        let cell_sel = selector("td")?;

        let mut indicators = EconomicIndicators::default();
        let mut tables = 0;

        for caption in doc.select(&caption_sel) {
            if !element_text(caption).contains(INDICATORS_CAPTION) {
                continue;
            }
            let Some(table) = caption.parent().and_then(ElementRef::wrap) else {
                continue;
            };
            tables += 1;

            for (index, row) in table.select(&row_sel).enumerate() {
                let field = match index {
                    GROWTH_ROW => &mut indicators.growth,
                    INFLATION_ROW => &mut indicators.inflation,
                    _ => continue,
                };
                if let Some(cell) = row.select(&cell_sel).nth(VALUE_CELL) {
                    *field = element_text(cell).trim().to_string();
                }
            }
        }

        if tables == 0 {
            warn!("No table captioned '{}' found", INDICATORS_CAPTION);
        }
        debug!(
            "Indicators: growth={:?} inflation={:?}",
            indicators.growth, indicators.inflation
        );
        Ok(indicators)
    }
}
