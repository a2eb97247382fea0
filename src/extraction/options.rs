//! Listing page option extraction
//!
//! The dashboard's listing page carries a `<select>` of every country with a
//! risk sheet. Labels are returned as displayed; the selection layer uses them
//! both as the display string and as the slug source.

use super::{element_text, selector};
use crate::error::ExtractionError;
use scraper::Html;
use tracing::{debug, instrument, warn};

/// Option label extraction functionality
pub struct OptionExtractor;

impl OptionExtractor {
    /// Extract the trimmed, non-empty text of every element matching `css`,
    /// in document order. Duplicates are kept.
    #[instrument(skip(doc))]
    pub fn extract(doc: &Html, css: &str) -> Result<Vec<String>, ExtractionError> {
        let sel = selector(css)?;
        let options: Vec<String> = doc
            .select(&sel)
            .map(|el| element_text(el).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if options.is_empty() {
            warn!("No option matched '{}'", css);
        } else {
            debug!("Extracted {} options", options.len());
        }
        Ok(options)
    }

    /// Sort labels for display. Equal labels are kept side by side.
    pub fn sort_for_display(mut options: Vec<String>) -> Vec<String> {
        options.sort();
        options
    }

    /// Case-insensitive substring search over the labels, as typed in a search box.
    /// An empty query matches everything.
    pub fn filter<'a>(options: &'a [String], query: &str) -> Vec<&'a str> {
        let needle = query.to_lowercase();
        options
            .iter()
            .filter(|option| option.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Find the listed label a user typed: exact match first, then a
    /// case-insensitive one.
    pub fn resolve<'a>(options: &'a [String], input: &str) -> Option<&'a str> {
        let input = input.trim();
        options
            .iter()
            .find(|option| option.as_str() == input)
            .or_else(|| {
                let lowered = input.to_lowercase();
                options.iter().find(|option| option.to_lowercase() == lowered)
            })
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing(body: &str) -> Html {
        Html::parse_document(&format!(
            "<html><body><select id=\"pays\">{}</select></body></html>",
            body
        ))
    }

    #[test]
    fn test_whitespace_only_options_are_dropped() {
        let doc = listing("<option>France</option><option>  </option><option>Germany</option>");
        let options = OptionExtractor::extract(&doc, "option").unwrap();
        assert_eq!(options, vec!["France", "Germany"]);
    }

    #[test]
    fn test_document_order_and_duplicates() {
        let doc = listing(
            "<option> Pérou </option><option>Allemagne</option><option>Pérou</option>",
        );
        let options = OptionExtractor::extract(&doc, "option").unwrap();
        assert_eq!(options, vec!["Pérou", "Allemagne", "Pérou"]);

        let sorted = OptionExtractor::sort_for_display(options);
        assert_eq!(sorted, vec!["Allemagne", "Pérou", "Pérou"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let doc = Html::parse_document("<html><body><p>nothing</p></body></html>");
        let options = OptionExtractor::extract(&doc, "option").unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_bad_selector_errors() {
        let doc = listing("<option>France</option>");
        assert!(OptionExtractor::extract(&doc, "option[").is_err());
    }

    #[test]
    fn test_filter() {
        let options = vec![
            "France".to_string(),
            "Afrique du Sud".to_string(),
            "Allemagne".to_string(),
        ];
        assert_eq!(OptionExtractor::filter(&options, "FR"), vec!["France", "Afrique du Sud"]);
        assert_eq!(OptionExtractor::filter(&options, "").len(), 3);
        assert!(OptionExtractor::filter(&options, "xyz").is_empty());
    }

    #[test]
    fn test_resolve() {
        let options = vec!["France".to_string(), "Pérou".to_string()];
        assert_eq!(OptionExtractor::resolve(&options, "France"), Some("France"));
        assert_eq!(OptionExtractor::resolve(&options, " pérou "), Some("Pérou"));
        assert_eq!(OptionExtractor::resolve(&options, "Chili"), None);
    }
}
