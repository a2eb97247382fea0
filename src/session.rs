//! Scrape session
//!
//! Ties the pieces together: list the countries offered by the dashboard,
//! scrape a selection one country at a time, and export the records.
//!
//! Each country's detail page is fetched and parsed once, then every extractor
//! runs against the same document. If the fetch fails, or the indicator table
//! extraction fails, the country is skipped. A failure in the cards or the
//! pros/cons section only blanks those fields.

use crate::config::ScraperConfig;
use crate::error::{ExtractionError, Result};
use crate::export::{ExportPaths, ExportReport, RecordWriter};
use crate::extraction::{CardExtractor, IndicatorExtractor, OptionExtractor, ProsConsExtractor};
use crate::fetch::PageFetcher;
use crate::progress::Progress;
use crate::record::CountryRecord;
use crate::selection::Selection;
use crate::slug;
use scraper::Html;
use tracing::{debug, info, instrument, warn};

/// A configured scraper bound to one HTTP client
#[derive(Debug, Clone)]
pub struct ScrapeSession {
    config: ScraperConfig,
    fetcher: PageFetcher,
}

impl ScrapeSession {
    /// Validate the configuration and build the HTTP client
    pub fn new(config: ScraperConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = PageFetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    /// Active configuration
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Detail page URL for a display label
    pub fn detail_url(&self, country: &str) -> String {
        self.config.detail_url(&slug::normalize(country))
    }

    /// Fetch the listing page and return its option labels, sorted for display
    #[instrument(skip(self))]
    pub async fn list_countries(&self) -> Result<Vec<String>> {
        let doc = self.fetcher.fetch(&self.config.listing_url).await?;
        let options = OptionExtractor::extract(&doc, &self.config.option_selector)?;
        info!("Fetched {} options", options.len());
        Ok(OptionExtractor::sort_for_display(options))
    }

    /// Fetch one country's detail page and assemble its record
    #[instrument(skip(self, progress))]
    pub async fn scrape_country(
        &self,
        country: &str,
        progress: &mut dyn Progress,
    ) -> Result<CountryRecord> {
        let url = self.detail_url(country);
        progress.country_started(country, &url);
        let doc = self.fetcher.fetch(&url).await?;
        Ok(extract_record(country, &doc, progress)?)
    }

    /// Scrape every selected country in order. Failed countries are reported
    /// through `progress` and left out of the result.
    #[instrument(skip(self, progress))]
    pub async fn scrape_all(
        &self,
        selection: &Selection,
        progress: &mut dyn Progress,
    ) -> Vec<CountryRecord> {
        progress.begin(selection.len());
        let mut records = Vec::with_capacity(selection.len());

        for country in selection.iter() {
            match self.scrape_country(country, progress).await {
                Ok(record) => {
                    debug!("{:?}", record);
                    progress.country_done(&record);
                    records.push(record);
                }
                Err(e) => {
                    warn!("Error retrieving indicators for {}: {}", country, e);
                    progress.country_skipped(country, &e);
                }
            }
        }

        progress.finish(records.len());
        records
    }

    /// Scrape the selection and write `{stem}.csv` and `{stem}_pros_cons.csv`.
    /// The output name is checked before any request is made.
    #[instrument(skip(self, progress))]
    pub async fn export(
        &self,
        selection: &Selection,
        output_name: &str,
        progress: &mut dyn Progress,
    ) -> Result<ExportReport> {
        let paths = ExportPaths::from_output_name(output_name)?;
        let records = self.scrape_all(selection, progress).await;
        let report = RecordWriter::write(&records, &paths);
        progress.exported(&report);
        Ok(report)
    }
}

/// Run every extractor over a parsed detail page.
///
/// Indicator extraction errors abort the record; the other sections degrade
/// to blank fields and are reported through `progress`.
pub fn extract_record(
    country: &str,
    doc: &Html,
    progress: &mut dyn Progress,
) -> std::result::Result<CountryRecord, ExtractionError> {
    let mut record = CountryRecord::new(country);
    record.apply_indicators(IndicatorExtractor::extract(doc)?);

    match CardExtractor::left(doc) {
        Ok(card) => record.apply_left_card(card),
        Err(e) => partial(progress, country, "left card", &e),
    }
    match CardExtractor::right(doc) {
        Ok(ratings) => record.apply_ratings(ratings),
        Err(e) => partial(progress, country, "ratings", &e),
    }
    match ProsConsExtractor::extract(doc) {
        Ok(pros_cons) => record.apply_pros_cons(pros_cons),
        Err(e) => partial(progress, country, "pros/cons", &e),
    }

    Ok(record)
}

fn partial(progress: &mut dyn Progress, country: &str, section: &str, err: &ExtractionError) {
    warn!("{}: {} left blank: {}", country, section, err);
    progress.partial(country, &format!("{} left blank: {}", section, err));
}
