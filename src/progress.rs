//! Progress reporting for long-running scrapes
//!
//! Front ends implement [`Progress`] to surface status to users. Every hook
//! has a no-op default.

use crate::error::Error;
use crate::export::ExportReport;
use crate::record::CountryRecord;
use tracing::{error, info, warn};

/// Progress sink used by [`crate::session::ScrapeSession`]
pub trait Progress {
    /// Called once with the number of selected countries
    fn begin(&mut self, _total: usize) {}

    /// A country's detail page is about to be fetched
    fn country_started(&mut self, _country: &str, _url: &str) {}

    /// A record was assembled
    fn country_done(&mut self, _record: &CountryRecord) {}

    /// A country produced no record
    fn country_skipped(&mut self, _country: &str, _error: &Error) {}

    /// Part of a record could not be extracted and was left blank
    fn partial(&mut self, _country: &str, _message: &str) {}

    /// All countries processed
    fn finish(&mut self, _scraped: usize) {}

    /// Files were written (or failed)
    fn exported(&mut self, _report: &ExportReport) {}
}

/// A no-op progress sink
pub struct NullProgress;

impl Progress for NullProgress {}

/// Progress sink that emits `tracing` events
#[derive(Debug, Default)]
pub struct LogProgress {
    done: usize,
    total: usize,
}

impl LogProgress {
    /// New sink with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!("Scraping {} countries", total);
    }

    fn country_started(&mut self, country: &str, url: &str) {
        info!("[{}/{}] {} <- {}", self.done + 1, self.total, country, url);
    }

    fn country_done(&mut self, record: &CountryRecord) {
        self.done += 1;
        info!(
            "[{}/{}] {}: risk={} business={}",
            self.done, self.total, record.country, record.risk_rating, record.business_rating
        );
    }

    fn country_skipped(&mut self, country: &str, error: &Error) {
        self.done += 1;
        warn!("[{}/{}] skipped {}: {}", self.done, self.total, country, error);
    }

    fn partial(&mut self, country: &str, message: &str) {
        warn!("{}: {}", country, message);
    }

    fn finish(&mut self, scraped: usize) {
        info!("Scrape complete ({}/{})", scraped, self.total);
    }

    fn exported(&mut self, report: &ExportReport) {
        for path in &report.written {
            info!("CSV file created: {}", path.display());
        }
        for failure in &report.failures {
            error!("{}", failure);
        }
    }
}
