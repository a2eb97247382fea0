//! Coface Scraper - Country Risk Sheets to CSV
//!
//! This crate scrapes the Coface economic risk dashboard: it lists the
//! countries offered on the dashboard, fetches the risk sheet of each selected
//! country, and exports ratings, indicators and strengths/weaknesses to CSV.
//!
//! # Architecture
//!
//! ```text
//! Selection ──▶ ScrapeSession ──▶ slug::normalize ──▶ PageFetcher (reqwest)
//!                    │                                     │
//!                    │                                     ▼
//!                    │                          ┌────────────────────┐
//!                    │                          │ Extraction         │
//!                    │                          │  indicators, cards │
//!                    │                          │  pros/cons         │
//!                    │                          └─────────┬──────────┘
//!                    ▼                                    ▼
//!              RecordWriter (csv) ◀──────────────── CountryRecord
//!                    │
//!                    ▼
//!         {stem}.csv + {stem}_pros_cons.csv
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use coface_scraper::{LogProgress, ScrapeSession, ScraperConfig, Selection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = ScrapeSession::new(ScraperConfig::default())?;
//!
//!     let countries = session.list_countries().await?;
//!     println!("{} countries available", countries.len());
//!
//!     let selection: Selection = ["France", "Allemagne"].into_iter().collect();
//!     let report = session
//!         .export(&selection, "risques.xlsx", &mut LogProgress::new())
//!         .await?;
//!     println!("Wrote {:?}", report.written);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod fetch;
pub mod progress;
pub mod record;
pub mod selection;
pub mod session;
pub mod slug;

// Re-exports for convenience
pub use config::ScraperConfig;
pub use error::{Error, Result};
pub use export::{ExportPaths, ExportReport, RecordWriter};
pub use extraction::{CardExtractor, IndicatorExtractor, OptionExtractor, ProsConsExtractor};
pub use fetch::PageFetcher;
pub use progress::{LogProgress, NullProgress, Progress};
pub use record::CountryRecord;
pub use selection::{Selection, SelectionState};
pub use session::ScrapeSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
