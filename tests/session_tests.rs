//! End-to-end session tests
//!
//! A local axum server plays the dashboard: a listing page plus country
//! sheets under `/dashboard/fiches-risques-pays/{slug}`. Requests per path are
//! counted so the tests can check each sheet is fetched once.

mod common;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use coface_scraper::error::{ConfigError, FetchError};
use coface_scraper::{
    CountryRecord, Error, NullProgress, Progress, ScrapeSession, ScraperConfig, Selection,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Hits = Arc<Mutex<HashMap<String, usize>>>;

const LISTED: &[&str] = &["Pérou", "France", "Allemagne", "Atlantide"];

async fn listing(State(hits): State<Hits>) -> Html<String> {
    record_hit(&hits, "listing");
    Html(common::listing_page(LISTED))
}

async fn sheet(State(hits): State<Hits>, Path(slug): Path<String>) -> Response {
    record_hit(&hits, &slug);
    match slug.as_str() {
        "france" => Html(common::sheet_page(&common::FRANCE)).into_response(),
        "allemagne" => Html(common::sheet_page(&common::ALLEMAGNE)).into_response(),
        "perou" => Html("<html><body><p>Fiche en cours de mise à jour</p></body></html>")
            .into_response(),
        "lent" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Html(common::sheet_page(&common::FRANCE)).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn record_hit(hits: &Hits, key: &str) {
    *hits.lock().unwrap().entry(key.to_string()).or_default() += 1;
}

/// Start the fake dashboard; returns its listing URL and the hit counter
async fn spawn_dashboard() -> (String, Hits) {
    let hits: Hits = Arc::default();
    let app = Router::new()
        .route("/dashboard", get(listing))
        .route("/dashboard/fiches-risques-pays/:slug", get(sheet))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/dashboard", addr), hits)
}

fn session(listing_url: &str, timeout_ms: u64) -> ScrapeSession {
    ScrapeSession::new(
        ScraperConfig::builder()
            .listing_url(listing_url)
            .timeout_ms(timeout_ms)
            .user_agent("coface-scraper-tests")
            .build(),
    )
    .unwrap()
}

/// Records every progress event for assertions
#[derive(Default)]
struct Recorder {
    total: usize,
    started: Vec<String>,
    done: Vec<String>,
    skipped: Vec<String>,
    finished: Option<usize>,
    exported: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn country_started(&mut self, country: &str, _url: &str) {
        self.started.push(country.to_string());
    }
    fn country_done(&mut self, record: &CountryRecord) {
        self.done.push(record.country.clone());
    }
    fn country_skipped(&mut self, country: &str, _error: &Error) {
        self.skipped.push(country.to_string());
    }
    fn finish(&mut self, scraped: usize) {
        self.finished = Some(scraped);
    }
    fn exported(&mut self, _report: &coface_scraper::ExportReport) {
        self.exported = true;
    }
}

#[tokio::test]
async fn test_list_countries_sorted() {
    let (url, _) = spawn_dashboard().await;
    let countries = session(&url, 5000).list_countries().await.unwrap();
    assert_eq!(countries, vec!["Allemagne", "Atlantide", "France", "Pérou"]);
}

#[tokio::test]
async fn test_export_end_to_end() {
    let (url, hits) = spawn_dashboard().await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.xlsx");

    let selection: Selection = ["France", "Allemagne"].into_iter().collect();
    let report = session(&url, 5000)
        .export(&selection, output.to_str().unwrap(), &mut NullProgress)
        .await
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.rows, 2);
    assert!(dir.path().join("out.csv").exists());
    assert!(dir.path().join("out_pros_cons.csv").exists());

    let mut reader = csv::Reader::from_path(dir.path().join("out.csv")).unwrap();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["France", "A3", "A1", "68,2", "42 330", "0,7", "2,4"],
            vec!["Allemagne", "A3", "A1", "84,5", "52 820", "0,2", "2,3"],
        ]
    );

    let mut reader = csv::Reader::from_path(dir.path().join("out_pros_cons.csv")).unwrap();
    let first = reader.records().next().unwrap().unwrap();
    assert_eq!(&first[0], "France");
    assert_eq!(&first[1], common::bullets(common::FRANCE.pros));
    assert_eq!(&first[2], common::bullets(common::FRANCE.cons));

    // one fetch per country sheet
    let hits = hits.lock().unwrap();
    assert_eq!(hits.get("france"), Some(&1));
    assert_eq!(hits.get("allemagne"), Some(&1));
    assert_eq!(hits.get("listing"), None);
}

#[tokio::test]
async fn test_missing_sheet_skips_country() {
    let (url, _) = spawn_dashboard().await;
    let selection: Selection = ["Atlantide", "France"].into_iter().collect();
    let mut progress = Recorder::default();

    let records = session(&url, 5000)
        .scrape_all(&selection, &mut progress)
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].country, "France");
    assert_eq!(progress.total, 2);
    assert_eq!(progress.started, vec!["Atlantide", "France"]);
    assert_eq!(progress.skipped, vec!["Atlantide"]);
    assert_eq!(progress.done, vec!["France"]);
    assert_eq!(progress.finished, Some(1));
}

#[tokio::test]
async fn test_not_found_status() {
    let (url, _) = spawn_dashboard().await;
    let err = session(&url, 5000)
        .scrape_country("Atlantide", &mut NullProgress)
        .await
        .unwrap_err();
    match err {
        Error::Fetch(FetchError::Status { status, reason }) => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_sheet_without_data_is_blank_record() {
    let (url, _) = spawn_dashboard().await;
    let record = session(&url, 5000)
        .scrape_country("Pérou", &mut NullProgress)
        .await
        .unwrap();
    assert_eq!(record, CountryRecord::new("Pérou"));
}

#[tokio::test]
async fn test_timeout() {
    let (url, _) = spawn_dashboard().await;
    let err = session(&url, 200)
        .scrape_country("Lent", &mut NullProgress)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fetch(FetchError::Timeout(200))));
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = session(&format!("http://{}/dashboard", addr), 2000)
        .list_countries()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fetch(FetchError::Network(_))));
}

#[tokio::test]
async fn test_missing_output_name_makes_no_request() {
    let (url, hits) = spawn_dashboard().await;
    let selection: Selection = ["France"].into_iter().collect();
    let mut progress = Recorder::default();

    let err = session(&url, 5000)
        .export(&selection, "", &mut progress)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::MissingOutputName)));
    assert!(progress.started.is_empty());
    assert!(!progress.exported);
    assert!(hits.lock().unwrap().is_empty());
}
