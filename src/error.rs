//! Error types for the country risk scraper
//!
//! This module provides the error hierarchy using `thiserror`. Each concern
//! (fetching, extraction, export, configuration) has its own enum, all of which
//! convert into the top-level [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for scraper operations
#[derive(Error, Debug)]
pub enum Error {
    /// Page fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Content extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while retrieving a page
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport failure (DNS, connection refused, TLS...)
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// The server answered with something other than 200
    #[error("Status code error: {status} {reason}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
    },

    /// The body could not be read or decoded into a document
    #[error("Failed to parse webpage: {0}")]
    Parse(String),
}

impl FetchError {
    /// HTTP status code, when the failure came from the server
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Content extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A CSS selector failed to parse
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// The selector source text
        selector: String,
        /// Parser message
        reason: String,
    },
}

/// Errors raised while writing an output file
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created
    #[error("Failed to create file {}: {source}", .path.display())]
    Create {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A row could not be written or flushed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },
}

/// Configuration and input validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No output file name was given for an export
    #[error("No output filename specified")]
    MissingOutputName,

    /// A base URL could not be parsed
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Parser message
        reason: String,
    },

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, Error>;
