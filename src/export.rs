//! CSV export
//!
//! Records are written to two files derived from one output name:
//! `{stem}.csv` (ratings and indicators) and `{stem}_pros_cons.csv`. The stem
//! is the file name up to its first `.`, so `out.xlsx` becomes `out.csv`, not
//! `out.xlsx.csv`.
//!
//! The two files are written independently. A failure on one is reported and
//! does not stop the other; a partially written file is left in place.

use crate::error::{ConfigError, ExportError};
use crate::record::{CountryRecord, INDICATOR_HEADERS, PROS_CONS_HEADERS};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

const PROS_CONS_SUFFIX: &str = "_pros_cons";

/// Destination paths of one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Ratings and indicators file
    pub indicators: PathBuf,
    /// Pros/cons file
    pub pros_cons: PathBuf,
}

impl ExportPaths {
    /// Derive both paths from a user-supplied output name. The parent
    /// directory, if any, is kept.
    pub fn from_output_name(name: &str) -> Result<Self, ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::MissingOutputName);
        }

        let path = Path::new(name);
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = file_name.split('.').next().unwrap_or_default();
        if stem.is_empty() {
            return Err(ConfigError::MissingOutputName);
        }

        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            indicators: parent.join(format!("{}.csv", stem)),
            pros_cons: parent.join(format!("{}{}.csv", stem, PROS_CONS_SUFFIX)),
        })
    }
}

/// Outcome of an export
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Files written completely
    pub written: Vec<PathBuf>,
    /// Files that failed, with the cause
    pub failures: Vec<ExportError>,
    /// Data rows per file
    pub rows: usize,
}

impl ExportReport {
    /// Whether both files were written
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// CSV record writer
pub struct RecordWriter;

impl RecordWriter {
    /// Write both files. Each is attempted regardless of the other's outcome.
    #[instrument(skip(records))]
    pub fn write(records: &[CountryRecord], paths: &ExportPaths) -> ExportReport {
        let mut report = ExportReport {
            rows: records.len(),
            ..ExportReport::default()
        };

        let outcomes = [
            (
                &paths.indicators,
                Self::write_indicators(records, &paths.indicators),
            ),
            (
                &paths.pros_cons,
                Self::write_pros_cons(records, &paths.pros_cons),
            ),
        ];

        for (path, outcome) in outcomes {
            match outcome {
                Ok(()) => {
                    info!("Wrote {} rows to {}", records.len(), path.display());
                    report.written.push(path.clone());
                }
                Err(e) => {
                    error!("{}", e);
                    report.failures.push(e);
                }
            }
        }
        report
    }

    /// Write the ratings and indicators file
    pub fn write_indicators(records: &[CountryRecord], path: &Path) -> Result<(), ExportError> {
        write_table(
            path,
            INDICATOR_HEADERS,
            records.iter().map(CountryRecord::indicator_row),
        )
    }

    /// Write the pros/cons file
    pub fn write_pros_cons(records: &[CountryRecord], path: &Path) -> Result<(), ExportError> {
        write_table(
            path,
            PROS_CONS_HEADERS,
            records.iter().map(CountryRecord::pros_cons_row),
        )
    }
}

fn write_table<'r, const N: usize>(
    path: &Path,
    headers: [&str; N],
    rows: impl Iterator<Item = [&'r str; N]>,
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let write_err = |source: csv::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(headers).map_err(write_err)?;
    for row in rows {
        writer.write_record(row).map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(e.into()))
}
