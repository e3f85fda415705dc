//! Append-only CSV summaries of completed sessions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::aggregate::SessionAggregate;
use super::analytics::SessionAnalytics;
use super::domain::BankId;

/// One CSV row. Construct averages are embedded as a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub timestamp: String,
    pub bank: &'static str,
    pub overall_average: String,
    pub overall_band: &'static str,
    pub median_latency_seconds: Option<String>,
    pub construct_averages: String,
}

impl SummaryRow {
    pub fn new(
        timestamp: DateTime<Utc>,
        bank: BankId,
        aggregate: &SessionAggregate,
        analytics: Option<&SessionAnalytics>,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            timestamp: timestamp.to_rfc3339(),
            bank: bank.label(),
            overall_average: format!("{:.2}", aggregate.overall_average),
            overall_band: aggregate.band.label(),
            median_latency_seconds: analytics
                .and_then(|analytics| analytics.median_latency_seconds)
                .map(|median| format!("{median:.3}")),
            construct_averages: serde_json::to_string(&aggregate.averages)?,
        })
    }
}

pub struct SummaryWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    /// Writer that emits the header before its first row.
    pub fn new(writer: W) -> Self {
        Self::with_header(writer, true)
    }

    pub fn with_header(writer: W, header: bool) -> Self {
        let inner = csv::WriterBuilder::new()
            .has_headers(header)
            .from_writer(writer);
        Self { inner }
    }

    pub fn append(&mut self, row: &SummaryRow) -> Result<(), ExportError> {
        self.inner.serialize(row)?;
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, ExportError> {
        self.inner
            .into_inner()
            .map_err(|error| ExportError::Io(error.into_error()))
    }
}

/// Append one row to a CSV file, writing the header only when the file is new or empty.
pub fn append_to_path(path: impl AsRef<Path>, row: &SummaryRow) -> Result<(), ExportError> {
    let path = path.as_ref();
    let needs_header = std::fs::metadata(path)
        .map(|metadata| metadata.len() == 0)
        .unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    SummaryWriter::with_header(file, needs_header).append(row)
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode summary row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode construct averages: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::TimeZone;

    use super::*;
    use crate::assessment::aggregate::SessionAccumulator;
    use crate::assessment::domain::{ConstructCode, ScoreVector};

    fn row() -> SummaryRow {
        let mut accumulator = SessionAccumulator::new();
        let mut scores = ScoreVector::new();
        scores.insert(ConstructCode::from("SCL"), 3);
        accumulator.accumulate_scores(&scores);
        let aggregate = accumulator.finalize(&BTreeSet::new());
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().expect("valid");
        SummaryRow::new(timestamp, BankId::Applicant, &aggregate, None).expect("row")
    }

    #[test]
    fn header_is_written_once() {
        let mut writer = SummaryWriter::new(Vec::new());
        writer.append(&row()).expect("first");
        writer.append(&row()).expect("second");
        let output = String::from_utf8(writer.into_inner().expect("flush")).expect("utf8");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "timestamp,bank,overall_average,overall_band,median_latency_seconds,construct_averages"
        );
        assert!(lines[1].contains("applicant,3.00,High,,"));
        assert!(lines[1].ends_with(r#""{""SCL"":3.0}""#));
    }

    #[test]
    fn appending_to_a_path_keeps_a_single_header() {
        let path = std::env::temp_dir().join(format!("epq-summary-{}.csv", std::process::id()));
        let _ = std::fs::remove_file(&path);

        append_to_path(&path, &row()).expect("first append");
        append_to_path(&path, &row()).expect("second append");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents.matches("timestamp,bank").count(), 1);
        assert_eq!(contents.lines().count(), 3);
        let _ = std::fs::remove_file(&path);
    }
}
