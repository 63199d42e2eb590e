// Loading and normalizing the `{date, close}` series handed to the overlay
use crate::error::EngineError;
use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use shared::models::{AdvisorChart, PricePoint};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::csv_parser::PriceCsvParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// `.csv` files are CSV, everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

/// Accepts either a bare array of points or the advisor response envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    Points(Vec<RawPoint>),
    Advisor(AdvisorEnvelope),
}

#[derive(Deserialize)]
struct AdvisorEnvelope {
    #[serde(default)]
    ticker: Option<String>,
    chart: Vec<RawPoint>,
}

#[derive(Deserialize)]
struct RawPoint {
    date: String,
    close: f64,
}

/// Parses an ISO trading date, also taking the date part of an RFC 3339
/// timestamp.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", s, e))
}

pub fn parse_close(s: &str) -> Result<f64> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| anyhow!("Failed to parse close '{}': {}", s, e))?;
    check_close(value)
}

fn check_close(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(anyhow!("Close must be a finite number, got {}", value))
    }
}

pub fn load_json_from_reader<R: Read>(reader: R) -> Result<AdvisorChart, EngineError> {
    let payload: JsonPayload = serde_json::from_reader(reader)?;
    let (ticker, raw) = match payload {
        JsonPayload::Points(points) => (None, points),
        JsonPayload::Advisor(envelope) => (envelope.ticker, envelope.chart),
    };

    let mut chart = Vec::with_capacity(raw.len());
    for (idx, point) in raw.into_iter().enumerate() {
        let record = idx + 1;
        let date = parse_date(&point.date)
            .map_err(|e| EngineError::DataFormatError(format!("record {}: {}", record, e)))?;
        let close = check_close(point.close)
            .map_err(|e| EngineError::DataFormatError(format!("record {}: {}", record, e)))?;
        chart.push(PricePoint { date, close });
    }

    Ok(AdvisorChart { ticker, chart })
}

pub fn load_from_reader<R: Read>(reader: R, format: InputFormat) -> Result<AdvisorChart, EngineError> {
    let mut chart = match format {
        InputFormat::Json => load_json_from_reader(reader)?,
        InputFormat::Csv => AdvisorChart {
            ticker: None,
            chart: PriceCsvParser::load_from_reader(reader)?,
        },
    };
    normalize(&mut chart.chart);
    Ok(chart)
}

pub fn load_from_path(path: &Path) -> Result<AdvisorChart, EngineError> {
    let file = File::open(path)?;
    let format = InputFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "Loading price series");
    load_from_reader(BufReader::new(file), format)
}

/// Sorts by date and keeps the last record for a repeated date.
pub fn normalize(points: &mut Vec<PricePoint>) {
    if !points.windows(2).all(|w| w[0].date <= w[1].date) {
        tracing::warn!(count = points.len(), "Price series out of order, sorting by date");
        // Stable sort keeps input order among equal dates.
        points.sort_by_key(|p| p.date);
    }

    let before = points.len();
    let mut deduped: Vec<PricePoint> = Vec::with_capacity(before);
    for point in points.drain(..) {
        match deduped.last_mut() {
            Some(last) if last.date == point.date => *last = point,
            _ => deduped.push(point),
        }
    }
    *points = deduped;

    if points.len() != before {
        tracing::warn!(
            dropped = before - points.len(),
            "Duplicate dates in price series, kept the last record for each"
        );
    }
}
