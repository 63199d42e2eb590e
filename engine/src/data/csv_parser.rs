use crate::error::EngineError;
use csv::{ReaderBuilder, StringRecord};
use shared::models::PricePoint;
use std::io::Read;

use super::price_series::{parse_close, parse_date};

pub struct PriceCsvParser;

impl PriceCsvParser {
    // CSV Header: date,close (any order, extra columns ignored)
    // Example Row: 2024-01-02,185.64
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<PricePoint>, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let date_col = Self::column(&headers, "date")?;
        let close_col = Self::column(&headers, "close")?;

        let mut points = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result?;

            let date_str = Self::get_field(&record, date_col, "date", line)?;
            let close_str = Self::get_field(&record, close_col, "close", line)?;

            let date = parse_date(date_str)
                .map_err(|e| EngineError::DataFormatError(format!("line {}: {}", line, e)))?;
            let close = parse_close(close_str)
                .map_err(|e| EngineError::DataFormatError(format!("line {}: {}", line, e)))?;

            points.push(PricePoint { date, close });
        }
        Ok(points)
    }

    fn column(headers: &StringRecord, name: &str) -> Result<usize, EngineError> {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::DataFormatError(format!("Missing '{}' column in CSV header", name)))
    }

    fn get_field<'a>(
        record: &'a StringRecord,
        pos: usize,
        name: &str,
        line: usize,
    ) -> Result<&'a str, EngineError> {
        record
            .get(pos)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| EngineError::DataFormatError(format!("Missing '{}' field at line {}", name, line)))
    }
}
