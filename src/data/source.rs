#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::OhlcRecord;

const DEMO_JSON: &str = include_str!("demo_candles.json");

/// Where the chart gets its records from.
pub trait RecordSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Vec<OhlcRecord>>;
}

/// A JSON array of records on disk.
#[cfg(not(target_arch = "wasm32"))]
pub struct JsonFileSource {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<OhlcRecord>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        parse_records(&text).with_context(|| format!("Invalid record file {}", self.path.display()))
    }
}

/// Bundled July 2025 daily candles, used when no file is given.
pub struct DemoSource;

impl RecordSource for DemoSource {
    fn describe(&self) -> String {
        "built-in demo data".to_string()
    }

    fn load(&self) -> Result<Vec<OhlcRecord>> {
        parse_records(DEMO_JSON).context("Bundled demo data is corrupt")
    }
}

pub fn parse_records(json: &str) -> Result<Vec<OhlcRecord>> {
    let records: Vec<OhlcRecord> =
        serde_json::from_str(json).context("Expected a JSON array of OHLC records")?;
    Ok(records)
}
