//! Dashboard document kind
//!
//! Typed records for dashboard documents and the JSON codec around them.
//! Decoding is the only validation performed: required fields must be present
//! and enum fields must hold one of their literals.

use std::io::Read;

use serde_json::Value;
use thiserror::Error;

mod dashboard_types;

pub use dashboard_types::*;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("could not parse dashboard JSON: {0}")]
    ParseJson(#[source] serde_json::Error),
    #[error("could not read dashboard document: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode dashboard: {0}")]
    Encode(#[source] serde_json::Error),
}

impl DashboardError {
    /// Line and column of a decoding error, when the decoder reported one.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::ParseJson(e) if e.line() > 0 => Some((e.line(), e.column())),
            _ => None,
        }
    }
}

pub fn from_str(raw: &str) -> Result<Dashboard, DashboardError> {
    serde_json::from_str::<Dashboard>(raw).map_err(DashboardError::ParseJson)
}

pub fn from_slice(raw: &[u8]) -> Result<Dashboard, DashboardError> {
    serde_json::from_slice::<Dashboard>(raw).map_err(DashboardError::ParseJson)
}

pub fn from_reader(mut reader: impl Read) -> Result<Dashboard, DashboardError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    from_slice(&raw)
}

pub fn from_value(value: Value) -> Result<Dashboard, DashboardError> {
    serde_json::from_value::<Dashboard>(value).map_err(DashboardError::ParseJson)
}

pub fn to_string(dashboard: &Dashboard) -> Result<String, DashboardError> {
    serde_json::to_string(dashboard).map_err(DashboardError::Encode)
}

pub fn to_string_pretty(dashboard: &Dashboard) -> Result<String, DashboardError> {
    serde_json::to_string_pretty(dashboard).map_err(DashboardError::Encode)
}

pub fn to_value(dashboard: &Dashboard) -> Result<Value, DashboardError> {
    serde_json::to_value(dashboard).map_err(DashboardError::Encode)
}
