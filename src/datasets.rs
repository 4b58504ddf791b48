//! Annotated observation tables.
//!
//! [`AnnotatedData`] holds a per-observation table (one row per cell) and
//! free-form string metadata. Tables load from CSV files with a header row
//! or from JSON arrays of records.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::grammar::{DataFrame, DataValue};

/// Metadata key recording the file a table was read from.
pub const SOURCE_KEY: &str = "source";

/// Observation table plus metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedData {
    /// One row per observation.
    pub obs: DataFrame,
    /// Free-form annotations.
    pub metadata: BTreeMap<String, String>,
}

impl AnnotatedData {
    /// Wrap an observation table.
    #[must_use]
    pub fn new(obs: DataFrame) -> Self {
        Self { obs, metadata: BTreeMap::new() }
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of observations.
    #[must_use]
    pub fn n_obs(&self) -> usize {
        self.obs.nrow()
    }

    /// Load a table, choosing the reader by file extension (`.csv` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns an error for other extensions or when the reader fails.
    pub fn read_obs<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Self::read_obs_csv(path),
            "json" => Self::read_obs_json(path),
            other => Err(Error::invalid(format!("unsupported table extension: .{other}"))),
        }
    }

    /// Load a CSV table with a header row.
    ///
    /// Fields that parse as floats become numbers, empty fields become
    /// missing, anything else is kept as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a record is malformed.
    pub fn read_obs_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(ToString::to_string).collect();

        let mut columns: Vec<Vec<DataValue>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record?;
            for (column, field) in columns.iter_mut().zip(record.iter()) {
                column.push(parse_field(field));
            }
        }

        let mut obs = DataFrame::new();
        for (name, values) in headers.iter().zip(columns) {
            obs.add_column(name, values);
        }
        log::info!("read {} observation(s) x {} column(s) from {}", obs.nrow(), obs.ncol(), path.display());
        Ok(Self::new(obs).with_metadata(SOURCE_KEY, &path.display().to_string()))
    }

    /// Load a JSON array of flat records.
    ///
    /// Columns appear in the order their keys are first seen. A key absent
    /// from a record is missing in that row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not an array of
    /// objects, or a record holds a nested array or object.
    pub fn read_obs_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let root: JsonValue = serde_json::from_str(&text)?;
        let records = root
            .as_array()
            .ok_or_else(|| Error::invalid("expected a top-level JSON array of records"))?;

        let mut names: Vec<String> = Vec::new();
        for (i, record) in records.iter().enumerate() {
            let object = record
                .as_object()
                .ok_or_else(|| Error::invalid(format!("record {i} is not a JSON object")))?;
            for key in object.keys() {
                if !names.contains(key) {
                    names.push(key.clone());
                }
            }
        }

        let mut obs = DataFrame::new();
        for name in &names {
            let values = records
                .iter()
                .enumerate()
                .map(|(i, record)| json_field(record.get(name), i, name))
                .collect::<Result<Vec<_>>>()?;
            obs.add_column(name, values);
        }
        log::info!("read {} observation(s) x {} column(s) from {}", obs.nrow(), obs.ncol(), path.display());
        Ok(Self::new(obs).with_metadata(SOURCE_KEY, &path.display().to_string()))
    }
}

fn parse_field(field: &str) -> DataValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return DataValue::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => DataValue::Number(n),
        Err(_) => DataValue::Text(field.to_string()),
    }
}

fn json_field(value: Option<&JsonValue>, row: usize, column: &str) -> Result<DataValue> {
    match value {
        None | Some(JsonValue::Null) => Ok(DataValue::Null),
        Some(JsonValue::Number(n)) => Ok(n.as_f64().map_or(DataValue::Null, DataValue::Number)),
        Some(JsonValue::String(s)) => Ok(DataValue::Text(s.clone())),
        Some(JsonValue::Bool(b)) => Ok(DataValue::Text(b.to_string())),
        Some(_) => {
            log::debug!("record {row} holds a nested value in '{column}'");
            Err(Error::invalid(format!("record {row}: '{column}' is not a scalar")))
        }
    }
}
