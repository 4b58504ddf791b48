//! Tabular data for chart specifications.
//!
//! [`DataFrame`] is a small columnar table with ordered, equal-length
//! columns. Numeric access coerces values to `f64`; missing values
//! (`Null`, NaN, empty text, text reading "NaN") are reported as `None` and skipped by summaries.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A value in a data frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(String),
    /// A missing value.
    Null,
}

impl DataValue {
    /// Get as f64, or None if not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether the value counts as missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            DataValue::Null => true,
            DataValue::Number(n) => n.is_nan(),
            DataValue::Text(s) => {
                let s = s.trim();
                s.is_empty() || s.parse::<f64>().is_ok_and(f64::is_nan)
            }
        }
    }

    /// Coerce to a float.
    ///
    /// `Ok(None)` for a missing value, `Err(())` for text that does not parse.
    fn coerce(&self) -> std::result::Result<Option<f64>, ()> {
        if self.is_missing() {
            return Ok(None);
        }
        match self {
            DataValue::Number(n) => Ok(Some(*n)),
            DataValue::Text(s) => s.trim().parse::<f64>().map(Some).map_err(|_| ()),
            DataValue::Null => Ok(None),
        }
    }

    /// Label used for grouping and legends, `None` when missing.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        match self {
            DataValue::Number(n) => Some(n.to_string()),
            DataValue::Text(s) => Some(s.clone()),
            DataValue::Null => None,
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Number(v)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DataValue::Null, Into::into)
    }
}

/// A columnar data frame with insertion-ordered columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    names: Vec<String>,
    columns: HashMap<String, Vec<DataValue>>,
    n_rows: usize,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from x and y arrays.
    #[must_use]
    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        let mut df = Self::new();
        df.add_column_f64("x", x);
        df.add_column_f64("y", y);
        df
    }

    /// Builder form of [`DataFrame::add_column`].
    #[must_use]
    pub fn with_column(mut self, name: &str, values: Vec<DataValue>) -> Self {
        self.add_column(name, values);
        self
    }

    /// Add or replace a column.
    ///
    /// Columns are kept rectangular: shorter columns are padded with `Null`.
    pub fn add_column(&mut self, name: &str, mut values: Vec<DataValue>) {
        if values.len() > self.n_rows {
            self.n_rows = values.len();
            for col in self.columns.values_mut() {
                col.resize(self.n_rows, DataValue::Null);
            }
        }
        values.resize(self.n_rows, DataValue::Null);

        if self.columns.insert(name.to_string(), values).is_none() {
            self.names.push(name.to_string());
        }
    }

    /// Add a numeric column.
    pub fn add_column_f64(&mut self, name: &str, data: &[f64]) {
        self.add_column(name, data.iter().map(|&v| DataValue::Number(v)).collect());
    }

    /// Add a text column.
    pub fn add_column_str(&mut self, name: &str, data: &[&str]) {
        self.add_column(name, data.iter().map(|&s| DataValue::from(s)).collect());
    }

    /// Get a column.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DataValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Get a column or fail with [`Error::MissingColumn`].
    pub fn column(&self, name: &str) -> Result<&[DataValue]> {
        self.get(name).ok_or_else(|| Error::missing_column(name))
    }

    /// Per-row numeric view of a column; `None` marks a missing value.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] or [`Error::NonNumericColumn`].
    pub fn numeric(&self, name: &str) -> Result<Vec<Option<f64>>> {
        self.column(name)?
            .iter()
            .map(|v| {
                v.coerce().map_err(|()| Error::NonNumericColumn {
                    column: name.to_string(),
                    value: v.as_str().unwrap_or_default().to_string(),
                })
            })
            .collect()
    }

    /// Non-missing values of a numeric column.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.numeric(name)?.into_iter().flatten().collect())
    }

    /// Per-row group labels of a column; `None` marks a missing value.
    pub fn labels(&self, name: &str) -> Result<Vec<Option<String>>> {
        Ok(self.column(name)?.iter().map(DataValue::label).collect())
    }

    /// Distinct non-missing labels of a column in order of first appearance.
    pub fn distinct(&self, name: &str) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        Ok(self
            .labels(name)?
            .into_iter()
            .flatten()
            .filter(|label| seen.insert(label.clone()))
            .collect())
    }

    /// Unpivot `value_vars` into long form with `variable` and `value` columns.
    ///
    /// Row order is column-major: every row of the first variable, then the
    /// second, and so on.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] if a listed column does not exist.
    pub fn melt(&self, value_vars: &[&str]) -> Result<DataFrame> {
        let mut variable = Vec::with_capacity(value_vars.len() * self.n_rows);
        let mut value = Vec::with_capacity(value_vars.len() * self.n_rows);

        for &var in value_vars {
            let col = self.column(var)?;
            variable.extend(std::iter::repeat_with(|| DataValue::from(var)).take(col.len()));
            value.extend(col.iter().cloned());
        }

        Ok(DataFrame::new().with_column("variable", variable).with_column("value", value))
    }

    /// Rename a column in place. Does nothing if `from` does not exist.
    pub fn rename(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        if let Some(values) = self.columns.remove(from) {
            self.names.retain(|n| n != to);
            if let Some(slot) = self.names.iter_mut().find(|n| *n == from) {
                *slot = to.to_string();
            }
            self.columns.insert(to.to_string(), values);
        }
    }

    /// Drop every row in which one of `names` is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a column does not exist.
    pub fn drop_missing(&self, names: &[&str]) -> Result<DataFrame> {
        let mut keep = vec![true; self.n_rows];
        for &name in names {
            for (slot, value) in keep.iter_mut().zip(self.column(name)?) {
                *slot &= !value.is_missing();
            }
        }
        if keep.iter().all(|&k| k) {
            return Ok(self.clone());
        }

        let mut df = DataFrame::new();
        for name in &self.names {
            let values = self.columns[name]
                .iter()
                .zip(&keep)
                .filter(|(_, &k)| k)
                .map(|(v, _)| v.clone())
                .collect();
            df.add_column(name, values);
        }
        Ok(df)
    }

    /// Replace a column's values with their group labels, so numeric codes
    /// match the text labels used by color scales and summary tables.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] if the column does not exist.
    pub fn relabel(&mut self, name: &str) -> Result<()> {
        let labels: Vec<DataValue> =
            self.labels(name)?.into_iter().map(|l| l.map_or(DataValue::Null, DataValue::Text)).collect();
        self.columns.insert(name.to_string(), labels);
        Ok(())
    }

    /// Value at `(row, column)`.
    #[must_use]
    pub fn value(&self, row: usize, name: &str) -> Option<&DataValue> {
        self.columns.get(name).and_then(|col| col.get(row))
    }

    /// Get number of rows.
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.n_rows
    }

    /// Get number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.names.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }
}
