//! Tabular plot input.
//!
//! Provides a simple columnar data structure; columns are addressed by name and
//! keep their insertion order.

use chrono::{DateTime, Duration, Utc};

use super::series::Series;
use crate::error::{Error, Result};

/// A value in a data frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// A numeric value.
    Number(f64),
    /// A duration.
    Duration(Duration),
    /// A point in time.
    Timestamp(DateTime<Utc>),
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
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Number(v)
    }
}

impl From<Duration> for DataValue {
    fn from(v: Duration) -> Self {
        DataValue::Duration(v)
    }
}

impl From<DateTime<Utc>> for DataValue {
    fn from(v: DateTime<Utc>) -> Self {
        DataValue::Timestamp(v)
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

/// A simple columnar data frame.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// Columns in insertion order.
    columns: Vec<(String, Vec<DataValue>)>,
    /// Number of rows.
    n_rows: usize,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a column of values.
    pub fn add_column<V: Into<DataValue>>(&mut self, name: &str, data: impl IntoIterator<Item = V>) {
        let values: Vec<DataValue> = data.into_iter().map(Into::into).collect();
        self.n_rows = self.n_rows.max(values.len());
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, col)) => *col = values,
            None => self.columns.push((name.to_string(), values)),
        }
    }

    /// Builder form of [`DataFrame::add_column`].
    #[must_use]
    pub fn with_column<V: Into<DataValue>>(mut self, name: &str, data: impl IntoIterator<Item = V>) -> Self {
        self.add_column(name, data);
        self
    }

    /// Get a column.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DataValue]> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_slice())
    }

    /// Get a column as a typed series.
    ///
    /// The type comes from the first non-null value. Numeric columns keep
    /// missing values as NaN. Duration and timestamp columns stay typed; with
    /// missing values they become seconds (NaN where missing), the way lines
    /// read them. Anything else is rejected.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] if the column does not exist,
    /// [`Error::NonNumericColumn`] if its values cannot be plotted.
    pub fn series(&self, name: &str) -> Result<Series> {
        let col = self.get(name).ok_or_else(|| Error::MissingColumn(name.to_string()))?;

        match col.iter().find(|v| !matches!(v, DataValue::Null)) {
            Some(DataValue::Duration(_)) => time_column(
                col,
                name,
                |v| match v {
                    DataValue::Duration(d) => Some(*d),
                    _ => None,
                },
                Series::Duration,
                |d: Duration| d.num_seconds() as f64,
            ),
            Some(DataValue::Timestamp(_)) => time_column(
                col,
                name,
                |v| match v {
                    DataValue::Timestamp(t) => Some(*t),
                    _ => None,
                },
                Series::Timestamp,
                |t: DateTime<Utc>| t.timestamp() as f64,
            ),
            _ => col
                .iter()
                .map(|v| match v {
                    DataValue::Number(n) => Ok(*n),
                    DataValue::Null => Ok(f64::NAN),
                    _ => Err(Error::NonNumericColumn(name.to_string())),
                })
                .collect::<Result<Vec<_>>>()
                .map(Series::Float),
        }
    }

    /// Get number of rows.
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.n_rows
    }

    /// Get number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Get column names in insertion order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }
}

fn time_column<T: Copy>(
    col: &[DataValue],
    name: &str,
    pick: impl Fn(&DataValue) -> Option<T>,
    wrap: impl FnOnce(Vec<T>) -> Series,
    seconds: impl Fn(T) -> f64,
) -> Result<Series> {
    let non_numeric = || Error::NonNumericColumn(name.to_string());

    if col.iter().any(|v| matches!(v, DataValue::Null)) {
        return col
            .iter()
            .map(|v| match v {
                DataValue::Null => Ok(f64::NAN),
                other => pick(other).map(&seconds).ok_or_else(non_numeric),
            })
            .collect::<Result<Vec<_>>>()
            .map(Series::Float);
    }
    col.iter().map(|v| pick(v).ok_or_else(non_numeric)).collect::<Result<Vec<_>>>().map(wrap)
}
