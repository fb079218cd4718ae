//! Homogeneous numeric columns.

use chrono::{DateTime, Duration, Utc};

/// A column of plottable values.
///
/// Time-like series (durations, timestamps) are kept as such until a line is
/// made, where they are converted to seconds.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Floating point values.
    Float(Vec<f64>),
    /// Integer values.
    Int(Vec<i64>),
    /// Durations.
    Duration(Vec<Duration>),
    /// Points in time.
    Timestamp(Vec<DateTime<Utc>>),
}

impl Default for Series {
    fn default() -> Self {
        Series::Float(Vec::new())
    }
}

impl Series {
    /// `0, 1, ..., n - 1`, the implicit abscissa of a bare series.
    #[must_use]
    pub fn index(n: usize) -> Self {
        Series::Int((0..n as i64).collect())
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Series::Float(v) => v.len(),
            Series::Int(v) => v.len(),
            Series::Duration(v) => v.len(),
            Series::Timestamp(v) => v.len(),
        }
    }

    /// Whether the series holds no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether values are durations or timestamps.
    #[must_use]
    pub fn is_time_like(&self) -> bool {
        matches!(self, Series::Duration(_) | Series::Timestamp(_))
    }

    /// Short name of the value type.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Series::Float(_) => "float",
            Series::Int(_) => "int",
            Series::Duration(_) => "duration",
            Series::Timestamp(_) => "timestamp",
        }
    }

    /// Values as `f64`.
    ///
    /// Durations become whole seconds and timestamps whole seconds since the
    /// Unix epoch; the sub-second part is truncated.
    #[must_use]
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            Series::Float(v) => v.clone(),
            Series::Int(v) => v.iter().map(|&i| i as f64).collect(),
            Series::Duration(v) => v.iter().map(|d| d.num_seconds() as f64).collect(),
            Series::Timestamp(v) => v.iter().map(|t| t.timestamp() as f64).collect(),
        }
    }
}

impl From<Vec<f64>> for Series {
    fn from(v: Vec<f64>) -> Self {
        Series::Float(v)
    }
}

impl From<&[f64]> for Series {
    fn from(v: &[f64]) -> Self {
        Series::Float(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Series {
    fn from(v: [f64; N]) -> Self {
        Series::Float(v.to_vec())
    }
}

impl From<Vec<f32>> for Series {
    fn from(v: Vec<f32>) -> Self {
        Series::Float(v.into_iter().map(f64::from).collect())
    }
}

impl From<Vec<i64>> for Series {
    fn from(v: Vec<i64>) -> Self {
        Series::Int(v)
    }
}

impl From<Vec<i32>> for Series {
    fn from(v: Vec<i32>) -> Self {
        Series::Int(v.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<Duration>> for Series {
    fn from(v: Vec<Duration>) -> Self {
        Series::Duration(v)
    }
}

impl From<Vec<DateTime<Utc>>> for Series {
    fn from(v: Vec<DateTime<Utc>>) -> Self {
        Series::Timestamp(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_index() {
        assert_eq!(Series::index(3), Series::Int(vec![0, 1, 2]));
        assert!(Series::index(0).is_empty());
    }

    #[test]
    fn test_int_to_f64() {
        let s: Series = vec![1i64, -2, 3].into();
        assert_eq!(s.to_f64(), vec![1.0, -2.0, 3.0]);
        assert!(!s.is_time_like());
    }

    #[test]
    fn test_durations_truncate_to_seconds() {
        let s: Series = vec![Duration::milliseconds(1500), Duration::minutes(2)].into();
        assert!(s.is_time_like());
        assert_eq!(s.to_f64(), vec![1.0, 120.0]);
    }

    #[test]
    fn test_timestamps_are_epoch_seconds() {
        let t = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
        let s: Series = vec![t].into();
        assert_eq!(s.kind(), "timestamp");
        assert_eq!(s.to_f64(), vec![1_700_000_000.0]);
    }

    #[test]
    fn test_f32_widening() {
        let s: Series = vec![0.5f32, 1.5].into();
        assert_eq!(s.to_f64(), vec![0.5, 1.5]);
    }

    #[test]
    fn test_default_is_empty_float() {
        let s = Series::default();
        assert_eq!(s.kind(), "float");
        assert_eq!(s.len(), 0);
    }
}
