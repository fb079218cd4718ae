//! Pairs of named variables ready to become lines.

use super::frame::DataFrame;
use super::series::Series;
use super::variable::GVariable;
use crate::error::{Error, Result};
use crate::plottable::MLine;
use crate::style::Transform;

/// An `(x, y)` pair of variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GPlottable {
    /// Name of the pair.
    pub name: String,
    /// Abscissa.
    pub xvar: GVariable,
    /// Ordinate.
    pub yvar: GVariable,
}

impl GPlottable {
    /// Build from an ordinate series and an optional abscissa.
    ///
    /// Without abscissa, x is the sample index `0..n`.
    #[must_use]
    pub fn from_serie(sy: impl Into<Series>, sx: Option<Series>, name: impl Into<String>) -> Self {
        let yvar = GVariable::from_serie(sy);
        let xvar = match sx {
            Some(sx) => GVariable::from_serie(sx),
            None => GVariable::new(Series::index(yvar.len())),
        };
        Self { name: name.into(), xvar, yvar }
    }

    /// Build from two variables.
    #[must_use]
    pub fn from_pair(xvar: GVariable, yvar: GVariable, name: impl Into<String>) -> Self {
        Self { name: name.into(), xvar, yvar }
    }

    /// Read columns of a data frame. An empty or absent `xname` uses the row index.
    ///
    /// The pair is named after the y column.
    ///
    /// # Errors
    ///
    /// Fails if a column is missing or not numeric.
    pub fn from_dataframe(df: &DataFrame, yname: &str, xname: Option<&str>) -> Result<Self> {
        let yvar = GVariable::from_dataframe(df, yname)?;
        let xvar = match xname {
            Some(x) if !x.is_empty() => GVariable::from_dataframe(df, x)?,
            _ => GVariable::new(Series::index(yvar.len())),
        };
        Ok(Self { name: yname.to_string(), xvar, yvar })
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.yvar.len()
    }

    /// Whether the pair has no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.yvar.is_empty()
    }

    /// Check that the pair can be drawn: non-empty, same number of x and y values.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyData`] or [`Error::DataLengthMismatch`].
    pub fn validate(&self) -> Result<()> {
        if self.xvar.is_empty() || self.yvar.is_empty() {
            return Err(Error::EmptyData);
        }
        if self.xvar.len() != self.yvar.len() {
            return Err(Error::DataLengthMismatch { x_len: self.xvar.len(), y_len: self.yvar.len() });
        }
        Ok(())
    }

    /// Detrend the ordinate, keeping the abscissa.
    ///
    /// # Errors
    ///
    /// See [`GVariable::detrend`].
    pub fn detrend(&self, deg: usize) -> Result<Self> {
        Ok(Self { name: self.name.clone(), xvar: self.xvar.clone(), yvar: self.yvar.detrend(deg)? })
    }

    /// Turn the pair into drawable arrays.
    ///
    /// Time-like values are converted to seconds first, then `transform` is
    /// applied to y. Empty units are reported as `"-"`.
    #[must_use]
    pub fn make_line(&self, transform: Option<&Transform>) -> MLine {
        let x = self.xvar.data.to_f64();
        let mut y = self.yvar.data.to_f64();
        if let Some(t) = transform {
            y = t.apply(&y);
        }

        MLine {
            x,
            y,
            x_name: self.xvar.name.clone(),
            x_unit: unit_or_dash(&self.xvar.unit),
            y_name: self.yvar.name.clone(),
            y_unit: unit_or_dash(&self.yvar.unit),
        }
    }
}

fn unit_or_dash(unit: &str) -> String {
    if unit.is_empty() {
        "-".to_string()
    } else {
        unit.to_string()
    }
}
