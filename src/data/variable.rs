//! Named, unit-tagged variables.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::fit::Polynomial;
use super::frame::DataFrame;
use super::series::Series;
use crate::error::{Error, Result};

/// A series with a name, a physical unit and the path it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct GVariable {
    /// Values.
    pub data: Series,
    /// Variable name (empty when anonymous).
    pub name: String,
    /// Physical unit, `"-"` when dimensionless or unknown.
    pub unit: String,
    /// Where the variable comes from, e.g. `"/speed"` for a data frame column.
    pub path: String,
}

impl Default for GVariable {
    fn default() -> Self {
        Self { data: Series::default(), name: String::new(), unit: "-".to_string(), path: String::new() }
    }
}

impl GVariable {
    /// Anonymous dimensionless variable.
    #[must_use]
    pub fn new(data: impl Into<Series>) -> Self {
        Self { data: data.into(), ..Self::default() }
    }

    /// Set the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the unit.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Same as [`GVariable::new`].
    #[must_use]
    pub fn from_serie(data: impl Into<Series>) -> Self {
        Self::new(data)
    }

    /// Read the column `name` of `df`. The path is `"/name"`.
    ///
    /// # Errors
    ///
    /// Fails if the column is missing or not numeric.
    pub fn from_dataframe(df: &DataFrame, name: &str) -> Result<Self> {
        Ok(Self::new(df.series(name)?).name(name).path(format!("/{name}")))
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the variable holds no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove the least-squares polynomial trend of degree `deg`.
    ///
    /// The trend is fitted against the sample index `0..n`.
    ///
    /// # Errors
    ///
    /// Fails if there are `deg` samples or fewer.
    pub fn detrend(&self, deg: usize) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::EmptyData);
        }
        let y = self.data.to_f64();
        let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
        let p = Polynomial::fit(&x, &y, deg)?;
        let residual: Vec<f64> = x.iter().zip(&y).map(|(&xi, &yi)| yi - p.eval(xi)).collect();

        Ok(Self {
            data: Series::Float(residual),
            name: format!("{} (detrended)", self.name),
            unit: self.unit.clone(),
            path: self.path.clone(),
        })
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self> {
        if self.len() != rhs.len() {
            return Err(Error::DataLengthMismatch { x_len: self.len(), y_len: rhs.len() });
        }
        let values = self.data.to_f64().into_iter().zip(rhs.data.to_f64()).map(|(a, b)| op(a, b)).collect();
        Ok(self.with_values(values))
    }

    fn with_values(&self, values: Vec<f64>) -> Self {
        Self { data: Series::Float(values), name: self.name.clone(), unit: self.unit.clone(), path: self.path.clone() }
    }
}

// Binary operators keep the left operand's name, unit and path.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for &GVariable {
            type Output = Result<GVariable>;

            fn $method(self, rhs: &GVariable) -> Result<GVariable> {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl $trait for GVariable {
            type Output = Result<GVariable>;

            fn $method(self, rhs: GVariable) -> Result<GVariable> {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);
impl_binary_op!(Mul, mul, *);
impl_binary_op!(Div, div, /);

impl Neg for &GVariable {
    type Output = GVariable;

    fn neg(self) -> GVariable {
        self.with_values(self.data.to_f64().into_iter().map(|v| -v).collect())
    }
}

impl Neg for GVariable {
    type Output = GVariable;

    fn neg(self) -> GVariable {
        -&self
    }
}
