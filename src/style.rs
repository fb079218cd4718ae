//! Plot styling options.
//!
//! [`PlotOptions`] carries what renderers need to draw a plottable (color,
//! marker, line style, ...) plus free-form key/values passed through untouched.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::color::Rgba;
use crate::error::Result;

/// A free-form style value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StyleValue {
    /// A flag.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        StyleValue::Bool(v)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Number(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Text(v)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(v) => write!(f, "{v}"),
            StyleValue::Number(v) => write!(f, "{v}"),
            StyleValue::Text(v) => f.write_str(v),
        }
    }
}

/// A function applied to the y values of a line when it is made.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&[f64]) -> Vec<f64> + Send + Sync>);

impl Transform {
    /// Wrap a function over the whole y array.
    pub fn new(f: impl Fn(&[f64]) -> Vec<f64> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Wrap a function applied to each y value.
    pub fn elementwise(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(move |values| values.iter().map(|&v| f(v)).collect())
    }

    /// Apply the transform.
    #[must_use]
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        (self.0)(values)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// Options of a plot command.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlotOptions {
    /// Name of the plottable, for legends and identification.
    pub name: Option<String>,
    /// Line / marker color.
    pub color: Option<Rgba>,
    /// Marker symbol (`"+"`, `"o"`, ...).
    pub marker: Option<String>,
    /// Line style (`"-"`, `"--"`, `""` for none).
    pub linestyle: Option<String>,
    /// Line width.
    pub linewidth: Option<f64>,
    /// Draw against a twin x axis.
    pub twinx: bool,
    /// Draw against a twin y axis.
    pub twiny: bool,
    /// Transform applied to y values.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub transform: Option<Transform>,
    /// Other renderer-specific options.
    pub extra: BTreeMap<String, StyleValue>,
}

impl PlotOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plottable name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the color from a hex string or color name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidColor`] if the color cannot be parsed.
    pub fn color_str(self, color: &str) -> Result<Self> {
        Ok(self.color(color.parse()?))
    }

    /// Set the marker.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Set the line style.
    #[must_use]
    pub fn linestyle(mut self, linestyle: impl Into<String>) -> Self {
        self.linestyle = Some(linestyle.into());
        self
    }

    /// Set the line width.
    #[must_use]
    pub fn linewidth(mut self, width: f64) -> Self {
        self.linewidth = Some(width);
        self
    }

    /// Draw against a twin x axis.
    #[must_use]
    pub fn twinx(mut self) -> Self {
        self.twinx = true;
        self
    }

    /// Draw against a twin y axis.
    #[must_use]
    pub fn twiny(mut self) -> Self {
        self.twiny = true;
        self
    }

    /// Apply `transform` to y values when the line is made.
    #[must_use]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Set a renderer-specific option.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Every option that is set, as sorted `key → text` pairs.
    ///
    /// The transform is listed as `"<fn>"`.
    #[must_use]
    pub fn properties(&self) -> BTreeMap<String, String> {
        let mut props: BTreeMap<String, String> =
            self.extra.iter().map(|(k, v)| (k.clone(), v.to_string())).collect();

        let named = [
            ("name", self.name.clone()),
            ("color", self.color.map(|c| c.to_string())),
            ("marker", self.marker.clone()),
            ("linestyle", self.linestyle.clone()),
            ("linewidth", self.linewidth.map(|w| w.to_string())),
            ("transform", self.transform.as_ref().map(|_| "<fn>".to_string())),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                props.insert(key.to_string(), value);
            }
        }
        if self.twinx {
            props.insert("twinx".to_string(), "true".to_string());
        }
        if self.twiny {
            props.insert("twiny".to_string(), "true".to_string());
        }
        props
    }
}
