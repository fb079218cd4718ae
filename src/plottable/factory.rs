//! Dispatch from plot input to plottable variant.

use std::any::{type_name, Any};
use std::path::{Path, PathBuf};

use log::error;

use super::graph::PlotGraph;
use super::{Plottable, PlottableKind};
use crate::data::{DataFrame, GPlottable, GVariable, Series};
use crate::error::{Error, Result};
use crate::style::PlotOptions;

/// Everything an axe can plot.
///
/// Usually built implicitly through `From`: arrays, pairs of arrays or of
/// variables, `(DataFrame, x_column, y_column)` triples, [`GPlottable`]s,
/// [`PlotGraph`]s and image paths all convert.
#[derive(Debug, Clone)]
pub enum PlotInput {
    /// A graph.
    Graph(PlotGraph),
    /// A bare series, plotted against its index.
    Series(Series),
    /// An `(x, y)` pair of variables.
    Pair(GVariable, GVariable),
    /// Two columns of a data frame. An empty x column name means "row index".
    Frame {
        /// Source table.
        frame: DataFrame,
        /// Abscissa column.
        x: String,
        /// Ordinate column.
        y: String,
    },
    /// An explicit named variable pair.
    Variable(GPlottable),
    /// An image file.
    Image(PathBuf),
}

impl PlotInput {
    /// Runtime dispatch on the concrete type of `value`.
    ///
    /// Accepts every type with a `From` conversion listed on [`PlotInput`]
    /// that is `'static` (vectors of `f64`/`f32`/`i64`, pairs of `Vec<f64>`,
    /// [`Series`], [`GVariable`] pairs, [`GPlottable`], [`PlotGraph`],
    /// [`PathBuf`], [`PlotInput`] itself).
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedInput`] naming the type of `value` otherwise.
    pub fn from_any<T: Any>(value: T) -> Result<Self> {
        let boxed: Box<dyn Any> = Box::new(value);

        macro_rules! try_downcast {
            ($boxed:ident, $($ty:ty),+ $(,)?) => {
                $(
                    let $boxed = match $boxed.downcast::<$ty>() {
                        Ok(v) => return Ok(PlotInput::from(*v)),
                        Err(other) => other,
                    };
                )+
            };
        }

        try_downcast!(
            boxed,
            PlotInput,
            Vec<f64>,
            Vec<f32>,
            Vec<i64>,
            Series,
            (Vec<f64>, Vec<f64>),
            (GVariable, GVariable),
            GPlottable,
            PlotGraph,
            PathBuf,
        );
        drop(boxed);

        let type_name = type_name::<T>().to_string();
        error!("Don't know how to plot input of type '{type_name}'");
        Err(Error::UnsupportedInput { type_name })
    }
}

impl From<PlotGraph> for PlotInput {
    fn from(g: PlotGraph) -> Self {
        PlotInput::Graph(g)
    }
}

impl From<Series> for PlotInput {
    fn from(s: Series) -> Self {
        PlotInput::Series(s)
    }
}

impl From<Vec<f64>> for PlotInput {
    fn from(v: Vec<f64>) -> Self {
        PlotInput::Series(v.into())
    }
}

impl From<&[f64]> for PlotInput {
    fn from(v: &[f64]) -> Self {
        PlotInput::Series(v.into())
    }
}

impl From<Vec<f32>> for PlotInput {
    fn from(v: Vec<f32>) -> Self {
        PlotInput::Series(v.into())
    }
}

impl From<Vec<i64>> for PlotInput {
    fn from(v: Vec<i64>) -> Self {
        PlotInput::Series(v.into())
    }
}

impl From<(Vec<f64>, Vec<f64>)> for PlotInput {
    fn from((x, y): (Vec<f64>, Vec<f64>)) -> Self {
        PlotInput::Pair(GVariable::new(x), GVariable::new(y))
    }
}

impl From<(&[f64], &[f64])> for PlotInput {
    fn from((x, y): (&[f64], &[f64])) -> Self {
        PlotInput::Pair(GVariable::new(x), GVariable::new(y))
    }
}

impl From<(Series, Series)> for PlotInput {
    fn from((x, y): (Series, Series)) -> Self {
        PlotInput::Pair(GVariable::new(x), GVariable::new(y))
    }
}

impl From<(GVariable, GVariable)> for PlotInput {
    fn from((x, y): (GVariable, GVariable)) -> Self {
        PlotInput::Pair(x, y)
    }
}

impl From<(DataFrame, &str, &str)> for PlotInput {
    fn from((frame, x, y): (DataFrame, &str, &str)) -> Self {
        PlotInput::Frame { frame, x: x.to_string(), y: y.to_string() }
    }
}

impl From<GPlottable> for PlotInput {
    fn from(gp: GPlottable) -> Self {
        PlotInput::Variable(gp)
    }
}

impl From<PathBuf> for PlotInput {
    fn from(p: PathBuf) -> Self {
        PlotInput::Image(p)
    }
}

impl From<&Path> for PlotInput {
    fn from(p: &Path) -> Self {
        PlotInput::Image(p.to_path_buf())
    }
}

/// Builds the plottable variant suited to an input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottableFactory;

impl PlottableFactory {
    /// Wrap `input` into a [`Plottable`].
    ///
    /// The plottable is named after `options.name`; a [`GPlottable`] input
    /// falls back to its own name when none is given.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyData`] for empty series, [`Error::DataLengthMismatch`]
    /// when x and y differ in length, and data frame lookup errors.
    pub fn create(input: impl Into<PlotInput>, options: PlotOptions) -> Result<Plottable> {
        let explicit_name = options.name.clone().filter(|n| !n.is_empty());

        let (kind, fallback_name) = match input.into() {
            PlotInput::Graph(g) => (PlottableKind::Graph(g), String::new()),
            PlotInput::Image(p) => (PlottableKind::Image(p), String::new()),
            PlotInput::Series(s) => (generic(GPlottable::from_serie(s, None, ""))?, String::new()),
            PlotInput::Pair(x, y) => (generic(GPlottable::from_pair(x, y, ""))?, String::new()),
            PlotInput::Frame { frame, x, y } => {
                (generic(GPlottable::from_dataframe(&frame, &y, Some(&x))?)?, String::new())
            }
            PlotInput::Variable(gp) => {
                let name = gp.name.clone();
                (generic(gp)?, name)
            }
        };

        Ok(Plottable::new(explicit_name.unwrap_or(fallback_name), kind, options))
    }
}

fn generic(gp: GPlottable) -> Result<PlottableKind> {
    gp.validate()?;
    Ok(PlottableKind::Generic(gp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_series() {
        let p = PlottableFactory::create(vec![3.0, 4.0, 5.0], PlotOptions::new()).unwrap();
        let gp = p.gplottable().unwrap();
        assert_eq!(gp.xvar.data, Series::index(3));
        assert_eq!(p.name(), "");
    }

    #[test]
    fn test_pair_of_slices() {
        let x = [0.0, 1.0];
        let y = [2.0, 3.0];
        let p = PlottableFactory::create((&x[..], &y[..]), PlotOptions::new().name("line")).unwrap();
        assert_eq!(p.name(), "line");
        assert_eq!(p.kind().name(), "generic");
    }

    #[test]
    fn test_gplottable_name_fallback() {
        let gp = GPlottable::from_serie(vec![1.0], None, "altitude");
        let p = PlottableFactory::create(gp.clone(), PlotOptions::new()).unwrap();
        assert_eq!(p.name(), "altitude");

        let renamed = PlottableFactory::create(gp, PlotOptions::new().name("alt")).unwrap();
        assert_eq!(renamed.name(), "alt");
    }

    #[test]
    fn test_dataframe_triple() {
        let df = DataFrame::new().with_column("t", [0.0, 1.0]).with_column("v", [5.0, 6.0]);
        let p = PlottableFactory::create((df.clone(), "t", "v"), PlotOptions::new()).unwrap();
        assert_eq!(p.gplottable().unwrap().xvar.name, "t");

        let missing = PlottableFactory::create((df, "t", "nope"), PlotOptions::new());
        assert_eq!(missing.unwrap_err(), Error::MissingColumn("nope".into()));
    }

    #[test]
    fn test_graph_and_image() {
        let g = PlottableFactory::create(PlotGraph::from_edges(&[(0, 1, 1.0)]), PlotOptions::new()).unwrap();
        assert!(g.graph().is_some());

        let img = PlottableFactory::create(Path::new("earth.png"), PlotOptions::new()).unwrap();
        assert_eq!(img.kind().name(), "image");
    }

    #[test]
    fn test_empty_and_mismatched() {
        let empty = PlottableFactory::create(Vec::<f64>::new(), PlotOptions::new());
        assert_eq!(empty.unwrap_err(), Error::EmptyData);

        let mismatch = PlottableFactory::create((vec![0.0, 1.0], vec![0.0]), PlotOptions::new());
        assert_eq!(mismatch.unwrap_err(), Error::DataLengthMismatch { x_len: 2, y_len: 1 });
    }

    #[test]
    fn test_from_any_known_types() {
        assert!(matches!(PlotInput::from_any(vec![1.0f64]).unwrap(), PlotInput::Series(_)));
        assert!(matches!(PlotInput::from_any((vec![1.0], vec![2.0])).unwrap(), PlotInput::Pair(..)));
        assert!(matches!(PlotInput::from_any(PathBuf::from("a.png")).unwrap(), PlotInput::Image(_)));
        assert!(matches!(PlotInput::from_any(PlotGraph::new()).unwrap(), PlotInput::Graph(_)));
    }

    #[test]
    fn test_from_any_rejects_unknown_type() {
        let err = PlotInput::from_any(String::from("not data")).unwrap_err();
        assert_eq!(err, Error::UnsupportedInput { type_name: "alloc::string::String".into() });

        let err = PlotInput::from_any(42u8).unwrap_err();
        assert!(err.to_string().contains("u8"));
    }
}
