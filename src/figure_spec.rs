//! Data-free figure descriptions.
//!
//! A [`FigureSpec`] lays out axes and names the variables each line draws.
//! [`FigureSpec::build`] instantiates it against any [`VariableSource`].
//!
//! ```
//! use soyut::figure_spec::{FigureSpec, LineSpec};
//! use soyut::{DataFrame, PlotOptions};
//!
//! let spec = FigureSpec::for_one_axe_multi_lines([
//!     LineSpec::new("th_mes").options(PlotOptions::new().linestyle("").marker("+")),
//! ]);
//!
//! let df = DataFrame::new().with_column("t", [0.0, 1.0]).with_column("th_mes", [0.1, 0.2]);
//! let fig = spec.build(&df).unwrap();
//! assert_eq!(fig.axes()[0].plottables()[0].name(), "th_mes");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use log::debug;

use crate::axe::AxeOptions;
use crate::data::{DataFrame, GVariable};
use crate::error::{Error, Result};
use crate::figure::{AxeId, Figure};
use crate::projection::AxeProjection;
use crate::style::PlotOptions;

/// Name of the abscissa used when a line does not give one.
pub const DEFAULT_VARX: &str = "t";

const RULE: &str = "==========";
const THIN_RULE: &str = "----------";

// ============================================================================
// Variable sources
// ============================================================================

/// Where figure descriptions find their variables by name.
pub trait VariableSource {
    /// Look up variable `name`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] when no variable has this name.
    fn variable(&self, name: &str) -> Result<GVariable>;
}

impl VariableSource for DataFrame {
    fn variable(&self, name: &str) -> Result<GVariable> {
        GVariable::from_dataframe(self, name)
    }
}

impl VariableSource for HashMap<String, GVariable> {
    fn variable(&self, name: &str) -> Result<GVariable> {
        self.get(name).cloned().ok_or_else(|| Error::MissingColumn(name.to_string()))
    }
}

impl VariableSource for BTreeMap<String, GVariable> {
    fn variable(&self, name: &str) -> Result<GVariable> {
        self.get(name).cloned().ok_or_else(|| Error::MissingColumn(name.to_string()))
    }
}

// ============================================================================
// Descriptions
// ============================================================================

/// One line: the names of its variables and its style.
#[derive(Debug, Clone)]
pub struct LineSpec {
    /// Abscissa variable.
    pub varx: String,
    /// Ordinate variable.
    pub vary: String,
    /// Style.
    pub options: PlotOptions,
}

impl LineSpec {
    /// Plot `vary` against `"t"`.
    #[must_use]
    pub fn new(vary: impl Into<String>) -> Self {
        Self { varx: DEFAULT_VARX.to_string(), vary: vary.into(), options: PlotOptions::new() }
    }

    /// Set the abscissa variable.
    #[must_use]
    pub fn varx(mut self, varx: impl Into<String>) -> Self {
        self.varx = varx.into();
        self
    }

    /// Set the style.
    #[must_use]
    pub fn options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }

    fn properties(&self) -> BTreeMap<String, String> {
        let mut props = self.options.properties();
        props.insert("varx".to_string(), self.varx.clone());
        props.insert("vary".to_string(), self.vary.clone());
        props
    }
}

/// One axe: its place in the grid and its lines.
#[derive(Debug, Clone)]
pub struct AxeSpec {
    /// Title.
    pub title: String,
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
    /// Projection.
    pub projection: AxeProjection,
    /// Index, in the figure description, of the axe to share x with.
    pub share_x: Option<usize>,
    /// Lines to draw.
    pub lines: Vec<LineSpec>,
}

impl AxeSpec {
    /// Rectilinear axe at the top-left cell.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            row: 0,
            col: 0,
            projection: AxeProjection::Rectilinear,
            share_x: None,
            lines: Vec::new(),
        }
    }

    /// Place the axe at `(row, col)`.
    #[must_use]
    pub fn at(mut self, row: usize, col: usize) -> Self {
        self.row = row;
        self.col = col;
        self
    }

    /// Set the projection.
    #[must_use]
    pub fn projection(mut self, projection: AxeProjection) -> Self {
        self.projection = projection;
        self
    }

    /// Share x with the `index`-th axe of the figure description.
    #[must_use]
    pub fn share_x(mut self, index: usize) -> Self {
        self.share_x = Some(index);
        self
    }

    /// Add a line.
    #[must_use]
    pub fn line(mut self, line: LineSpec) -> Self {
        self.lines.push(line);
        self
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        writeln!(f, "{pad}{RULE} Axe '{}' {RULE}", self.title)?;

        let share_x = self.share_x.map_or_else(|| "None".to_string(), |i| i.to_string());
        let props = [
            ("col", self.col.to_string()),
            ("projection", self.projection.to_string()),
            ("row", self.row.to_string()),
            ("share_x", share_x),
        ];
        for (key, value) in props {
            writeln!(f, "{pad}{key}:\t'{value}'")?;
        }

        for (k, line) in self.lines.iter().enumerate() {
            writeln!(f, "{pad}{THIN_RULE} Line #{} {THIN_RULE}", k + 1)?;
            for (key, value) in line.properties() {
                writeln!(f, "{pad}{pad}{key}:\t'{value}'")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for AxeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// A whole figure, without data.
#[derive(Debug, Clone)]
pub struct FigureSpec {
    /// Figure title.
    pub title: String,
    /// Grid rows.
    pub nrows: usize,
    /// Grid columns.
    pub ncols: usize,
    /// Axes, in creation order.
    pub axes: Vec<AxeSpec>,
}

impl FigureSpec {
    /// Empty description with an `nrows × ncols` grid.
    #[must_use]
    pub fn new(title: impl Into<String>, nrows: usize, ncols: usize) -> Self {
        Self { title: title.into(), nrows, ncols, axes: Vec::new() }
    }

    /// Add an axe.
    #[must_use]
    pub fn axe(mut self, axe: AxeSpec) -> Self {
        self.axes.push(axe);
        self
    }

    /// All `lines` on a single rectilinear axe titled `"Axe"`, in a 1×1
    /// figure titled `"Figure"`.
    #[must_use]
    pub fn for_one_axe_multi_lines(lines: impl IntoIterator<Item = LineSpec>) -> Self {
        let axe = AxeSpec { lines: lines.into_iter().collect(), ..AxeSpec::new("Axe") };
        Self::new("Figure", 1, 1).axe(axe)
    }

    /// Create the described figure, reading variables from `source`.
    ///
    /// Lines without a name are named after their y variable.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSpec`] if an axe shares x with an axe not described
    /// before it, [`Error::MissingColumn`] for unknown variables, and every
    /// layout and plotting error.
    pub fn build(&self, source: &impl VariableSource) -> Result<Figure> {
        debug!("Building figure '{}' from {} axe description(s)", self.title, self.axes.len());

        let mut fig = Figure::new(self.title.clone());
        let gs = fig.add_gridspec(self.nrows, self.ncols)?;
        let mut ids: Vec<AxeId> = Vec::with_capacity(self.axes.len());

        for (k, spec) in self.axes.iter().enumerate() {
            let mut options = AxeOptions::new().projection(spec.projection);
            if let Some(parent) = spec.share_x {
                let &parent_id = ids.get(parent).ok_or_else(|| {
                    Error::InvalidSpec(format!("axe {k} shares x with axe {parent}, which is not described before it"))
                })?;
                options = options.share_x(parent_id);
            }

            let id = fig.add_axe(spec.title.clone(), gs.element(spec.row, spec.col)?, options)?;
            ids.push(id);

            let mut axe = fig.axe_mut(id)?;
            for line in &spec.lines {
                let x = source.variable(&line.varx)?;
                let y = source.variable(&line.vary)?;
                let mut options = line.options.clone();
                if options.name.is_none() {
                    options.name = Some(line.vary.clone());
                }
                axe.plot((x, y), options)?;
            }
        }

        Ok(fig)
    }
}

impl fmt::Display for FigureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FigureSpec instance :")?;
        write!(f, "{RULE} Figure '{}' ({}x{}) {RULE}", self.title, self.nrows, self.ncols)?;
        for axe in &self.axes {
            writeln!(f)?;
            axe.write_indented(f, 2)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::new()
            .with_column("t", [0.0, 1.0, 2.0])
            .with_column("th_mes", [0.5, 0.6, 0.7])
            .with_column("th_est", [0.4, 0.6, 0.8])
    }

    #[test]
    fn test_for_one_axe_multi_lines() {
        let spec = FigureSpec::for_one_axe_multi_lines([LineSpec::new("a"), LineSpec::new("b").varx("x")]);
        assert_eq!(spec.title, "Figure");
        assert_eq!((spec.nrows, spec.ncols), (1, 1));
        assert_eq!(spec.axes.len(), 1);

        let axe = &spec.axes[0];
        assert_eq!(axe.title, "Axe");
        assert_eq!(axe.projection, AxeProjection::Rectilinear);
        assert_eq!(axe.share_x, None);
        assert_eq!(axe.lines[0].varx, "t");
        assert_eq!(axe.lines[1].varx, "x");
    }

    #[test]
    fn test_build_one_axe() {
        let spec = FigureSpec::for_one_axe_multi_lines([
            LineSpec::new("th_mes").options(PlotOptions::new().marker("+").linestyle("")),
            LineSpec::new("th_est").options(PlotOptions::new().name("estimate")),
        ]);
        let fig = spec.build(&sample_frame()).unwrap();

        assert_eq!(fig.title(), "Figure");
        let axe = &fig.axes()[0];
        let names: Vec<&str> = axe.plottables().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["th_mes", "estimate"]);

        let line = axe.plottables()[0].make_mline(axe.projection()).unwrap();
        assert_eq!(line.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(line.x_name, "t");
        assert_eq!(line.y_name, "th_mes");
    }

    #[test]
    fn test_build_shared_axes() {
        let spec = FigureSpec::new("Two", 2, 1)
            .axe(AxeSpec::new("top").line(LineSpec::new("th_mes")))
            .axe(AxeSpec::new("bottom").at(1, 0).share_x(0).line(LineSpec::new("th_est")));
        let mut fig = spec.build(&sample_frame()).unwrap();

        let top = fig.axes()[0].id();
        let bottom = fig.axes()[1].id();
        assert_eq!(fig.axe(bottom).unwrap().share_x().parent(), Some(top));

        fig.set_xlim(bottom, Some(0.0), Some(1.0)).unwrap();
        assert_eq!(fig.axe(top).unwrap().xbounds().max, Some(1.0));
    }

    #[test]
    fn test_build_rejects_forward_share() {
        let spec = FigureSpec::new("Bad", 2, 1).axe(AxeSpec::new("a").share_x(1)).axe(AxeSpec::new("b").at(1, 0));
        assert!(matches!(spec.build(&sample_frame()), Err(Error::InvalidSpec(_))));
    }

    #[test]
    fn test_build_missing_variable() {
        let spec = FigureSpec::for_one_axe_multi_lines([LineSpec::new("nope")]);
        assert_eq!(spec.build(&sample_frame()).unwrap_err(), Error::MissingColumn("nope".into()));
    }

    #[test]
    fn test_build_from_map_source() {
        let mut vars = HashMap::new();
        vars.insert("t".to_string(), GVariable::new(vec![0.0, 60.0]).name("t").unit("s"));
        vars.insert("alt".to_string(), GVariable::new(vec![1e3, 2e3]).name("alt").unit("m"));

        let fig = FigureSpec::for_one_axe_multi_lines([LineSpec::new("alt")]).build(&vars).unwrap();
        let line = fig.axes()[0].plottables()[0].make_mline(AxeProjection::Rectilinear).unwrap();
        assert_eq!(line.x_unit, "s");
        assert_eq!(line.y_unit, "m");
    }

    #[test]
    fn test_display() {
        let spec = FigureSpec::for_one_axe_multi_lines([
            LineSpec::new("th_mes").options(PlotOptions::new().marker("+").linestyle(""))
        ]);
        let text = spec.to_string();
        let expected = "FigureSpec instance :\n\
            ========== Figure 'Figure' (1x1) ==========\n  \
            ========== Axe 'Axe' ==========\n  \
            col:\t'0'\n  \
            projection:\t'rectilinear'\n  \
            row:\t'0'\n  \
            share_x:\t'None'\n  \
            ---------- Line #1 ----------\n    \
            linestyle:\t''\n    \
            marker:\t'+'\n    \
            varx:\t't'\n    \
            vary:\t'th_mes'\n";
        assert_eq!(text, expected);
    }
}
