//! Renderer contract.
//!
//! Renderers never mutate a figure. They either walk it directly through the
//! read accessors of [`Figure`] and [`Axe`], or take a [`FigureSnapshot`]:
//! every axe resolved to plain data (bounds, lines, graphs, image paths).

use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::path::PathBuf;

use crate::axe::{Annotation, Axe, Bounds};
use crate::error::Result;
use crate::figure::{AxeId, Figure};
use crate::layout::GridSlice;
use crate::plottable::{MLine, PlotGraph, Plottable, PlottableKind};
use crate::projection::AxeProjection;
use crate::style::{PlotOptions, StyleValue};
use crate::units::unit_abbrev;

// ============================================================================
// Snapshots
// ============================================================================

/// Resolved view of a figure.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FigureSnapshot {
    /// Figure title.
    pub title: String,
    /// `(nrows, ncols)` of the grid, if one was created.
    pub grid: Option<(usize, usize)>,
    /// Axes in creation order.
    pub axes: Vec<AxeSnapshot>,
}

/// Resolved view of an axe.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxeSnapshot {
    /// Identifier in the figure.
    pub id: AxeId,
    /// Title.
    pub title: String,
    /// Projection.
    pub projection: AxeProjection,
    /// Grid cells covered.
    pub slice: GridSlice,
    /// Parent in the x share-tree.
    pub share_x: Option<AxeId>,
    /// Parent in the y share-tree.
    pub share_y: Option<AxeId>,
    /// X limits.
    pub xbounds: Bounds,
    /// Y limits.
    pub ybounds: Bounds,
    /// Plots in drawing order.
    pub plots: Vec<PlotSnapshot>,
    /// Annotations.
    pub annotations: Vec<Annotation>,
    /// Renderer-specific axe options.
    pub options: BTreeMap<String, StyleValue>,
}

/// Resolved view of a plottable.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlotSnapshot {
    /// Plottable name.
    pub name: String,
    /// What to draw.
    pub content: PlotContent,
    /// Style.
    pub options: PlotOptions,
}

/// Drawable content of a plottable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PlotContent {
    /// Line data, already projected for the axe.
    Line(MLine),
    /// A graph to lay out.
    Graph(PlotGraph),
    /// An image to display.
    Image(PathBuf),
}

impl FigureSnapshot {
    pub(crate) fn capture(figure: &Figure) -> Result<Self> {
        Ok(Self {
            title: figure.title().to_string(),
            grid: figure.grid_spec().map(|gs| (gs.nrows(), gs.ncols())),
            axes: figure.axes().iter().map(AxeSnapshot::capture).collect::<Result<_>>()?,
        })
    }
}

impl AxeSnapshot {
    fn capture(axe: &Axe) -> Result<Self> {
        let plots = axe
            .plottables()
            .iter()
            .map(|p| PlotSnapshot::capture(p, axe.projection()))
            .collect::<Result<_>>()?;

        Ok(Self {
            id: axe.id(),
            title: axe.title().to_string(),
            projection: axe.projection(),
            slice: axe.element().slice(),
            share_x: axe.share_x().parent(),
            share_y: axe.share_y().parent(),
            xbounds: axe.xbounds(),
            ybounds: axe.ybounds(),
            plots,
            annotations: axe.annotations().to_vec(),
            options: axe.options().clone(),
        })
    }
}

impl PlotSnapshot {
    fn capture(plottable: &Plottable, projection: AxeProjection) -> Result<Self> {
        let content = match plottable.kind() {
            PlottableKind::Generic(_) => PlotContent::Line(plottable.make_mline(projection)?),
            PlottableKind::Graph(g) => PlotContent::Graph(g.clone()),
            PlottableKind::Image(p) => PlotContent::Image(p.clone()),
        };
        Ok(Self { name: plottable.name().to_string(), content, options: plottable.options().clone() })
    }
}

// ============================================================================
// Renderers
// ============================================================================

/// A figure backend.
pub trait Renderer {
    /// What rendering produces (text, an image buffer, a handle...).
    type Output;

    /// Render `figure`.
    fn render(&mut self, figure: &Figure) -> Result<Self::Output>;
}

/// Text outline of a figure, one line per item.
///
/// ```
/// use soyut::{AxeOptions, Figure, OutlineRenderer, PlotOptions, Renderer};
///
/// let mut fig = Figure::new("Speed");
/// let gs = fig.add_gridspec(1, 1).unwrap();
/// let id = fig.add_axe("Axe", gs.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
/// fig.axe_mut(id).unwrap().plot(vec![1.0, 2.0], PlotOptions::new().name("v")).unwrap();
///
/// let text = OutlineRenderer::new().render(&fig).unwrap();
/// assert!(text.starts_with("Figure 'Speed' (1x1)"));
/// ```
#[derive(Debug, Clone)]
pub struct OutlineRenderer {
    indent: usize,
    show_ranges: bool,
}

impl Default for OutlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineRenderer {
    /// Two-space indentation, without data ranges.
    #[must_use]
    pub fn new() -> Self {
        Self { indent: 2, show_ranges: false }
    }

    /// Set the indentation width.
    #[must_use]
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Print the y range of each line with abbreviated units.
    #[must_use]
    pub fn show_ranges(mut self, show: bool) -> Self {
        self.show_ranges = show;
        self
    }

    fn write_plot(&self, out: &mut String, plot: &PlotSnapshot) -> Result<()> {
        let pad = " ".repeat(2 * self.indent);
        let name = if plot.name.is_empty() { "<unnamed>" } else { plot.name.as_str() };
        match &plot.content {
            PlotContent::Line(line) => {
                let _ = write!(
                    out,
                    "{pad}line '{name}': {} points, x: {} [{}], y: {} [{}]",
                    line.len(),
                    line.x_name,
                    line.x_unit,
                    line.y_name,
                    line.y_unit
                );
                if self.show_ranges {
                    if let Some((lo, hi)) = finite_range(&line.y) {
                        let lo = unit_abbrev(lo, &line.y_unit, None)?;
                        let hi = unit_abbrev(hi, &line.y_unit, None)?;
                        let _ = write!(out, ", range {} {} .. {} {}", lo.scaled, lo.label(), hi.scaled, hi.label());
                    }
                }
                out.push('\n');
            }
            PlotContent::Graph(g) => {
                let _ = writeln!(out, "{pad}graph '{name}': {} nodes, {} edges", g.num_nodes(), g.num_edges());
            }
            PlotContent::Image(path) => {
                let _ = writeln!(out, "{pad}image '{name}': {}", path.display());
            }
        }
        Ok(())
    }
}

impl Renderer for OutlineRenderer {
    type Output = String;

    fn render(&mut self, figure: &Figure) -> Result<String> {
        let snapshot = figure.snapshot()?;
        let pad = " ".repeat(self.indent);
        let mut out = String::new();

        match snapshot.grid {
            Some((nrows, ncols)) => {
                let _ = writeln!(out, "Figure '{}' ({nrows}x{ncols})", snapshot.title);
            }
            None => {
                let _ = writeln!(out, "Figure '{}' (no grid)", snapshot.title);
            }
        }

        for axe in &snapshot.axes {
            let _ = writeln!(
                out,
                "{pad}Axe {} '{}' {} at {}, x {}, y {}",
                axe.id, axe.title, axe.projection, axe.slice, axe.xbounds, axe.ybounds
            );
            for plot in &axe.plots {
                self.write_plot(&mut out, plot)?;
            }
            for a in &axe.annotations {
                let _ = writeln!(out, "{pad}{pad}note '{}' at ({}, {})", a.text, a.coord.0, a.coord.1);
            }
        }

        Ok(out)
    }
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axe::AxeOptions;
    use crate::data::{GPlottable, GVariable};

    fn sample_figure() -> Figure {
        let mut fig = Figure::new("Orbit");
        let gs = fig.add_gridspec(2, 1).unwrap();
        let top = fig.add_axe("Top", gs.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
        let graph = fig
            .add_axe("Net", gs.element(1, 0).unwrap(), AxeOptions::new().projection(AxeProjection::Graph))
            .unwrap();

        let gp = GPlottable::from_pair(
            GVariable::new(vec![0.0, 1.0, 2.0]).name("t").unit("s"),
            GVariable::new(vec![0.001, 0.002, 0.004]).name("err").unit("m"),
            "err",
        );
        let mut axe = fig.axe_mut(top).unwrap();
        axe.plot(gp, PlotOptions::new()).unwrap();
        axe.annotate((1.0, 0.002), "max");
        fig.axe_mut(graph).unwrap().plot(PlotGraph::from_edges(&[(0, 1, 1.0)]), PlotOptions::new()).unwrap();
        fig.set_xlim(top, Some(0.0), Some(2.0)).unwrap();
        fig
    }

    #[test]
    fn test_snapshot_resolves_axes() {
        let snap = sample_figure().snapshot().unwrap();
        assert_eq!(snap.title, "Orbit");
        assert_eq!(snap.grid, Some((2, 1)));
        assert_eq!(snap.axes.len(), 2);

        let top = &snap.axes[0];
        assert_eq!(top.xbounds, Bounds::new(Some(0.0), Some(2.0)));
        assert_eq!(top.annotations.len(), 1);
        match &top.plots[0].content {
            PlotContent::Line(line) => {
                assert_eq!(line.y_unit, "m");
                assert_eq!(line.len(), 3);
            }
            other => panic!("expected a line, got {other:?}"),
        }

        assert!(matches!(snap.axes[1].plots[0].content, PlotContent::Graph(_)));
    }

    #[test]
    fn test_outline() {
        let text = OutlineRenderer::new().render(&sample_figure()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Figure 'Orbit' (2x1)");
        assert_eq!(lines[1], "  Axe #0 'Top' rectilinear at [0:1, 0:1], x [0, 2], y [auto, auto]");
        assert_eq!(lines[2], "    line 'err': 3 points, x: t [s], y: err [m]");
        assert_eq!(lines[3], "    note 'max' at (1, 0.002)");
        assert_eq!(lines[4], "  Axe #1 'Net' graph at [1:2, 0:1], x [auto, auto], y [auto, auto]");
        assert_eq!(lines[5], "    graph '<unnamed>': 2 nodes, 1 edges");
    }

    #[test]
    fn test_outline_with_ranges() {
        let text = OutlineRenderer::new().indent(1).show_ranges(true).render(&sample_figure()).unwrap();
        assert!(text.contains(", range 1 mm .. 4 mm"), "{text}");
    }

    #[test]
    fn test_outline_empty_figure() {
        let text = OutlineRenderer::default().render(&Figure::new("Empty")).unwrap();
        assert_eq!(text, "Figure 'Empty' (no grid)\n");
    }

    #[test]
    fn test_finite_range_skips_nan() {
        assert_eq!(finite_range(&[f64::NAN, 2.0, -1.0]), Some((-1.0, 2.0)));
        assert_eq!(finite_range(&[f64::NAN]), None);
    }
}
