//! Plottables: normalized wrappers around plot input.
//!
//! The [`PlottableFactory`] turns any supported input into a [`Plottable`].
//! Renderers ask each plottable for its drawable arrays with
//! [`Plottable::make_mline`].

mod factory;
mod graph;

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

pub use factory::{PlotInput, PlottableFactory};
pub use graph::{GraphEdge, GraphNode, PlotGraph};

use crate::data::GPlottable;
use crate::error::{Error, Result};
use crate::projection::AxeProjection;
use crate::style::PlotOptions;

/// Projections a graph can be drawn on.
const GRAPH_PROJECTIONS: &[AxeProjection] = &[AxeProjection::Graph];

/// Projections a generic line can be drawn on.
const GENERIC_PROJECTIONS: &[AxeProjection] = &[
    AxeProjection::Rectilinear,
    AxeProjection::LogX,
    AxeProjection::LogY,
    AxeProjection::LogXY,
    AxeProjection::NorthPolar,
    AxeProjection::PlateCarree,
    AxeProjection::Polar,
];

/// Projections an image can be drawn on.
const IMAGE_PROJECTIONS: &[AxeProjection] = &[AxeProjection::Rectilinear];

/// Drawable arrays of a plottable, with the names and units of both axes.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MLine {
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates.
    pub y: Vec<f64>,
    /// Name of the x variable.
    pub x_name: String,
    /// Physical unit of the x variable.
    pub x_unit: String,
    /// Name of the y variable.
    pub y_name: String,
    /// Physical unit of the y variable.
    pub y_unit: String,
}

impl MLine {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the line has no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// What a plottable wraps.
#[derive(Debug, Clone, PartialEq)]
pub enum PlottableKind {
    /// A graph, drawn structurally.
    Graph(PlotGraph),
    /// Any `(x, y)` data.
    Generic(GPlottable),
    /// An image file.
    Image(PathBuf),
}

impl PlottableKind {
    /// Short name of the variant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            PlottableKind::Graph(_) => "graph",
            PlottableKind::Generic(_) => "generic",
            PlottableKind::Image(_) => "image",
        }
    }
}

/// A plot input ready for rendering.
#[derive(Debug, Clone)]
pub struct Plottable {
    name: String,
    kind: PlottableKind,
    options: PlotOptions,
}

impl Plottable {
    pub(crate) fn new(name: String, kind: PlottableKind, options: PlotOptions) -> Self {
        Self { name, kind, options }
    }

    /// Name used for identification.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrapped input.
    #[must_use]
    pub fn kind(&self) -> &PlottableKind {
        &self.kind
    }

    /// Plot options.
    #[must_use]
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// Underlying `(x, y)` pair, for generic plottables.
    #[must_use]
    pub fn gplottable(&self) -> Option<&GPlottable> {
        match &self.kind {
            PlottableKind::Generic(gp) => Some(gp),
            _ => None,
        }
    }

    /// Underlying graph, for graph plottables.
    #[must_use]
    pub fn graph(&self) -> Option<&PlotGraph> {
        match &self.kind {
            PlottableKind::Graph(g) => Some(g),
            _ => None,
        }
    }

    /// Image path, for image plottables.
    #[must_use]
    pub fn image_path(&self) -> Option<&Path> {
        match &self.kind {
            PlottableKind::Image(p) => Some(p),
            _ => None,
        }
    }

    /// Projections of the axes this plottable can be registered on.
    #[must_use]
    pub fn compatible_projections(&self) -> &'static [AxeProjection] {
        match self.kind {
            PlottableKind::Graph(_) => GRAPH_PROJECTIONS,
            PlottableKind::Generic(_) => GENERIC_PROJECTIONS,
            PlottableKind::Image(_) => IMAGE_PROJECTIONS,
        }
    }

    /// Whether the plottable can be drawn on an axe of this projection.
    #[must_use]
    pub fn is_compatible_with(&self, projection: AxeProjection) -> bool {
        self.compatible_projections().contains(&projection)
    }

    /// Fail unless the plottable can be drawn on `projection`.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleProjection`].
    pub fn check_projection(&self, projection: AxeProjection) -> Result<()> {
        if self.is_compatible_with(projection) {
            Ok(())
        } else {
            Err(Error::IncompatibleProjection {
                projection,
                compatible: self.compatible_projections().to_vec(),
            })
        }
    }

    /// Drawable arrays for an axe of the given projection.
    ///
    /// On a map projection, x and y are converted from radians to degrees and
    /// both units become `"deg"`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for graphs, which are drawn structurally, and
    /// for images, whose line extraction is not supported.
    pub fn make_mline(&self, projection: AxeProjection) -> Result<MLine> {
        match &self.kind {
            PlottableKind::Generic(gp) => {
                let mut line = gp.make_line(self.options.transform.as_ref());
                if projection.is_map() {
                    let to_deg = 180.0 / PI;
                    line.x.iter_mut().for_each(|v| *v *= to_deg);
                    line.y.iter_mut().for_each(|v| *v *= to_deg);
                    line.x_unit = "deg".to_string();
                    line.y_unit = "deg".to_string();
                }
                Ok(line)
            }
            PlottableKind::Graph(_) => {
                Err(Error::Unsupported("graph plottables are drawn structurally, not as lines".to_string()))
            }
            PlottableKind::Image(path) => {
                Err(Error::Unsupported(format!("line extraction from image '{}'", path.display())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Transform;
    use approx::assert_relative_eq;

    fn generic(x: Vec<f64>, y: Vec<f64>, options: PlotOptions) -> Plottable {
        Plottable::new(
            String::new(),
            PlottableKind::Generic(GPlottable::from_serie(y, Some(x.into()), "")),
            options,
        )
    }

    #[test]
    fn test_make_mline_generic() {
        let p = generic(vec![0.0, 1.0], vec![0.0, 1.0], PlotOptions::new());
        let line = p.make_mline(AxeProjection::Rectilinear).unwrap();
        assert_eq!(
            line,
            MLine {
                x: vec![0.0, 1.0],
                y: vec![0.0, 1.0],
                x_name: String::new(),
                x_unit: "-".into(),
                y_name: String::new(),
                y_unit: "-".into(),
            }
        );
    }

    #[test]
    fn test_make_mline_map_converts_to_degrees() {
        let p = generic(vec![PI, -PI / 2.0], vec![PI / 4.0, 0.0], PlotOptions::new());
        let line = p.make_mline(AxeProjection::PlateCarree).unwrap();
        assert_relative_eq!(line.x[0], 180.0, max_relative = 1e-12);
        assert_relative_eq!(line.x[1], -90.0, max_relative = 1e-12);
        assert_relative_eq!(line.y[0], 45.0, max_relative = 1e-12);
        assert_eq!(line.x_unit, "deg");
        assert_eq!(line.y_unit, "deg");
    }

    #[test]
    fn test_make_mline_applies_transform_to_y_only() {
        let p = generic(
            vec![1.0, 2.0],
            vec![1.0, 2.0],
            PlotOptions::new().transform(Transform::elementwise(|v| 10.0 * v)),
        );
        let line = p.make_mline(AxeProjection::Polar).unwrap();
        assert_eq!(line.x, vec![1.0, 2.0]);
        assert_eq!(line.y, vec![10.0, 20.0]);
    }

    #[test]
    fn test_graph_and_image_have_no_line() {
        let g = Plottable::new(String::new(), PlottableKind::Graph(PlotGraph::new()), PlotOptions::new());
        assert!(matches!(g.make_mline(AxeProjection::Graph), Err(Error::Unsupported(_))));

        let img = Plottable::new(String::new(), PlottableKind::Image("map.png".into()), PlotOptions::new());
        assert!(matches!(img.make_mline(AxeProjection::Rectilinear), Err(Error::Unsupported(_))));
        assert_eq!(img.image_path(), Some(Path::new("map.png")));
    }

    #[test]
    fn test_compatibility_sets() {
        let g = Plottable::new(String::new(), PlottableKind::Graph(PlotGraph::new()), PlotOptions::new());
        assert_eq!(g.compatible_projections(), &[AxeProjection::Graph]);
        for p in AxeProjection::ALL {
            assert_eq!(g.is_compatible_with(p), p == AxeProjection::Graph);
        }

        let line = generic(vec![0.0], vec![0.0], PlotOptions::new());
        assert!(line.is_compatible_with(AxeProjection::LogXY));
        assert!(!line.is_compatible_with(AxeProjection::Dim3D));
        assert!(!line.is_compatible_with(AxeProjection::Graph));

        let img = Plottable::new(String::new(), PlottableKind::Image("a.png".into()), PlotOptions::new());
        assert!(img.check_projection(AxeProjection::Rectilinear).is_ok());
        assert_eq!(
            img.check_projection(AxeProjection::Polar),
            Err(Error::IncompatibleProjection {
                projection: AxeProjection::Polar,
                compatible: vec![AxeProjection::Rectilinear],
            })
        );
    }
}
