//! Axes: single plot areas of a figure.
//!
//! An [`Axe`] lives in its [`Figure`](crate::Figure) and is addressed by an
//! [`AxeId`]. Mutation goes through [`AxeMut`], obtained from
//! [`Figure::axe_mut`](crate::Figure::axe_mut), so that bound changes can
//! reach every axe of the share-tree.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::figure::{AxeId, Figure};
use crate::geodesy;
use crate::layout::GridElement;
use crate::plottable::{PlotInput, Plottable, PlottableFactory};
use crate::projection::AxeProjection;
use crate::style::{PlotOptions, StyleValue};

// ============================================================================
// Value types
// ============================================================================

/// Display limits of one axis. `None` lets the renderer choose.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bounds {
    /// Lower limit.
    pub min: Option<f64>,
    /// Upper limit.
    pub max: Option<f64>,
}

impl Bounds {
    /// Fully automatic limits.
    pub const AUTO: Self = Self { min: None, max: None };

    /// Limits from an optional pair.
    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Whether both limits are left to the renderer.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |v: Option<f64>| v.map_or_else(|| "auto".to_string(), |v| v.to_string());
        write!(f, "[{}, {}]", side(self.min), side(self.max))
    }
}

/// Position of an axe in a share-tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShareLink {
    parent: Option<AxeId>,
    children: Vec<AxeId>,
}

impl ShareLink {
    /// Axe this one shares the axis with.
    #[must_use]
    pub const fn parent(&self) -> Option<AxeId> {
        self.parent
    }

    /// Axes sharing the axis with this one, in creation order.
    #[must_use]
    pub fn children(&self) -> &[AxeId] {
        &self.children
    }
}

/// A text placed at data coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotation {
    /// `(x, y)` position.
    pub coord: (f64, f64),
    /// Text.
    pub text: String,
}

/// Axis of an axe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

// ============================================================================
// Options
// ============================================================================

/// Creation options of an axe.
#[derive(Debug, Clone, Default)]
pub struct AxeOptions {
    /// Projection of the axe.
    pub projection: AxeProjection,
    /// Axe to share the x axis with.
    pub share_x: Option<AxeId>,
    /// Axe to share the y axis with.
    pub share_y: Option<AxeId>,
    /// Renderer-specific key/values.
    pub extra: BTreeMap<String, StyleValue>,
}

impl AxeOptions {
    /// Rectilinear axe without sharing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the projection.
    #[must_use]
    pub fn projection(mut self, projection: AxeProjection) -> Self {
        self.projection = projection;
        self
    }

    /// Share the x axis with `parent`.
    #[must_use]
    pub fn share_x(mut self, parent: AxeId) -> Self {
        self.share_x = Some(parent);
        self
    }

    /// Share the y axis with `parent`.
    #[must_use]
    pub fn share_y(mut self, parent: AxeId) -> Self {
        self.share_y = Some(parent);
        self
    }

    /// Set a renderer-specific option.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Axe
// ============================================================================

/// A plot area.
#[derive(Debug, Clone)]
pub struct Axe {
    id: AxeId,
    title: String,
    projection: AxeProjection,
    element: GridElement,
    share_x: ShareLink,
    share_y: ShareLink,
    xbounds: Bounds,
    ybounds: Bounds,
    plottables: Vec<Plottable>,
    annotations: Vec<Annotation>,
    options: BTreeMap<String, StyleValue>,
}

impl Axe {
    pub(crate) fn new(id: AxeId, title: String, element: GridElement, options: AxeOptions) -> Self {
        Self {
            id,
            title,
            projection: options.projection,
            element,
            share_x: ShareLink { parent: options.share_x, children: Vec::new() },
            share_y: ShareLink { parent: options.share_y, children: Vec::new() },
            xbounds: Bounds::AUTO,
            ybounds: Bounds::AUTO,
            plottables: Vec::new(),
            annotations: Vec::new(),
            options: options.extra,
        }
    }

    /// Identifier in the owning figure.
    #[must_use]
    pub const fn id(&self) -> AxeId {
        self.id
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Projection.
    #[must_use]
    pub const fn projection(&self) -> AxeProjection {
        self.projection
    }

    /// Grid element the axe occupies.
    #[must_use]
    pub const fn element(&self) -> GridElement {
        self.element
    }

    /// Share-tree links of the x axis.
    #[must_use]
    pub const fn share_x(&self) -> &ShareLink {
        &self.share_x
    }

    /// Share-tree links of the y axis.
    #[must_use]
    pub const fn share_y(&self) -> &ShareLink {
        &self.share_y
    }

    /// X limits.
    #[must_use]
    pub const fn xbounds(&self) -> Bounds {
        self.xbounds
    }

    /// Y limits.
    #[must_use]
    pub const fn ybounds(&self) -> Bounds {
        self.ybounds
    }

    /// Registered plottables, in insertion order.
    #[must_use]
    pub fn plottables(&self) -> &[Plottable] {
        &self.plottables
    }

    /// Annotations, in insertion order.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Renderer-specific options.
    #[must_use]
    pub fn options(&self) -> &BTreeMap<String, StyleValue> {
        &self.options
    }

    pub(crate) fn link(&self, axis: Axis) -> &ShareLink {
        match axis {
            Axis::X => &self.share_x,
            Axis::Y => &self.share_y,
        }
    }

    pub(crate) fn link_mut(&mut self, axis: Axis) -> &mut ShareLink {
        match axis {
            Axis::X => &mut self.share_x,
            Axis::Y => &mut self.share_y,
        }
    }

    pub(crate) const fn bounds(&self, axis: Axis) -> Bounds {
        match axis {
            Axis::X => self.xbounds,
            Axis::Y => self.ybounds,
        }
    }

    pub(crate) fn set_bounds(&mut self, axis: Axis, bounds: Bounds) {
        match axis {
            Axis::X => self.xbounds = bounds,
            Axis::Y => self.ybounds = bounds,
        }
    }

    pub(crate) fn add_child(&mut self, axis: Axis, child: AxeId) {
        self.link_mut(axis).children.push(child);
    }
}

// ============================================================================
// Mutable handle
// ============================================================================

/// Mutable access to one axe of a figure.
#[derive(Debug)]
pub struct AxeMut<'a> {
    figure: &'a mut Figure,
    id: AxeId,
}

impl<'a> AxeMut<'a> {
    pub(crate) fn new(figure: &'a mut Figure, id: AxeId) -> Self {
        Self { figure, id }
    }

    /// Identifier of the axe.
    #[must_use]
    pub const fn id(&self) -> AxeId {
        self.id
    }

    /// Read access to the axe.
    #[must_use]
    pub fn get(&self) -> &Axe {
        self.figure.axe_ref(self.id)
    }

    fn axe(&mut self) -> &mut Axe {
        self.figure.axe_ref_mut(self.id)
    }

    /// Wrap `input` into a plottable and register it.
    ///
    /// The returned plottable borrows this handle; bind the handle first to
    /// keep it around:
    ///
    /// ```
    /// use soyut::{AxeOptions, Figure, PlotOptions};
    ///
    /// let mut fig = Figure::new("Figure");
    /// let gs = fig.add_gridspec(1, 1)?;
    /// let id = fig.add_axe("a", gs.element(0, 0)?, AxeOptions::new())?;
    ///
    /// let mut axe = fig.axe_mut(id)?;
    /// let p = axe.plot(vec![1.0, 2.0], PlotOptions::new().name("v"))?;
    /// assert_eq!(p.name(), "v");
    /// # Ok::<(), soyut::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleProjection`] when the plottable cannot be drawn on
    /// this axe, plus every error of [`PlottableFactory::create`].
    pub fn plot(&mut self, input: impl Into<PlotInput>, options: PlotOptions) -> Result<&Plottable> {
        let plottable = PlottableFactory::create(input, options)?;
        let axe = self.axe();
        plottable.check_projection(axe.projection)?;

        debug!("Adding {} plottable '{}' to axe '{}'", plottable.kind().name(), plottable.name(), axe.title);
        let index = axe.plottables.len();
        axe.plottables.push(plottable);
        Ok(&axe.plottables[index])
    }

    /// [`plot`](Self::plot) with markers only: the marker defaults to `"+"`
    /// and the line style is forced to `""`.
    ///
    /// # Errors
    ///
    /// Same as [`plot`](Self::plot).
    pub fn scatter(&mut self, input: impl Into<PlotInput>, mut options: PlotOptions) -> Result<&Plottable> {
        if options.marker.is_none() {
            options.marker = Some("+".to_string());
        }
        options.linestyle = Some(String::new());
        self.plot(input, options)
    }

    /// Place `text` at `coord`.
    pub fn annotate(&mut self, coord: (f64, f64), text: impl Into<String>) -> &Annotation {
        let annotations = &mut self.axe().annotations;
        let index = annotations.len();
        annotations.push(Annotation { coord, text: text.into() });
        &annotations[index]
    }

    /// Plot the ground area where a satellite at `sat_alt` meters is seen at
    /// least `elev_min` radians above the horizon, around `coord`
    /// (longitude, latitude in radians).
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] on a non-map axe or for invalid geometry.
    pub fn plot_device_reach(
        &mut self,
        coord: (f64, f64),
        elev_min: f64,
        sat_alt: f64,
        options: PlotOptions,
    ) -> Result<&Plottable> {
        let projection = self.get().projection;
        if !projection.is_map() {
            return Err(Error::Unsupported(format!("device reach on a {projection} axe")));
        }

        let angle = geodesy::reach_angle(elev_min, sat_alt)?;
        let (lon, lat) = geodesy::small_circle(coord, angle, geodesy::CIRCLE_SAMPLES);
        self.plot((lon, lat), options)
    }

    /// Set the x limits of the whole share-tree of this axe.
    ///
    /// # Errors
    ///
    /// Never fails for a handle obtained from the figure.
    pub fn set_xlim(&mut self, min: Option<f64>, max: Option<f64>) -> Result<()> {
        self.figure.set_xlim(self.id, min, max)
    }

    /// Set the y limits of the whole share-tree of this axe.
    ///
    /// # Errors
    ///
    /// Never fails for a handle obtained from the figure.
    pub fn set_ylim(&mut self, min: Option<f64>, max: Option<f64>) -> Result<()> {
        self.figure.set_ylim(self.id, min, max)
    }
}
