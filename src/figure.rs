//! Figures: the root of the object graph.
//!
//! A [`Figure`] owns its grid layout and every [`Axe`]. Axes are stored in
//! creation order and addressed by [`AxeId`].
//!
//! ```
//! use soyut::{AxeOptions, Figure, PlotOptions};
//!
//! let mut fig = Figure::new("Figure");
//! let gs = fig.add_gridspec(2, 1).unwrap();
//! let top = fig.add_axe("top", gs.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
//! let bottom = fig
//!     .add_axe("bottom", gs.element(1, 0).unwrap(), AxeOptions::new().share_x(top))
//!     .unwrap();
//!
//! fig.axe_mut(top).unwrap().plot(vec![1.0, 4.0, 9.0], PlotOptions::new()).unwrap();
//! fig.set_xlim(bottom, Some(0.0), Some(2.0)).unwrap();
//! assert_eq!(fig.axe(top).unwrap().xbounds().max, Some(2.0));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, trace, warn};

use crate::axe::{Axe, AxeMut, AxeOptions, Axis, Bounds};
use crate::error::{Error, Result};
use crate::layout::{GridElement, GridSlice, GridSpec};
use crate::render::FigureSnapshot;

static NEXT_FIGURE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier of an axe inside its figure.
///
/// Ids are only valid on the figure that issued them (and its clones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxeId {
    figure: u64,
    index: usize,
}

impl AxeId {
    /// Position of the axe in [`Figure::axes`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for AxeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A figure: a title, a grid and the axes placed on it.
#[derive(Debug, Clone)]
pub struct Figure {
    id: u64,
    title: String,
    grid_spec: Option<GridSpec>,
    axes: Vec<Axe>,
    placements: HashMap<GridSlice, AxeId>,
}

impl Figure {
    /// Create an empty figure.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NEXT_FIGURE_ID.fetch_add(1, Ordering::Relaxed),
            title: title.into(),
            grid_spec: None,
            axes: Vec::new(),
            placements: HashMap::new(),
        }
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current grid layout, if any.
    #[must_use]
    pub const fn grid_spec(&self) -> Option<GridSpec> {
        self.grid_spec
    }

    /// Every axe, in creation order.
    #[must_use]
    pub fn axes(&self) -> &[Axe] {
        &self.axes
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Divide the figure into `nrows × ncols` cells.
    ///
    /// Calling it again replaces the grid: elements of the previous grid
    /// become stale and new axes can be placed anywhere. Existing axes stay
    /// in the figure.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGrid`] for zero rows or columns.
    pub fn add_gridspec(&mut self, nrows: usize, ncols: usize) -> Result<GridSpec> {
        let gs = GridSpec::new(nrows, ncols)?;
        if let Some(old) = self.grid_spec {
            warn!(
                "Replacing {}x{} grid of figure '{}' by {nrows}x{ncols}, {} placement(s) discarded",
                old.nrows(),
                old.ncols(),
                self.title,
                self.placements.len()
            );
        }

        self.placements.clear();
        self.grid_spec = Some(gs);
        Ok(gs)
    }

    /// Create the axe at `element`, or return the one already there.
    ///
    /// Requesting an occupied element ignores `title` and `options`.
    ///
    /// # Errors
    ///
    /// [`Error::StaleGridElement`] if `element` does not come from the current
    /// grid of this figure, [`Error::GridOutOfBounds`] if it does not fit the
    /// grid, [`Error::UnknownAxe`] for a share parent not in this figure.
    pub fn add_axe(&mut self, title: impl Into<String>, element: GridElement, options: AxeOptions) -> Result<AxeId> {
        let grid = self.grid_spec.ok_or(Error::StaleGridElement)?;
        if element.grid_id() != grid.id() {
            return Err(Error::StaleGridElement);
        }

        let slice = element.slice();
        if !slice.fits(grid.nrows(), grid.ncols()) {
            return Err(Error::GridOutOfBounds { slice, nrows: grid.nrows(), ncols: grid.ncols() });
        }
        if let Some(&id) = self.placements.get(&slice) {
            debug!("Reusing axe {id} at {slice}");
            return Ok(id);
        }

        let xbounds = self.parent_bounds(options.share_x, Axis::X)?;
        let ybounds = self.parent_bounds(options.share_y, Axis::Y)?;

        let id = AxeId { figure: self.id, index: self.axes.len() };
        let (share_x, share_y) = (options.share_x, options.share_y);
        let mut axe = Axe::new(id, title.into(), element, options);
        axe.set_bounds(Axis::X, xbounds);
        axe.set_bounds(Axis::Y, ybounds);
        debug!("Created {} axe {id} '{}' at {slice}", axe.projection(), axe.title());
        self.axes.push(axe);

        if let Some(parent) = share_x {
            self.axe_ref_mut(parent).add_child(Axis::X, id);
        }
        if let Some(parent) = share_y {
            self.axe_ref_mut(parent).add_child(Axis::Y, id);
        }
        self.placements.insert(slice, id);

        Ok(id)
    }

    fn parent_bounds(&self, parent: Option<AxeId>, axis: Axis) -> Result<Bounds> {
        match parent {
            Some(p) => Ok(self.axe(p)?.bounds(axis)),
            None => Ok(Bounds::AUTO),
        }
    }

    /// Axe occupying `element` in the current grid.
    #[must_use]
    pub fn axe_at(&self, element: GridElement) -> Option<AxeId> {
        let grid = self.grid_spec?;
        if element.grid_id() != grid.id() {
            return None;
        }
        self.placements.get(&element.slice()).copied()
    }

    // ========================================================================
    // Axe access
    // ========================================================================

    /// Read access to an axe.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownAxe`], also for an id issued by another figure.
    pub fn axe(&self, id: AxeId) -> Result<&Axe> {
        if id.figure != self.id {
            return Err(Error::UnknownAxe(id));
        }
        self.axes.get(id.index).ok_or(Error::UnknownAxe(id))
    }

    /// Mutable handle on an axe, to plot on it.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownAxe`].
    pub fn axe_mut(&mut self, id: AxeId) -> Result<AxeMut<'_>> {
        self.axe(id)?;
        Ok(AxeMut::new(self, id))
    }

    pub(crate) fn axe_ref(&self, id: AxeId) -> &Axe {
        &self.axes[id.index]
    }

    pub(crate) fn axe_ref_mut(&mut self, id: AxeId) -> &mut Axe {
        &mut self.axes[id.index]
    }

    // ========================================================================
    // Share-tree bounds
    // ========================================================================

    /// Set the x limits of `id` and of every axe sharing its x axis,
    /// directly or transitively.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownAxe`].
    pub fn set_xlim(&mut self, id: AxeId, min: Option<f64>, max: Option<f64>) -> Result<()> {
        self.set_lim(id, Axis::X, Bounds::new(min, max))
    }

    /// Set the y limits of `id` and of every axe sharing its y axis,
    /// directly or transitively.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownAxe`].
    pub fn set_ylim(&mut self, id: AxeId, min: Option<f64>, max: Option<f64>) -> Result<()> {
        self.set_lim(id, Axis::Y, Bounds::new(min, max))
    }

    fn set_lim(&mut self, id: AxeId, axis: Axis, bounds: Bounds) -> Result<()> {
        self.axe(id)?;

        let mut root = id;
        while let Some(parent) = self.axe_ref(root).link(axis).parent() {
            root = parent;
        }

        // depth-first, parents before children
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            trace!("Setting {axis} bounds of axe {current} to {bounds}");
            let axe = self.axe_ref_mut(current);
            axe.set_bounds(axis, bounds);
            stack.extend(axe.link(axis).children().iter().rev());
        }

        Ok(())
    }

    /// Resolved read-only view of the figure, for renderers.
    ///
    /// # Errors
    ///
    /// Propagates line extraction errors of generic plottables.
    pub fn snapshot(&self) -> Result<FigureSnapshot> {
        FigureSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::AxeProjection;

    fn grid_figure(nrows: usize, ncols: usize) -> (Figure, GridSpec) {
        let mut fig = Figure::new("Figure");
        let gs = fig.add_gridspec(nrows, ncols).unwrap();
        (fig, gs)
    }

    fn axe_id(fig: &Figure, index: usize) -> AxeId {
        AxeId { figure: fig.id, index }
    }

    #[test]
    fn test_new_figure_is_empty() {
        let fig = Figure::new("Title");
        assert_eq!(fig.title(), "Title");
        assert!(fig.grid_spec().is_none());
        assert!(fig.axes().is_empty());
    }

    #[test]
    fn test_add_axe_is_idempotent_per_element() {
        let (mut fig, gs) = grid_figure(2, 1);
        let e = gs.element(0, 0).unwrap();
        let a = fig.add_axe("first", e, AxeOptions::new()).unwrap();
        let b = fig.add_axe("second", e, AxeOptions::new().projection(AxeProjection::Polar)).unwrap();

        assert_eq!(a, b);
        assert_eq!(fig.axes().len(), 1);
        assert_eq!(fig.axe(a).unwrap().title(), "first");
        assert_eq!(fig.axe(a).unwrap().projection(), AxeProjection::Rectilinear);
        assert_eq!(fig.axe_at(e), Some(a));
    }

    #[test]
    fn test_distinct_elements_get_distinct_axes() {
        let (mut fig, gs) = grid_figure(2, 2);
        let ids: Vec<AxeId> =
            gs.cells().map(|e| fig.add_axe("a", e, AxeOptions::new()).unwrap()).collect();
        assert_eq!(ids.iter().map(|id| id.index()).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        // a spanning element is its own coordinate
        let wide = fig.add_axe("wide", gs.element(0, ..).unwrap(), AxeOptions::new()).unwrap();
        assert_eq!(wide.index(), 4);
    }

    #[test]
    fn test_replacing_grid_makes_elements_stale() {
        let (mut fig, gs) = grid_figure(1, 1);
        let old = gs.element(0, 0).unwrap();
        fig.add_axe("a", old, AxeOptions::new()).unwrap();

        let gs2 = fig.add_gridspec(1, 2).unwrap();
        assert_eq!(fig.add_axe("b", old, AxeOptions::new()), Err(Error::StaleGridElement));
        assert_eq!(fig.axe_at(old), None);

        let fresh = fig.add_axe("b", gs2.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
        assert_eq!(fresh.index(), 1);
        assert_eq!(fig.axes().len(), 2);
    }

    #[test]
    fn test_add_axe_without_grid() {
        let (_, gs) = grid_figure(1, 1);
        let mut other = Figure::new("other");
        assert_eq!(other.add_axe("a", gs.element(0, 0).unwrap(), AxeOptions::new()), Err(Error::StaleGridElement));
    }

    #[test]
    fn test_invalid_grid() {
        let mut fig = Figure::new("f");
        assert_eq!(fig.add_gridspec(0, 3), Err(Error::InvalidGrid { nrows: 0, ncols: 3 }));
        assert!(fig.grid_spec().is_none());
    }

    #[test]
    fn test_unknown_share_parent() {
        let (mut fig, gs) = grid_figure(1, 1);
        let missing = axe_id(&fig, 3);
        let err = fig.add_axe("a", gs.element(0, 0).unwrap(), AxeOptions::new().share_x(missing));
        assert_eq!(err, Err(Error::UnknownAxe(missing)));
        assert!(fig.axes().is_empty());
        assert!(fig.axe_mut(axe_id(&fig, 0)).is_err());
    }

    #[test]
    fn test_share_links_and_initial_bounds() {
        let (mut fig, gs) = grid_figure(3, 1);
        let root = fig.add_axe("root", gs.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
        fig.set_xlim(root, Some(0.0), Some(10.0)).unwrap();
        fig.set_ylim(root, Some(-1.0), Some(1.0)).unwrap();

        let child = fig
            .add_axe("child", gs.element(1, 0).unwrap(), AxeOptions::new().share_x(root).share_y(root))
            .unwrap();

        let c = fig.axe(child).unwrap();
        assert_eq!(c.xbounds(), Bounds::new(Some(0.0), Some(10.0)));
        assert_eq!(c.ybounds(), Bounds::new(Some(-1.0), Some(1.0)));
        assert_eq!(c.share_x().parent(), Some(root));
        assert_eq!(fig.axe(root).unwrap().share_x().children(), &[child]);
        assert_eq!(fig.axe(root).unwrap().share_y().children(), &[child]);
    }

    #[test]
    fn test_set_xlim_from_leaf_reaches_whole_tree() {
        let (mut fig, gs) = grid_figure(4, 1);
        let a = fig.add_axe("a", gs.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
        let b = fig.add_axe("b", gs.element(1, 0).unwrap(), AxeOptions::new().share_x(a)).unwrap();
        let c = fig.add_axe("c", gs.element(2, 0).unwrap(), AxeOptions::new().share_x(b)).unwrap();
        let lone = fig.add_axe("lone", gs.element(3, 0).unwrap(), AxeOptions::new()).unwrap();

        fig.set_xlim(c, Some(1.0), Some(2.0)).unwrap();
        for id in [a, b, c] {
            assert_eq!(fig.axe(id).unwrap().xbounds(), Bounds::new(Some(1.0), Some(2.0)));
            assert!(fig.axe(id).unwrap().ybounds().is_auto());
        }
        assert!(fig.axe(lone).unwrap().xbounds().is_auto());

        // replaced, not merged
        fig.axe_mut(a).unwrap().set_xlim(None, Some(5.0)).unwrap();
        assert_eq!(fig.axe(c).unwrap().xbounds(), Bounds::new(None, Some(5.0)));
    }

    #[test]
    fn test_x_and_y_trees_are_independent() {
        let (mut fig, gs) = grid_figure(2, 1);
        let a = fig.add_axe("a", gs.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
        let b = fig.add_axe("b", gs.element(1, 0).unwrap(), AxeOptions::new().share_y(a)).unwrap();

        fig.set_xlim(b, Some(0.0), Some(1.0)).unwrap();
        assert!(fig.axe(a).unwrap().xbounds().is_auto());

        fig.set_ylim(b, Some(3.0), None).unwrap();
        assert_eq!(fig.axe(a).unwrap().ybounds(), Bounds::new(Some(3.0), None));
    }

    #[test]
    fn test_set_lim_unknown_axe() {
        let mut fig = Figure::new("f");
        let id = axe_id(&fig, 0);
        assert_eq!(fig.set_xlim(id, None, None), Err(Error::UnknownAxe(id)));
    }

    #[test]
    fn test_axe_id_display() {
        let fig = Figure::new("f");
        assert_eq!(axe_id(&fig, 2).to_string(), "#2");
    }

    #[test]
    fn test_element_from_other_figure_is_stale() {
        let (_, big) = grid_figure(3, 3);
        let (mut small, _) = grid_figure(1, 1);

        for element in [big.element(2, 2).unwrap(), big.element(0, 0).unwrap()] {
            assert_eq!(small.add_axe("intruder", element, AxeOptions::new()), Err(Error::StaleGridElement));
            assert_eq!(small.axe_at(element), None);
        }
        assert!(small.axes().is_empty());
    }

    #[test]
    fn test_axe_id_from_other_figure_rejected() {
        let (mut a, gsa) = grid_figure(1, 1);
        let (mut b, gsb) = grid_figure(2, 1);
        let foreign = a.add_axe("a", gsa.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
        let own = b.add_axe("b", gsb.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
        assert_eq!(foreign.index(), own.index());

        assert_eq!(b.axe(foreign).map(Axe::title), Err(Error::UnknownAxe(foreign)));
        assert_eq!(b.set_xlim(foreign, Some(0.0), Some(1.0)), Err(Error::UnknownAxe(foreign)));
        assert_eq!(
            b.add_axe("c", gsb.element(1, 0).unwrap(), AxeOptions::new().share_x(foreign)),
            Err(Error::UnknownAxe(foreign))
        );
        assert!(b.axe(own).unwrap().share_x().children().is_empty());
        assert!(b.axe(own).unwrap().xbounds().is_auto());
    }

    #[test]
    fn test_cloned_figure_accepts_original_ids() {
        let (mut fig, gs) = grid_figure(1, 1);
        let id = fig.add_axe("a", gs.element(0, 0).unwrap(), AxeOptions::new()).unwrap();
        let copy = fig.clone();
        assert_eq!(copy.axe(id).unwrap().title(), "a");
    }
}
