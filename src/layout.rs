//! Grid layout of a figure.
//!
//! A [`GridSpec`] divides a figure into rows and columns. Each
//! [`GridElement`] reserves a rectangular slice of that grid for one axe.

use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};

// ============================================================================
// Grid slices
// ============================================================================

/// Half-open row and column ranges of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSlice {
    /// First row (inclusive).
    pub row_start: usize,
    /// Last row (exclusive).
    pub row_end: usize,
    /// First column (inclusive).
    pub col_start: usize,
    /// Last column (exclusive).
    pub col_end: usize,
}

impl GridSlice {
    /// A slice covering a single cell.
    #[must_use]
    pub const fn cell(row: usize, col: usize) -> Self {
        Self { row_start: row, row_end: row + 1, col_start: col, col_end: col + 1 }
    }

    /// A slice covering the given row and column ranges.
    #[must_use]
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { row_start: rows.start, row_end: rows.end, col_start: cols.start, col_end: cols.end }
    }

    /// Row range.
    #[must_use]
    pub const fn rows(&self) -> Range<usize> {
        self.row_start..self.row_end
    }

    /// Column range.
    #[must_use]
    pub const fn cols(&self) -> Range<usize> {
        self.col_start..self.col_end
    }

    /// Number of rows spanned.
    #[must_use]
    pub const fn row_span(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Number of columns spanned.
    #[must_use]
    pub const fn col_span(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    pub(crate) fn fits(&self, nrows: usize, ncols: usize) -> bool {
        self.row_start < self.row_end
            && self.row_end <= nrows
            && self.col_start < self.col_end
            && self.col_end <= ncols
    }
}

impl fmt::Display for GridSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}, {}:{}]", self.row_start, self.row_end, self.col_start, self.col_end)
    }
}

/// Index along one grid dimension: a position or a range of positions.
pub trait GridAxisIndex {
    /// Resolve to a half-open `(start, end)` pair for a dimension of length `len`.
    fn span(&self, len: usize) -> (usize, usize);
}

impl GridAxisIndex for usize {
    fn span(&self, _len: usize) -> (usize, usize) {
        (*self, self.saturating_add(1))
    }
}

impl GridAxisIndex for Range<usize> {
    fn span(&self, _len: usize) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl GridAxisIndex for RangeInclusive<usize> {
    fn span(&self, _len: usize) -> (usize, usize) {
        (*self.start(), self.end().saturating_add(1))
    }
}

impl GridAxisIndex for RangeFrom<usize> {
    fn span(&self, len: usize) -> (usize, usize) {
        (self.start, len)
    }
}

impl GridAxisIndex for RangeTo<usize> {
    fn span(&self, _len: usize) -> (usize, usize) {
        (0, self.end)
    }
}

impl GridAxisIndex for RangeFull {
    fn span(&self, len: usize) -> (usize, usize) {
        (0, len)
    }
}

// ============================================================================
// Grid spec and elements
// ============================================================================

static NEXT_GRID_ID: AtomicU64 = AtomicU64::new(0);

/// Row/column layout of a figure.
///
/// A `GridSpec` is a lightweight handle: the figure that created it records
/// which axe occupies which slice. Replacing the figure's grid spec makes the
/// elements of the previous one stale. Ids are unique in the process, so an
/// element is never accepted by another figure's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    id: u64,
    nrows: usize,
    ncols: usize,
}

impl GridSpec {
    pub(crate) fn new(nrows: usize, ncols: usize) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidGrid { nrows, ncols });
        }
        Ok(Self { id: NEXT_GRID_ID.fetch_add(1, Ordering::Relaxed), nrows, ncols })
    }

    /// Number of rows.
    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    pub(crate) const fn id(&self) -> u64 {
        self.id
    }

    /// Reserve the slice `rows × cols` of this grid.
    ///
    /// ```
    /// use soyut::Figure;
    ///
    /// let mut fig = Figure::new("Figure");
    /// let gs = fig.add_gridspec(2, 2).unwrap();
    /// let top = gs.element(0, ..).unwrap();
    /// assert_eq!(top.slice().col_span(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::GridOutOfBounds`] if the slice is empty or exceeds the grid.
    pub fn element(&self, rows: impl GridAxisIndex, cols: impl GridAxisIndex) -> Result<GridElement> {
        let (row_start, row_end) = rows.span(self.nrows);
        let (col_start, col_end) = cols.span(self.ncols);
        let slice = GridSlice { row_start, row_end, col_start, col_end };

        if !slice.fits(self.nrows, self.ncols) {
            return Err(Error::GridOutOfBounds { slice, nrows: self.nrows, ncols: self.ncols });
        }

        Ok(GridElement { grid: self.id, slice })
    }

    /// Every single-cell element, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridElement> + '_ {
        (0..self.nrows).flat_map(move |row| {
            (0..self.ncols).map(move |col| GridElement { grid: self.id, slice: GridSlice::cell(row, col) })
        })
    }
}

/// A slice of a grid reserved for one axe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridElement {
    grid: u64,
    slice: GridSlice,
}

impl GridElement {
    /// Position of the element in its grid.
    #[must_use]
    pub const fn slice(&self) -> GridSlice {
        self.slice
    }

    pub(crate) const fn grid_id(&self) -> u64 {
        self.grid
    }
}
