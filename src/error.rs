//! Error types for soyut operations.

use thiserror::Error;

use crate::figure::AxeId;
use crate::layout::GridSlice;
use crate::projection::AxeProjection;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing a figure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A plottable was registered on an axe whose projection it cannot be drawn on.
    #[error("Projection {projection} not in {compatible:?}")]
    IncompatibleProjection {
        /// Projection of the target axe.
        projection: AxeProjection,
        /// Projections the plottable accepts.
        compatible: Vec<AxeProjection>,
    },

    /// The plottable factory does not know how to wrap this input type.
    #[error("Don't know how to plot input of type '{type_name}'")]
    UnsupportedInput {
        /// Name of the rejected type.
        type_name: String,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Data length mismatch between x and y arrays.
    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// A named column or variable does not exist.
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// A column holds values that are not plottable numbers.
    #[error("Column '{0}' is not numeric")]
    NonNumericColumn(String),

    /// Grid with zero rows or columns.
    #[error("Invalid grid dimensions: {nrows}x{ncols}")]
    InvalidGrid {
        /// Number of rows.
        nrows: usize,
        /// Number of columns.
        ncols: usize,
    },

    /// A grid slice does not fit in its grid.
    #[error("Grid slice {slice} out of bounds for a {nrows}x{ncols} grid")]
    GridOutOfBounds {
        /// Requested slice.
        slice: GridSlice,
        /// Number of rows of the grid.
        nrows: usize,
        /// Number of columns of the grid.
        ncols: usize,
    },

    /// The grid element was produced by a grid spec that has since been replaced.
    #[error("Grid element does not belong to the figure's current grid spec")]
    StaleGridElement,

    /// No axe with this id exists in the figure.
    #[error("Unknown axe: {0}")]
    UnknownAxe(AxeId),

    /// Operation not available for this axe or plottable.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Not enough points to fit a polynomial of the requested degree.
    #[error("Cannot fit a degree {deg} polynomial on {len} points")]
    InsufficientData {
        /// Requested degree.
        deg: usize,
        /// Number of points available.
        len: usize,
    },

    /// The least-squares system has no unique solution.
    #[error("Singular least-squares system")]
    SingularFit,

    /// A forced multiplier that no unit table knows.
    #[error("Unknown unit multiplier: {0}")]
    UnknownMultiplier(f64),

    /// A figure description that cannot be instantiated.
    #[error("Invalid figure description: {0}")]
    InvalidSpec(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
