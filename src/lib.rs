//! # Soyut
//!
//! Declarative figure description for deferred rendering.
//!
//! A caller builds a [`Figure`]: a grid of axes, each holding typed
//! plottables. Nothing is drawn; a [`Renderer`] later walks the figure
//! read-only, usually through [`Figure::snapshot`].
//!
//! ## Features
//!
//! - **Grid layout**: axes placed on row/column slices, one axe per slice
//! - **Shared axes**: x/y bounds propagated through share-trees
//! - **Plottable factory**: arrays, data frames, variable pairs, graphs and
//!   images normalized into uniform lines
//! - **Named variables**: unit-tagged series with arithmetic and detrending
//! - **Unit abbreviation**: SI prefixes and calendar units for axis labels
//!
//! ## Quick Start
//!
//! ```rust
//! use soyut::prelude::*;
//!
//! let mut fig = Figure::new("Figure");
//! let gs = fig.add_gridspec(2, 1)?;
//! let top = fig.add_axe("Position", gs.element(0, 0)?, AxeOptions::new())?;
//! let bottom = fig.add_axe("Speed", gs.element(1, 0)?, AxeOptions::new().share_x(top))?;
//!
//! let t = GVariable::new(vec![0.0, 1.0, 2.0]).name("t").unit("s");
//! let x = GVariable::new(vec![0.0, 4.0, 9.0]).name("x").unit("m");
//! fig.axe_mut(top)?.plot((t, x), PlotOptions::new())?;
//! fig.axe_mut(bottom)?.scatter(vec![4.0, 5.0, 5.5], PlotOptions::new())?;
//! fig.set_xlim(bottom, Some(0.0), Some(2.0))?;
//!
//! let outline = OutlineRenderer::new().render(&fig)?;
//! assert!(outline.contains("'Speed'"));
//! # Ok::<(), soyut::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize snapshots and value types
//! - `graph`: Integration with trueno-graph
//! - `full`: All features enabled
//!
//! ## Logging
//!
//! The crate logs through the `log` facade. [`logging::init`] installs
//! `env_logger` filtered by the `LOGLEVEL` environment variable.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and parsing.
pub mod color;

/// Axe projections.
pub mod projection;

/// Grid layout.
pub mod layout;

/// Plot styling options.
pub mod style;

/// SI and calendar unit abbreviation.
pub mod units;

/// Spherical-Earth helpers for map axes.
pub mod geodesy;

// ============================================================================
// Data Modules
// ============================================================================

/// Series, data frames and named variables.
pub mod data;

/// Normalized plot inputs.
pub mod plottable;

// ============================================================================
// Figure Modules
// ============================================================================

/// Axes and their mutable handle.
pub mod axe;

/// Figures and share-tree propagation.
pub mod figure;

/// Data-free figure descriptions.
pub mod figure_spec;

/// Renderer contract and outline renderer.
pub mod render;

// ============================================================================
// Integration Modules
// ============================================================================

/// Ecosystem integrations (trueno-graph).
pub mod interop;

/// Default log subscriber.
pub mod logging;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for soyut operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Re-exports
// ============================================================================

pub use axe::{Annotation, Axe, AxeMut, AxeOptions, Bounds};
pub use data::{DataFrame, DataValue, GPlottable, GVariable, Series};
pub use figure::{AxeId, Figure};
pub use layout::{GridElement, GridSlice, GridSpec};
pub use plottable::{MLine, PlotGraph, PlotInput, Plottable, PlottableFactory, PlottableKind};
pub use projection::AxeProjection;
pub use render::{FigureSnapshot, OutlineRenderer, Renderer};
pub use style::PlotOptions;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use soyut::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axe::{AxeOptions, Bounds};
    pub use crate::color::Rgba;
    pub use crate::data::{DataFrame, GPlottable, GVariable, Series};
    pub use crate::error::{Error, Result};
    pub use crate::figure::{AxeId, Figure};
    pub use crate::figure_spec::{AxeSpec, FigureSpec, LineSpec, VariableSource};
    pub use crate::plottable::{MLine, PlotGraph, PlotInput, PlottableFactory};
    pub use crate::projection::AxeProjection;
    pub use crate::render::{OutlineRenderer, Renderer};
    pub use crate::style::{PlotOptions, Transform};
    pub use crate::units::unit_abbrev;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(super::VERSION, "0.3.0");
    }
}
