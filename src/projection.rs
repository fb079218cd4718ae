//! Axe projections.
//!
//! The projection decides how an axe maps its data (cartesian, logarithmic,
//! polar, cartographic, 3D, graph) and which plottables it accepts.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Projection of an axe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AxeProjection {
    /// Rectilinear plots (the most frequent use case).
    #[default]
    Rectilinear,
    /// Logarithmic x axis.
    LogX,
    /// Logarithmic y axis.
    LogY,
    /// Logarithmic x and y axes.
    LogXY,
    /// Trigonometric polar plots.
    Polar,
    /// North azimuthal plots (zero at the top, clockwise).
    NorthPolar,
    /// Plate carrée cartography. Data is given in radians.
    PlateCarree,
    /// 3D plots.
    Dim3D,
    /// Planar graphs.
    Graph,
    /// Interactive 3D application.
    Panda3D,
}

impl AxeProjection {
    /// Every projection, in declaration order.
    pub const ALL: [AxeProjection; 10] = [
        AxeProjection::Rectilinear,
        AxeProjection::LogX,
        AxeProjection::LogY,
        AxeProjection::LogXY,
        AxeProjection::Polar,
        AxeProjection::NorthPolar,
        AxeProjection::PlateCarree,
        AxeProjection::Dim3D,
        AxeProjection::Graph,
        AxeProjection::Panda3D,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AxeProjection::Rectilinear => "rectilinear",
            AxeProjection::LogX => "logx",
            AxeProjection::LogY => "logy",
            AxeProjection::LogXY => "logxy",
            AxeProjection::Polar => "polar",
            AxeProjection::NorthPolar => "north_polar",
            AxeProjection::PlateCarree => "platecarree",
            AxeProjection::Dim3D => "dim3d",
            AxeProjection::Graph => "graph",
            AxeProjection::Panda3D => "panda3d",
        }
    }

    /// Whether this is a cartographic projection (data in radians, drawn in degrees).
    #[must_use]
    pub const fn is_map(self) -> bool {
        matches!(self, AxeProjection::PlateCarree)
    }
}

impl fmt::Display for AxeProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxeProjection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let projection = match lower.as_str() {
            "rectilinear" => AxeProjection::Rectilinear,
            "logx" => AxeProjection::LogX,
            "logy" => AxeProjection::LogY,
            "logxy" => AxeProjection::LogXY,
            "polar" => AxeProjection::Polar,
            "north_polar" => AxeProjection::NorthPolar,
            // "map" is the historical name of the cartographic projection
            "platecarree" | "map" => AxeProjection::PlateCarree,
            "dim3d" => AxeProjection::Dim3D,
            "graph" => AxeProjection::Graph,
            "panda3d" => AxeProjection::Panda3D,
            _ => return Err(Error::Unsupported(format!("unknown projection '{s}'"))),
        };
        Ok(projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rectilinear() {
        assert_eq!(AxeProjection::default(), AxeProjection::Rectilinear);
    }

    #[test]
    fn test_name_round_trip() {
        for p in AxeProjection::ALL {
            assert_eq!(p.name().parse::<AxeProjection>().unwrap(), p);
        }
    }

    #[test]
    fn test_map_alias() {
        assert_eq!("map".parse::<AxeProjection>().unwrap(), AxeProjection::PlateCarree);
        assert_eq!(" North_Polar ".parse::<AxeProjection>().unwrap(), AxeProjection::NorthPolar);
    }

    #[test]
    fn test_unknown_projection() {
        assert!("mercator".parse::<AxeProjection>().is_err());
    }

    #[test]
    fn test_is_map() {
        assert!(AxeProjection::PlateCarree.is_map());
        assert!(!AxeProjection::Polar.is_map());
    }
}
