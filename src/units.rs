//! Human readable magnitudes for axis labels.
//!
//! Picks an SI prefix (`m`, `k`, `M`, ...) for a raw S.I. value, or a
//! calendar unit (`min`, `h`, `day`) when the unit is the second.

use crate::error::{Error, Result};

/// SI prefixes, smallest first.
const SI_PREFIXES: &[(f64, &str)] = &[
    (1e-18, "a"),
    (1e-15, "f"),
    (1e-12, "p"),
    (1e-9, "n"),
    (1e-6, "µ"),
    (1e-3, "m"),
    (1.0, ""),
    (1e3, "k"),
    (1e6, "M"),
    (1e9, "G"),
    (1e12, "T"),
    (1e15, "P"),
    (1e18, "E"),
];

/// Calendar units for durations expressed in seconds, smallest first.
const TIME_UNITS: &[(f64, &str)] = &[(60.0, "min"), (3600.0, "h"), (86400.0, "day")];

/// Index of the unit prefix (`1.0`) in [`SI_PREFIXES`].
const SI_UNITY: usize = 6;

/// A value rescaled to a readable magnitude.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitAbbrev {
    /// `value / mult`.
    pub scaled: f64,
    /// Divisor applied to the raw value.
    pub mult: f64,
    /// SI prefix (empty for calendar units and unity).
    pub prefix: &'static str,
    /// Unit to print after the prefix.
    pub unit: String,
}

impl UnitAbbrev {
    /// Axis-label form of the unit, e.g. `"ms"` or `"min"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.prefix, self.unit)
    }
}

/// Choose the magnitude used to display `value` expressed in `unit`.
///
/// With `force_mult`, the multiplier is imposed instead of selected; it must be
/// one of the SI multipliers (or, for `"s"`, a calendar one).
///
/// ```
/// use soyut::units::unit_abbrev;
///
/// let a = unit_abbrev(0.1, "s", None).unwrap();
/// assert_eq!((a.scaled, a.mult, a.prefix, a.unit.as_str()), (100.0, 0.001, "m", "s"));
///
/// let b = unit_abbrev(90.0, "s", None).unwrap();
/// assert_eq!((b.scaled, b.mult, b.prefix, b.unit.as_str()), (1.5, 60.0, "", "min"));
/// ```
///
/// # Errors
///
/// Returns [`Error::UnknownMultiplier`] if `force_mult` matches no table entry.
pub fn unit_abbrev(value: f64, unit: &str, force_mult: Option<f64>) -> Result<UnitAbbrev> {
    let is_time = unit == "s";

    if let Some(mult) = force_mult {
        if is_time {
            if let Some(&(m, name)) = TIME_UNITS.iter().find(|(m, _)| *m == mult) {
                return Ok(abbrev(value, m, "", name));
            }
        }
        return SI_PREFIXES
            .iter()
            .find(|(m, _)| *m == mult)
            .map(|&(m, prefix)| abbrev(value, m, prefix, unit))
            .ok_or(Error::UnknownMultiplier(mult));
    }

    let magnitude = value.abs();

    if is_time && magnitude >= TIME_UNITS[0].0 {
        let &(m, name) = TIME_UNITS
            .iter()
            .rev()
            .find(|(m, _)| *m <= magnitude)
            .unwrap_or(&TIME_UNITS[0]);
        return Ok(abbrev(value, m, "", name));
    }

    if magnitude == 0.0 || !magnitude.is_finite() {
        return Ok(abbrev(value, 1.0, "", unit));
    }

    let group = (magnitude.log10() / 3.0).floor() as i64;
    let index = (SI_UNITY as i64 + group).clamp(0, SI_PREFIXES.len() as i64 - 1) as usize;
    let (m, prefix) = SI_PREFIXES[index];

    Ok(abbrev(value, m, prefix, unit))
}

fn abbrev(value: f64, mult: f64, prefix: &'static str, unit: &str) -> UnitAbbrev {
    UnitAbbrev { scaled: value / mult, mult, prefix, unit: unit.to_string() }
}
