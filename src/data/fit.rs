//! Least-squares polynomial fitting.
//!
//! The abscissa is mapped onto `[-1, 1]` and the Vandermonde system is solved
//! by Householder QR, so the conditioning is that of the scaled Vandermonde
//! matrix itself.

use crate::error::{Error, Result};

/// A polynomial fitted on a scaled abscissa.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    /// Coefficients in the scaled variable, lowest degree first.
    coefs: Vec<f64>,
    /// Affine map `t = offset + scale * x`.
    offset: f64,
    scale: f64,
}

impl Polynomial {
    /// Least-squares fit of degree `deg` through `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`Error::DataLengthMismatch`] if `x` and `y` differ in length,
    /// [`Error::InsufficientData`] with `deg` points or fewer and
    /// [`Error::SingularFit`] if the abscissa does not determine the polynomial.
    pub fn fit(x: &[f64], y: &[f64], deg: usize) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::DataLengthMismatch { x_len: x.len(), y_len: y.len() });
        }
        let n = deg
            .checked_add(1)
            .filter(|&n| n <= x.len())
            .ok_or(Error::InsufficientData { deg, len: x.len() })?;

        let lo = x.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (offset, scale) = if hi > lo {
            let scale = 2.0 / (hi - lo);
            (-1.0 - lo * scale, scale)
        } else {
            (-lo, 1.0)
        };

        // column-major Vandermonde matrix: columns[j][i] = t_i^j
        let mut columns = vec![Vec::with_capacity(x.len()); n];
        for &xi in x {
            let t = offset + scale * xi;
            for (column, power) in columns.iter_mut().zip(std::iter::successors(Some(1.0), |p| Some(p * t))) {
                column.push(power);
            }
        }

        let coefs = solve_least_squares(columns, y.to_vec())?;
        Ok(Self { coefs, offset, scale })
    }

    /// Evaluate the polynomial at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let t = self.offset + self.scale * x;
        self.coefs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }

    /// Degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(p, q)| p * q).sum()
}

/// Reflect `target` by the Householder vector `v` (with squared norm `vv`).
fn reflect(v: &[f64], vv: f64, target: &mut [f64]) {
    let s = 2.0 * dot(v, target) / vv;
    for (t, vi) in target.iter_mut().zip(v) {
        *t -= s * vi;
    }
}

/// Minimize `|A c - b|` for a tall column-major `A` with Householder QR.
fn solve_least_squares(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = a.len();
    let m = b.len();
    let largest = a.iter().map(|c| dot(c, c).sqrt()).fold(0.0_f64, f64::max);
    let tolerance = largest * m as f64 * f64::EPSILON;

    for k in 0..n {
        let norm = dot(&a[k][k..], &a[k][k..]).sqrt();
        if norm <= tolerance {
            return Err(Error::SingularFit);
        }
        let alpha = if a[k][k] > 0.0 { -norm } else { norm };
        let mut v = a[k][k..].to_vec();
        v[0] -= alpha;
        let vv = dot(&v, &v);

        for column in &mut a[k..] {
            reflect(&v, vv, &mut column[k..]);
        }
        reflect(&v, vv, &mut b[k..]);
    }

    // back substitution on R, stored in the upper triangle of the columns
    let mut coefs = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|j| a[j][row] * coefs[j]).sum();
        coefs[row] = (b[row] - tail) / a[row][row];
    }
    Ok(coefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fit_line() {
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v - 2.0).collect();
        let p = Polynomial::fit(&x, &y, 1).unwrap();
        assert_eq!(p.degree(), 1);
        assert_abs_diff_eq!(p.eval(20.0), 58.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_quadratic() {
        let x: Vec<f64> = (0..7).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v - v + 0.5).collect();
        let p = Polynomial::fit(&x, &y, 2).unwrap();
        for (&xi, &yi) in x.iter().zip(&y) {
            assert_abs_diff_eq!(p.eval(xi), yi, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fit_constant_on_single_point() {
        let p = Polynomial::fit(&[4.0], &[7.5], 0).unwrap();
        assert_abs_diff_eq!(p.eval(100.0), 7.5);
    }

    #[test]
    fn test_fit_least_squares_mean() {
        let p = Polynomial::fit(&[0.0, 1.0, 2.0, 3.0], &[1.0, -1.0, 1.0, -1.0], 0).unwrap();
        assert_abs_diff_eq!(p.eval(0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_insufficient() {
        assert_eq!(Polynomial::fit(&[0.0, 1.0], &[0.0, 1.0], 2), Err(Error::InsufficientData { deg: 2, len: 2 }));
    }

    #[test]
    fn test_fit_singular() {
        // two distinct abscissae cannot determine a parabola
        let r = Polynomial::fit(&[1.0, 1.0, 2.0, 2.0], &[0.0, 0.0, 1.0, 1.0], 2);
        assert_eq!(r, Err(Error::SingularFit));
    }

    #[test]
    fn test_fit_huge_degree() {
        let r = Polynomial::fit(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], usize::MAX);
        assert_eq!(r, Err(Error::InsufficientData { deg: usize::MAX, len: 3 }));
    }

    #[test]
    fn test_fit_high_degree_is_stable() {
        let x: Vec<f64> = (0..200).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| (-1.0 + 2.0 * v / 199.0).powi(20)).collect();
        let p = Polynomial::fit(&x, &y, 20).unwrap();
        assert_eq!(p.degree(), 20);
        for (&xi, &yi) in x.iter().zip(&y) {
            assert_abs_diff_eq!(p.eval(xi), yi, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fit_length_mismatch() {
        assert!(matches!(Polynomial::fit(&[0.0], &[0.0, 1.0], 0), Err(Error::DataLengthMismatch { .. })));
    }
}
