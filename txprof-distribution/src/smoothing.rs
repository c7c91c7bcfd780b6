//! Presentation-only smoothing of a distribution table.
//!
//! A cubic interpolating spline with not-a-knot end conditions is fitted
//! through the `(midpoint, density)` points and resampled on a finer grid.
//! The raw table stays the canonical output; the curve is for plotting.

use log::{debug, warn};

use txprof_core::SmoothingConfig;
use txprof_core::models::{DistributionBin, SmoothedCurve};

use crate::aggregate::DistributionTable;
use crate::errors::DistributionError;
use crate::histogram::linspace;

/// Fewest points a degree-3 spline can be fitted through.
pub const MIN_SPLINE_POINTS: usize = 4;

///
/// Piecewise cubic through a set of knots, stored as knot values plus the
/// first derivative at each knot.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    slopes: Vec<f64>,
}

impl CubicSpline {
    ///
    /// Fit the not-a-knot spline through `(x, y)`.
    ///
    /// The third derivative is continuous across the second and the
    /// second-to-last knot. Needs at least [`MIN_SPLINE_POINTS`] points with
    /// finite, strictly increasing `x`.
    ///
    pub fn not_a_knot(x: &[f64], y: &[f64]) -> Result<Self, DistributionError> {
        let n = x.len().min(y.len());
        if n < MIN_SPLINE_POINTS {
            return Err(DistributionError::DegenerateBinning {
                points: n,
                required: MIN_SPLINE_POINTS,
            });
        }
        let (x, y) = (&x[..n], &y[..n]);

        let dx: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        if dx.iter().any(|h| !h.is_finite() || *h <= 0.0) || y.iter().any(|v| !v.is_finite()) {
            return Err(DistributionError::SingularSpline);
        }
        let slope: Vec<f64> = y
            .windows(2)
            .zip(&dx)
            .map(|(w, h)| (w[1] - w[0]) / h)
            .collect();

        // tridiagonal system in the knot derivatives
        let mut lower = vec![0.0; n];
        let mut diag = vec![0.0; n];
        let mut upper = vec![0.0; n];
        let mut rhs = vec![0.0; n];

        let d = x[2] - x[0];
        diag[0] = dx[1];
        upper[0] = d;
        rhs[0] = ((dx[0] + 2.0 * d) * dx[1] * slope[0] + dx[0] * dx[0] * slope[1]) / d;

        for i in 1..n - 1 {
            lower[i] = dx[i];
            diag[i] = 2.0 * (dx[i - 1] + dx[i]);
            upper[i] = dx[i - 1];
            rhs[i] = 3.0 * (dx[i] * slope[i - 1] + dx[i - 1] * slope[i]);
        }

        let d = x[n - 1] - x[n - 3];
        lower[n - 1] = d;
        diag[n - 1] = dx[n - 3];
        rhs[n - 1] = (dx[n - 2] * dx[n - 2] * slope[n - 3]
            + (2.0 * d + dx[n - 2]) * dx[n - 3] * slope[n - 2])
            / d;

        let slopes = solve_tridiagonal(&lower, &diag, &upper, &rhs)?;

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            slopes,
        })
    }

    /// Value at `t`; outside the knots the end polynomials are extended.
    pub fn evaluate(&self, t: f64) -> f64 {
        let last = self.x.len() - 2;
        let i = self.x.partition_point(|&k| k <= t).saturating_sub(1).min(last);

        let h = self.x[i + 1] - self.x[i];
        let slope = (self.y[i + 1] - self.y[i]) / h;
        let (s0, s1) = (self.slopes[i], self.slopes[i + 1]);

        let tt = (s0 + s1 - 2.0 * slope) / h;
        let c0 = tt / h;
        let c1 = (slope - s0) / h - tt;
        let u = t - self.x[i];

        ((c0 * u + c1) * u + s0) * u + self.y[i]
    }
}

/// Thomas algorithm; `lower[0]` and `upper[n - 1]` are ignored.
fn solve_tridiagonal(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
) -> Result<Vec<f64>, DistributionError> {
    let n = diag.len();
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];

    for i in 0..n {
        let m = if i == 0 {
            diag[0]
        } else {
            diag[i] - lower[i] * c[i - 1]
        };
        if m.abs() < f64::EPSILON || !m.is_finite() {
            return Err(DistributionError::SingularSpline);
        }
        c[i] = if i + 1 < n { upper[i] / m } else { 0.0 };
        d[i] = if i == 0 {
            rhs[0] / m
        } else {
            (rhs[i] - lower[i] * d[i - 1]) / m
        };
    }

    let mut solution = d;
    for i in (0..n - 1).rev() {
        solution[i] -= c[i] * solution[i + 1];
    }
    Ok(solution)
}

///
/// Fit a spline through the bin midpoints and resample it at `resolution`
/// evenly spaced points from the first to the last midpoint.
///
pub fn smooth_distribution(
    bins: &[DistributionBin],
    resolution: usize,
) -> Result<SmoothedCurve, DistributionError> {
    let x: Vec<f64> = bins.iter().map(|b| b.midpoint).collect();
    let y: Vec<f64> = bins.iter().map(|b| b.density).collect();
    let spline = CubicSpline::not_a_knot(&x, &y)?;

    let grid = linspace(x[0], x[x.len() - 1], resolution);
    let values = grid.iter().map(|&t| spline.evaluate(t)).collect();
    debug!("Resampled {} bins at {} points", bins.len(), resolution);

    Ok(SmoothedCurve { x: grid, y: values })
}

/// Outcome of the optional smoothing step.
#[derive(Debug, Clone, PartialEq)]
pub enum Smoothing {
    /// Not requested
    Disabled,
    /// Requested but not possible; the raw table is unaffected
    Skipped { reason: String },
    Curve(SmoothedCurve),
}

impl Smoothing {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Smoothing::Skipped { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            Smoothing::Disabled => "disabled",
            Smoothing::Skipped { .. } => "skipped",
            Smoothing::Curve(_) => "smoothed",
        }
    }

    pub fn curve(&self) -> Option<&SmoothedCurve> {
        match self {
            Smoothing::Curve(curve) => Some(curve),
            _ => None,
        }
    }
}

///
/// Smooth `table` if `config` asks for it.
///
/// Never fails: a table that cannot carry a spline (too few bins, degenerate
/// knots) comes back as [`Smoothing::Skipped`] with the reason.
///
pub fn try_smooth(table: &DistributionTable, config: Option<&SmoothingConfig>) -> Smoothing {
    let Some(config) = config else {
        return Smoothing::Disabled;
    };

    match smooth_distribution(&table.bins, config.resolution) {
        Ok(curve) => Smoothing::Curve(curve),
        Err(e) => {
            warn!("Skipping smoothing: {}", e);
            Smoothing::Skipped {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use txprof_core::models::RegionLabel;

    fn bins_from(points: &[(f64, f64)]) -> Vec<DistributionBin> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(midpoint, density))| DistributionBin {
                bin_index: i,
                midpoint,
                count: 0,
                density,
                region: RegionLabel::Cds,
            })
            .collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[rstest]
    fn test_reproduces_cubic() {
        let f = |x: f64| x * x * x - 2.0 * x * x + 0.5 * x + 3.0;
        let x = vec![0.0, 1.0, 2.5, 3.0, 4.5, 6.0];
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
        let spline = CubicSpline::not_a_knot(&x, &y).unwrap();

        for t in [0.0, 0.3, 1.7, 2.5, 3.9, 5.2, 6.0] {
            assert_close(spline.evaluate(t), f(t));
        }
    }

    #[rstest]
    fn test_four_points_is_the_interpolating_cubic() {
        let f = |x: f64| 2.0 * x * x * x - x + 1.0;
        let x = vec![-1.0, 0.0, 1.0, 2.0];
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
        let spline = CubicSpline::not_a_knot(&x, &y).unwrap();

        assert_close(spline.evaluate(0.5), f(0.5));
        assert_close(spline.evaluate(1.5), f(1.5));
    }

    #[rstest]
    fn test_passes_through_knots() {
        let x = vec![5.0, 15.0, 25.0, 35.0, 45.0];
        let y = vec![0.0, 0.5, 0.1, 0.8, 0.2];
        let spline = CubicSpline::not_a_knot(&x, &y).unwrap();
        for (xi, yi) in x.iter().zip(&y) {
            assert_close(spline.evaluate(*xi), *yi);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn test_too_few_points(#[case] n: usize) {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let result = CubicSpline::not_a_knot(&x, &x);
        assert_eq!(
            result,
            Err(DistributionError::DegenerateBinning {
                points: n,
                required: MIN_SPLINE_POINTS,
            })
        );
    }

    #[rstest]
    fn test_repeated_knot_rejected() {
        let x = vec![0.0, 1.0, 1.0, 2.0];
        let result = CubicSpline::not_a_knot(&x, &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(result, Err(DistributionError::SingularSpline));
    }

    #[rstest]
    fn test_smooth_distribution_grid() {
        let bins = bins_from(&[(5.0, 1.0), (15.0, 2.0), (25.0, 3.0), (35.0, 4.0)]);
        let curve = smooth_distribution(&bins, 31).unwrap();

        assert_eq!(curve.len(), 31);
        assert_eq!(curve.x[0], 5.0);
        assert_eq!(curve.x[30], 35.0);
        // a straight line stays a straight line
        for (x, y) in curve.points() {
            assert_close(y, 0.1 * x + 0.5);
        }
    }

    #[rstest]
    fn test_try_smooth_skips_short_tables() {
        let table = DistributionTable {
            bins: bins_from(&[(25.0, 0.5), (75.0, 0.5)]),
            total_genes: 2,
            total_occurrences: 2,
            boundaries: crate::boundaries::RegionBoundaries {
                five_utr_pct: 10.0,
                three_utr_pct: 10.0,
            },
            filter: Default::default(),
            range: (0.0, 1.0),
        };

        let smoothing = try_smooth(&table, Some(&SmoothingConfig::default()));
        assert!(smoothing.is_skipped());
        assert_eq!(smoothing.curve(), None);
        assert_eq!(try_smooth(&table, None), Smoothing::Disabled);
    }
}
