//! Equal-width histogram over a closed interval.
//!
//! Bins are half-open `[e_i, e_{i+1})` except the last, which is closed, so
//! a value equal to the upper bound lands in the last bin.

/// `num` evenly spaced points from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut points: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            points[num - 1] = stop;
            points
        }
    }
}

///
/// `[min, max]` of the values, or `None` if there are none.
///
/// A zero-width range falls back to the unit interval, stretched just enough
/// to still cover the value, so the bins keep a positive width and relative
/// positions never bin outside the transcript.
///
pub fn observed_range(values: &[f64]) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .iter()
        .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

    if lo == hi {
        Some((lo.min(0.0), hi.max(1.0)))
    } else {
        Some((lo, hi))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn midpoint(&self, bin: usize) -> f64 {
        (self.edges[bin] + self.edges[bin + 1]) / 2.0
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

///
/// Count `values` into `bins` equal-width bins spanning `range`.
///
/// Values outside the range are ignored.
///
pub fn histogram(values: &[f64], bins: usize, range: (f64, f64)) -> Histogram {
    let (lo, hi) = range;
    let edges = linspace(lo, hi, bins + 1);
    let mut counts = vec![0u64; bins];

    if bins == 0 {
        return Histogram { edges, counts };
    }

    let width = hi - lo;
    for &v in values {
        if !(lo..=hi).contains(&v) {
            continue;
        }
        let mut idx = (((v - lo) / width) * bins as f64) as usize;
        idx = idx.min(bins - 1);

        // the computed index can be off by one against the rounded edges
        if v < edges[idx] && idx > 0 {
            idx -= 1;
        } else if idx + 1 < bins && v >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += 1;
    }

    Histogram { edges, counts }
}
