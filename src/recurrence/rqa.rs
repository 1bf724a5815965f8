//! Recurrence Quantification Analysis
//!
//! Three scalars summarize a recurrence plot:
//!
//! - **RR** (recurrence rate): density of recurrent points.
//! - **DET** (determinism): share of recurrent points lying on diagonal
//!   lines, i.e. stretches where two trajectory segments run in parallel.
//! - **LAM** (laminarity): share of recurrent points lying on vertical
//!   lines, i.e. stretches where the state is trapped.
//!
//! Lines shorter than [`MIN_LINE_LENGTH`] are isolated points and do not count.
//! The line of identity (main diagonal) is excluded from the diagonal scan.

use serde::{Deserialize, Serialize};

use super::binarize::RecurrenceMatrix;
use crate::constants::MIN_LINE_LENGTH;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RqaMetrics {
    /// Recurrence rate
    pub rr: f64,
    /// Determinism
    pub det: f64,
    /// Laminarity
    pub lam: f64,
}

impl RqaMetrics {
    /// (RR, DET, LAM) scaled to percent for display
    pub fn as_percentages(&self) -> (f64, f64, f64) {
        (self.rr * 100.0, self.det * 100.0, self.lam * 100.0)
    }
}

/// Tally of maximal runs of recurrent points along one family of lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStatistics {
    /// Number of runs at least MIN_LINE_LENGTH long
    pub lines: usize,
    /// Recurrent points lying on those runs
    pub points: usize,
    /// Longest run seen (0 when there are no qualifying runs)
    pub longest: usize,
}

impl LineStatistics {
    fn close_run(&mut self, run: usize) {
        if run >= MIN_LINE_LENGTH {
            self.lines += 1;
            self.points += run;
            self.longest = self.longest.max(run);
        }
    }

    fn scan<I: IntoIterator<Item = bool>>(&mut self, cells: I) {
        let mut run = 0;
        for recurrent in cells {
            if recurrent {
                run += 1;
            } else {
                self.close_run(run);
                run = 0;
            }
        }
        self.close_run(run);
    }

    /// points / rec_count, capped at 1; 0 when nothing recurs
    fn ratio(&self, rec_count: usize) -> f64 {
        if rec_count == 0 {
            return 0.0;
        }
        (self.points as f64 / rec_count as f64).min(1.0)
    }
}

/// Runs along the off-diagonals (i, i+k) for k = 1..N'.
pub fn diagonal_lines(plot: &RecurrenceMatrix) -> LineStatistics {
    let n = plot.len();
    let mut stats = LineStatistics::default();
    for k in 1..n {
        stats.scan((0..n - k).map(|i| plot.is_recurrent(i, i + k)));
    }
    stats
}

/// Runs down every column.
pub fn vertical_lines(plot: &RecurrenceMatrix) -> LineStatistics {
    let n = plot.len();
    let mut stats = LineStatistics::default();
    for j in 0..n {
        stats.scan((0..n).map(|i| plot.is_recurrent(i, j)));
    }
    stats
}

/// RR, DET and LAM of a recurrence plot.
///
/// DET and LAM share one denominator: the recurrence count over the whole
/// matrix. An empty plot gives all zeros.
pub fn compute_rqa(plot: &RecurrenceMatrix) -> RqaMetrics {
    let n = plot.len();
    if n == 0 {
        return RqaMetrics::default();
    }

    let rec_count = plot.recurrence_count();

    RqaMetrics {
        rr: rec_count as f64 / (n * n) as f64,
        det: diagonal_lines(plot).ratio(rec_count),
        lam: vertical_lines(plot).ratio(rec_count),
    }
}
