//! The end-to-end elevation profile pipeline.

use log::debug;
use logging_timer::time;

use crate::ascent::accumulate_gain_loss;
use crate::model::{ChartPoint, Track};
use crate::resample::resample;
use crate::simplification::reduce_profile_by_rdp;
use crate::slope::annotate_slopes;
use crate::smooth::smooth;
use crate::stats::{build_stats, Stats};

/// The tuning knobs of the pipeline. The defaults are the values the chart
/// is calibrated for; they are policy, not physical constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileParameters {
    /// Resampling step along the distance axis, in metres.
    pub step_metres: f64,

    /// Width of the moving-average smoothing window, in metres of track
    /// distance.
    pub smoothing_window_metres: f64,

    /// Minimum committed elevation movement, in metres. Anything smaller
    /// relative to the last committed anchor is treated as GPS noise.
    pub gain_loss_threshold_metres: f64,

    /// Ramer-Douglas-Peucker tolerance for the chart series, in plot units
    /// (metres on both axes).
    pub simplification_tolerance: f64,
}

impl Default for ProfileParameters {
    fn default() -> Self {
        Self {
            step_metres: 25.0,
            smoothing_window_metres: 100.0,
            gain_loss_threshold_metres: 4.0,
            simplification_tolerance: 3.0,
        }
    }
}

/// Everything the presentation layer needs: the summary statistics and the
/// reduced, slope-annotated series to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub stats: Stats,
    pub chart_data: Vec<ChartPoint>,
}

/// Runs the full pipeline over a validated track:
/// resample, smooth, then gain/loss accumulation on one branch and
/// simplification plus slope annotation on the other, finishing with the
/// stats formatting.
///
/// Pure and idempotent: the same track and parameters always produce the
/// same profile, and nothing is retained between calls.
#[time]
pub fn build_profile(track: &Track, params: &ProfileParameters) -> Profile {
    let samples = resample(track, params.step_metres);
    let smoothed = smooth(&samples, params.smoothing_window_metres, params.step_metres);

    let gain_loss = accumulate_gain_loss(&smoothed, params.gain_loss_threshold_metres);
    let stats = build_stats(track.total_distance_metres(), gain_loss, &smoothed);

    let mut reduced = smoothed;
    let start_count = reduced.len();
    reduce_profile_by_rdp(&mut reduced, params.simplification_tolerance);
    debug!(
        "Simplification reduced the profile from {start_count} to {} points",
        reduced.len()
    );

    let chart_data = annotate_slopes(&reduced);

    Profile { stats, chart_data }
}
