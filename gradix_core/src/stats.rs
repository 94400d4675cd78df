//! Final formatting of the summary statistics.

use serde::Serialize;

use crate::ascent::GainLoss;
use crate::model::Sample;

/// The summary record handed to the presentation layer. The field names
/// follow the chart consumer's contract, hence camelCase on the wire, and
/// most figures are pre-formatted strings ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Total distance in kilometres, to two decimal places.
    pub distance: String,
    /// Total distance in metres, numeric and unrounded.
    pub total_distance: f64,
    /// Total ascent in whole metres.
    pub elevation_gain: String,
    /// Total descent in whole metres.
    pub elevation_loss: String,
    /// Highest elevation of the smoothed series, in whole metres.
    pub max_elevation: String,
    /// Lowest elevation of the smoothed series, in whole metres.
    pub min_elevation: String,
}

/// Derives the display statistics. No new computation happens here beyond
/// rounding; note that the elevation extremes are taken over the smoothed
/// series rather than the raw points, so the reported figures agree with
/// the plotted profile.
pub fn build_stats(total_distance_metres: f64, gain_loss: GainLoss, smoothed: &[Sample]) -> Stats {
    debug_assert!(!smoothed.is_empty());

    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for s in smoothed {
        max = max.max(s.elevation_metres);
        min = min.min(s.elevation_metres);
    }

    Stats {
        distance: format!("{:.2}", total_distance_metres / 1000.0),
        total_distance: total_distance_metres,
        elevation_gain: format!("{}", gain_loss.gain_metres.round() as i64),
        elevation_loss: format!("{}", gain_loss.loss_metres.round() as i64),
        max_elevation: format!("{}", max.round() as i64),
        min_elevation: format!("{}", min.round() as i64),
    }
}
