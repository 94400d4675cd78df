//! Polyline simplification of the smoothed profile.

use std::collections::HashSet;

use geo::{coord, LineString, SimplifyIdx};
use logging_timer::time;

use crate::model::Sample;

/// Feed the profile into the GEO crate so we can use its implementation
/// of https://en.wikipedia.org/wiki/Ramer%E2%80%93Douglas%E2%80%93Peucker_algorithm
///
/// The profile is plotted with metres on both axes (distance as x,
/// elevation as y), so `epsilon` is already in plot units and needs no
/// coordinate-scale conversion.
///
/// Properties the rest of the pipeline relies on: the first and last points
/// always survive, no new points are introduced (every output point is an
/// input point), and the ascending x-order of the input is preserved.
#[time]
pub fn reduce_profile_by_rdp(samples: &mut Vec<Sample>, epsilon: f64) {
    // geo requires at least two coords in a LineString; a series that
    // short is already its own simplification.
    if samples.len() < 2 {
        return;
    }

    let line_string: LineString<f64> = samples
        .iter()
        .map(|s| coord! { x: s.distance_metres, y: s.elevation_metres })
        .collect();
    let indices_to_keep: HashSet<usize> = HashSet::from_iter(line_string.simplify_idx(&epsilon));

    let mut n = 0;
    samples.retain(|_| {
        let keep = indices_to_keep.contains(&n);
        n += 1;
        keep
    });
}
