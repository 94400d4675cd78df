use serde::Serialize;

use crate::errors::GradixError;

/// A single recorded location sample, as handed over by the upstream track
/// parser. Latitude and longitude have already been collapsed into a
/// cumulative along-track distance; the pipeline never sees coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    /// Cumulative distance from the start of the track, in metres.
    /// Monotonically non-decreasing along the sequence (ties allowed).
    pub distance_metres: f64,
    /// The elevation in metres. May be zero or negative (below sea level).
    pub elevation_metres: f64,
}

/// The first track of a parsed file, validated at construction.
///
/// Validation happens exactly once, here. Every downstream stage relies on
/// the invariants (non-empty, distances sorted ascending, all values
/// finite) without re-checking them, in particular the resampler's
/// forward-only interpolation index.
#[derive(Debug, Clone)]
pub struct Track {
    points: Vec<TrackPoint>,
}

impl Track {
    pub fn new(points: Vec<TrackPoint>) -> Result<Self, GradixError> {
        if points.is_empty() {
            return Err(GradixError::NoTrackData);
        }

        for (index, p) in points.iter().enumerate() {
            if !p.elevation_metres.is_finite() {
                return Err(GradixError::MalformedTrack {
                    index,
                    reason: "non-finite elevation",
                });
            }
            if !p.distance_metres.is_finite() {
                return Err(GradixError::MalformedTrack {
                    index,
                    reason: "non-finite cumulative distance",
                });
            }
            if index > 0 && p.distance_metres < points[index - 1].distance_metres {
                return Err(GradixError::MalformedTrack {
                    index,
                    reason: "cumulative distance decreases",
                });
            }
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    /// The total along-track distance in metres, i.e. the last point's
    /// cumulative distance.
    pub fn total_distance_metres(&self) -> f64 {
        self.points[self.points.len() - 1].distance_metres
    }
}

/// One elevation value of the uniform, fixed-step series the resampler
/// produces and the smoother filters. Distances survive smoothing
/// unchanged; only elevations are rewritten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Distance from the start of the track, in metres. Always a whole
    /// multiple of the resampling step.
    pub distance_metres: f64,
    pub elevation_metres: f64,
}

/// A point of the chart-ready series: distance on the x axis, elevation on
/// the y axis, and the slope angle (degrees, one decimal) of the segment
/// that starts at this point. The last point of a series has no following
/// segment and keeps the default slope of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub slope: f64,
}
