//! Converts the irregularly spaced track into a uniform elevation series.

use crate::model::{Sample, Track};

/// Resamples the track's elevation at fixed `step_metres` intervals along
/// the distance axis, from zero up to the largest multiple of the step that
/// does not exceed the total track distance.
///
/// Elevation between recorded points is linearly interpolated. The
/// interpolation index only ever moves forward, which is sound because a
/// `Track` guarantees sorted cumulative distances. A target distance with
/// no bracketing pair (possible only on a single-point track) takes the
/// last point's elevation; there is no extrapolation past the end.
pub fn resample(track: &Track, step_metres: f64) -> Vec<Sample> {
    assert!(step_metres > 0.0);

    let points = track.points();
    let total = track.total_distance_metres();

    let steps = (total / step_metres).floor() as usize;
    let mut samples = Vec::with_capacity(steps + 1);

    let mut idx = 0;
    for n in 0..=steps {
        let d = n as f64 * step_metres;
        while idx + 1 < points.len() && points[idx + 1].distance_metres < d {
            idx += 1;
        }

        let elevation = if idx + 1 == points.len() {
            points[idx].elevation_metres
        } else {
            let p1 = points[idx];
            let p2 = points[idx + 1];
            let span = p2.distance_metres - p1.distance_metres;
            // Coincident distances collapse onto the earlier point.
            let t = if span > 0.0 {
                (d - p1.distance_metres) / span
            } else {
                0.0
            };
            p1.elevation_metres + (p2.elevation_metres - p1.elevation_metres) * t
        };

        samples.push(Sample {
            distance_metres: d,
            elevation_metres: elevation,
        });
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackPoint;

    fn track(points: &[(f64, f64)]) -> Track {
        Track::new(
            points
                .iter()
                .map(|&(distance, elevation)| TrackPoint {
                    distance_metres: distance,
                    elevation_metres: elevation,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn interpolates_between_recorded_points() {
        let t = track(&[(0.0, 100.0), (50.0, 110.0), (100.0, 100.0)]);
        let samples = resample(&t, 25.0);

        let elevations: Vec<f64> = samples.iter().map(|s| s.elevation_metres).collect();
        assert_eq!(elevations, vec![100.0, 105.0, 110.0, 105.0, 100.0]);

        let distances: Vec<f64> = samples.iter().map(|s| s.distance_metres).collect();
        assert_eq!(distances, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn sample_count_is_floor_of_total_over_step_plus_one() {
        let t = track(&[(0.0, 0.0), (110.0, 10.0)]);
        let samples = resample(&t, 25.0);
        // 0, 25, 50, 75, 100 - the 110m tail has no sample of its own.
        assert_eq!(samples.len(), 5);
        assert_eq!(samples.last().unwrap().distance_metres, 100.0);
    }

    #[test]
    fn first_sample_sits_at_distance_zero_with_the_first_elevation() {
        let t = track(&[(0.0, 42.5), (30.0, 50.0)]);
        let samples = resample(&t, 25.0);
        assert_eq!(samples[0].distance_metres, 0.0);
        assert_eq!(samples[0].elevation_metres, 42.5);
    }

    #[test]
    fn single_point_track_yields_one_sample() {
        let t = track(&[(0.0, 123.0)]);
        let samples = resample(&t, 25.0);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].distance_metres, 0.0);
        assert_eq!(samples[0].elevation_metres, 123.0);
    }

    #[test]
    fn coincident_distances_take_the_earlier_elevation() {
        let t = track(&[(0.0, 10.0), (0.0, 20.0), (100.0, 30.0)]);
        let samples = resample(&t, 25.0);
        assert_eq!(samples[0].elevation_metres, 10.0);
    }

    #[test]
    fn resampling_is_deterministic() {
        let t = track(&[(0.0, 5.0), (37.0, 9.0), (120.0, 2.0), (260.0, 14.0)]);
        assert_eq!(resample(&t, 25.0), resample(&t, 25.0));
    }
}
