//! Moving-average smoothing of the resampled elevation series.

use crate::model::Sample;

/// Applies a centred moving average over the uniform series to suppress GPS
/// elevation noise. `window_metres` is expressed in track distance and is
/// converted to a whole number of samples using the resampling step.
///
/// The window is clipped at the ends of the series, so boundary samples
/// average over fewer, asymmetrically placed neighbours. There is no
/// padding or wraparound; downstream statistics depend on exactly this
/// behaviour.
pub fn smooth(samples: &[Sample], window_metres: f64, step_metres: f64) -> Vec<Sample> {
    assert!(step_metres > 0.0);

    if samples.is_empty() {
        return Vec::new();
    }

    let window_size = (window_metres / step_metres).floor() as usize;
    let half = window_size / 2;

    samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let lo = i.saturating_sub(half);
            let hi = (i + half).min(samples.len() - 1);
            let sum: f64 = samples[lo..=hi].iter().map(|s| s.elevation_metres).sum();
            Sample {
                distance_metres: s.distance_metres,
                elevation_metres: sum / (hi - lo + 1) as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(elevations: &[f64]) -> Vec<Sample> {
        elevations
            .iter()
            .enumerate()
            .map(|(i, &elevation)| Sample {
                distance_metres: i as f64 * 25.0,
                elevation_metres: elevation,
            })
            .collect()
    }

    #[test]
    fn constant_series_is_a_fixed_point() {
        let input = series(&[7.0; 9]);
        assert_eq!(smooth(&input, 100.0, 25.0), input);
    }

    #[test]
    fn length_and_distances_are_preserved() {
        let input = series(&[0.0, 10.0, 0.0, 10.0, 0.0]);
        let output = smooth(&input, 100.0, 25.0);
        assert_eq!(output.len(), input.len());
        for (a, b) in input.iter().zip(&output) {
            assert_eq!(a.distance_metres, b.distance_metres);
        }
    }

    #[test]
    fn interior_sample_averages_the_full_window() {
        // window 100m / step 25m = 4 samples, half-width 2.
        let input = series(&[0.0, 10.0, 20.0, 30.0, 40.0]);
        let output = smooth(&input, 100.0, 25.0);
        assert_eq!(output[2].elevation_metres, 20.0);
    }

    #[test]
    fn boundary_windows_are_clipped_not_padded() {
        let input = series(&[0.0, 10.0, 20.0, 30.0, 40.0]);
        let output = smooth(&input, 100.0, 25.0);
        // First sample only sees itself and its two following neighbours.
        assert_eq!(output[0].elevation_metres, 10.0);
        assert_eq!(output[4].elevation_metres, 30.0);
        // One in from the edge sees one neighbour on the left, two on the right.
        assert_eq!(output[1].elevation_metres, 15.0);
    }

    #[test]
    fn window_narrower_than_a_step_leaves_the_series_unchanged() {
        let input = series(&[3.0, 9.0, 1.0]);
        assert_eq!(smooth(&input, 10.0, 25.0), input);
    }

    #[test]
    fn empty_series_stays_empty() {
        assert!(smooth(&[], 100.0, 25.0).is_empty());
    }
}
