//! Grade annotation of the simplified profile.

use crate::model::{ChartPoint, Sample};

/// Converts the simplified series into chart points, attaching to each
/// point the slope angle of the segment that starts there.
///
/// The grade of a segment is rise over run in percent; the stored value is
/// its angle equivalent, `atan(grade / 100)` in degrees, rounded to one
/// decimal. Segments with no forward progress (duplicate x) and the final
/// point keep the default slope of zero.
pub fn annotate_slopes(samples: &[Sample]) -> Vec<ChartPoint> {
    let mut chart: Vec<ChartPoint> = samples
        .iter()
        .map(|s| ChartPoint {
            x: s.distance_metres,
            y: s.elevation_metres,
            slope: 0.0,
        })
        .collect();

    for i in 1..chart.len() {
        let dx = chart[i].x - chart[i - 1].x;
        if dx > 0.0 {
            let grade = (chart[i].y - chart[i - 1].y) / dx * 100.0;
            let degrees = (grade / 100.0).atan().to_degrees();
            chart[i - 1].slope = (degrees * 10.0).round() / 10.0;
        }
    }

    chart
}
