//! Threshold-based accumulation of total ascent and descent.

use crate::model::Sample;

/// Total ascent and descent over a series, in metres, full precision.
/// Rounding to whole metres happens only at formatting time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GainLoss {
    pub gain_metres: f64,
    pub loss_metres: f64,
}

/// Walks the smoothed series with a hysteresis threshold and accumulates
/// total elevation gain and loss.
///
/// An anchor starts at the first sample's elevation. A gain or loss is only
/// committed once the elevation has moved at least `threshold_metres` away
/// from the anchor, at which point the anchor resets to the current
/// elevation. Movement that never escapes the threshold band is treated as
/// noise or plateau and counts for nothing, so small back-and-forth
/// oscillations are not double-counted.
pub fn accumulate_gain_loss(samples: &[Sample], threshold_metres: f64) -> GainLoss {
    let Some(first) = samples.first() else {
        return GainLoss::default();
    };

    let (_, gain, loss) = samples[1..].iter().fold(
        (first.elevation_metres, 0.0, 0.0),
        |(anchor, gain, loss), sample| {
            let diff = sample.elevation_metres - anchor;
            if diff >= threshold_metres {
                (sample.elevation_metres, gain + diff, loss)
            } else if diff <= -threshold_metres {
                (sample.elevation_metres, gain, loss - diff)
            } else {
                (anchor, gain, loss)
            }
        },
    );

    GainLoss {
        gain_metres: gain,
        loss_metres: loss,
    }
}
