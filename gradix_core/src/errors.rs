use thiserror::Error;

/// Errors detected at the track boundary. All the numeric stages are pure
/// and infallible; anything wrong with the input is rejected here, once,
/// before a `Track` ever exists.
#[derive(Debug, Error)]
pub enum GradixError {
    /// The parsed input contained no points at all. Reported distinctly so
    /// the caller can tell the user "nothing to chart" rather than showing
    /// an empty chart.
    #[error("no track data: the parsed input contains no points")]
    NoTrackData,

    /// A point carried a value the pipeline cannot trust: a non-finite
    /// elevation or distance, or a cumulative distance that goes backwards.
    #[error("malformed track: {reason} at point {index}")]
    MalformedTrack {
        /// Index of the offending point in the parsed sequence.
        index: usize,
        reason: &'static str,
    },
}
