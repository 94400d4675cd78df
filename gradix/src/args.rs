use std::path::PathBuf;

use clap::Parser;
use gradix_core::ProfileParameters;

/// Returns the parsed command line options. Uses the 'wild' crate to do glob
/// expansion on Windows, so that Windows and Linux behave identically.
pub fn parse_args() -> Args {
    Args::parse_from(wild::args())
}

/// The step and window are lengths and must be strictly positive, otherwise
/// the resampler has no step to advance by.
fn positive_metres(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a positive number of metres"))
    }
}

/// The threshold and tolerance are magnitudes; zero disables the filtering
/// but negative values would invert it.
fn non_negative_metres(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a non-negative number of metres"))
    }
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        default_value = "25.0",
        value_parser = positive_metres,
        help = "Resampling step along the distance axis, in metres"
    )]
    pub step: f64,

    #[arg(
        long,
        default_value = "100.0",
        value_parser = positive_metres,
        help = "Width of the moving-average smoothing window, in metres of track distance"
    )]
    pub window: f64,

    #[arg(
        long,
        default_value = "4.0",
        value_parser = non_negative_metres,
        help = "Elevation change, in metres, below which movement is treated as GPS noise \
                when accumulating gain and loss"
    )]
    pub threshold: f64,

    #[arg(
        long,
        default_value = "3.0",
        value_parser = non_negative_metres,
        help = "Ramer-Douglas-Peucker tolerance for the chart series, in plotted units"
    )]
    pub tolerance: f64,

    #[arg(
        short,
        long,
        default_value = "false",
        help = "Write the chart-ready point series to a '.chart.json' file next to each input"
    )]
    pub chart: bool,

    #[arg(
        help = "List of track files to process: JSON arrays of points with 'distance' and \
                'elevation' in metres, as produced by the track parser"
    )]
    pub files: Vec<PathBuf>,
}

impl Args {
    pub fn parameters(&self) -> ProfileParameters {
        ProfileParameters {
            step_metres: self.step,
            smoothing_window_metres: self.window,
            gain_loss_threshold_metres: self.threshold,
            simplification_tolerance: self.tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_pipeline_defaults() {
        let args = Args::try_parse_from(["gradix"]).unwrap();
        assert_eq!(args.parameters(), ProfileParameters::default());
    }

    #[test]
    fn zero_or_negative_step_is_rejected_at_parse_time() {
        assert!(Args::try_parse_from(["gradix", "--step", "0"]).is_err());
        assert!(Args::try_parse_from(["gradix", "--step", "-25"]).is_err());
        assert!(Args::try_parse_from(["gradix", "--window", "0"]).is_err());
    }

    #[test]
    fn negative_threshold_and_tolerance_are_rejected_at_parse_time() {
        assert!(Args::try_parse_from(["gradix", "--threshold", "-4"]).is_err());
        assert!(Args::try_parse_from(["gradix", "--tolerance", "-3"]).is_err());
    }

    #[test]
    fn zero_threshold_and_tolerance_are_allowed() {
        let args = Args::try_parse_from(["gradix", "--threshold", "0", "--tolerance", "0"]).unwrap();
        assert_eq!(args.threshold, 0.0);
        assert_eq!(args.tolerance, 0.0);
    }

    #[test]
    fn non_numeric_overrides_are_rejected() {
        assert!(Args::try_parse_from(["gradix", "--step", "fast"]).is_err());
        assert!(Args::try_parse_from(["gradix", "--threshold", "NaN"]).is_err());
    }
}
