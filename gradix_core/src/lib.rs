//! Derives trustworthy elevation gain/loss statistics and a chart-ready,
//! slope-annotated point series from a parsed GPS track.
//!
//! The input is a [`Track`]: an ordered, validated sequence of points that
//! already carry elevation and cumulative along-track distance (coordinate
//! handling and GPX parsing happen upstream). [`build_profile`] runs the
//! numeric pipeline - fixed-step resampling, moving-average smoothing,
//! hysteresis gain/loss accumulation, Ramer-Douglas-Peucker reduction and
//! per-segment slope annotation - and returns a [`Profile`] holding the
//! summary [`Stats`] and the reduced series for an elevation-vs-distance
//! chart.

pub mod ascent;
pub mod errors;
pub mod model;
pub mod profile;
pub mod resample;
pub mod simplification;
pub mod slope;
pub mod smooth;
pub mod stats;

pub use errors::GradixError;
pub use model::{ChartPoint, Track, TrackPoint};
pub use profile::{build_profile, Profile, ProfileParameters};
pub use stats::Stats;
