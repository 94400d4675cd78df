//! Reads the hand-off file produced by the upstream track parser.
//!
//! The contract with the parser is a JSON array of points that already
//! carry elevation and cumulative along-track distance, both in metres.
//! GPX/XML handling happens upstream; this program never sees coordinates.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use gradix_core::{Track, TrackPoint};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawPoint {
    distance: f64,
    elevation: f64,
}

/// Reads `[{"distance": m, "elevation": m}, ...]` from `path` and validates
/// it into a `Track`. Empty, unsorted or non-finite input surfaces as the
/// core's own error taxonomy, wrapped with the offending filename.
pub fn read_track_from_file(path: &Path) -> Result<Track> {
    let file = File::open(path).with_context(|| format!("Could not open {:?}", path))?;
    let raw: Vec<RawPoint> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse {:?} as a track points file", path))?;

    let points = raw
        .into_iter()
        .map(|p| TrackPoint {
            distance_metres: p.distance,
            elevation_metres: p.elevation,
        })
        .collect();

    Track::new(points).with_context(|| format!("Invalid track in {:?}", path))
}
