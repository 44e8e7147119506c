//! The built-in trip, shown whenever no dataset override is stored.

use crate::model::TripData;
use crate::Result;
use anyhow::Context;

const SAMPLE_TRIP_JSON: &str = include_str!("sample_trip.json");

/// Parses the built-in sample trip that is embedded in the binary.
pub fn sample_trip() -> Result<TripData> {
    serde_json::from_str(SAMPLE_TRIP_JSON).context("The built-in sample trip is not valid")
}
