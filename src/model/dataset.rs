//! Loading the trip dataset: a stored override when one exists, otherwise the built-in sample.

use crate::model::{sample_trip, TripData};
use crate::storage::Storage;
use crate::Result;
use anyhow::Context;
use tracing::{debug, warn};

/// The storage key of the dataset override. Bump the suffix to abandon old stored datasets.
pub const DATA_KEY: &str = "trip_deck_data_v1";

/// Returns the stored dataset override if one is present and parses, otherwise the built-in sample.
///
/// A missing, unreadable or unparsable override is not an error: it is logged and the sample is
/// used instead.
pub fn load_trip(storage: &dyn Storage) -> Result<TripData> {
    match storage.get(DATA_KEY) {
        Ok(Some(json)) => match serde_json::from_str::<TripData>(&json) {
            Ok(trip) => {
                debug!("Loaded the stored trip dataset '{}'", trip.title);
                return Ok(trip);
            }
            Err(e) => warn!("The stored trip dataset could not be parsed, using the sample: {e}"),
        },
        Ok(None) => debug!("No stored trip dataset, using the sample"),
        Err(e) => warn!("Unable to read the stored trip dataset, using the sample: {e:#}"),
    }
    sample_trip()
}

/// Checks that `json` parses as a `TripData` and stores it as the dataset override.
pub fn import_trip(storage: &mut dyn Storage, json: &str) -> Result<TripData> {
    let trip: TripData =
        serde_json::from_str(json).context("The dataset is not a valid trip JSON document")?;
    storage
        .set(DATA_KEY, json)
        .context("Unable to store the trip dataset")?;
    Ok(trip)
}

/// Removes the dataset override so that the built-in sample is used again.
pub fn clear_trip(storage: &mut dyn Storage) -> Result<()> {
    storage
        .remove(DATA_KEY)
        .context("Unable to remove the stored trip dataset")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const MINIMAL: &str = r#"{"destination": "Oslo", "startDate": "2025-06-01", "title": "Fjords"}"#;

    #[test]
    fn test_load_falls_back_to_sample() {
        let storage = MemoryStorage::new();
        let trip = load_trip(&storage).unwrap();
        assert_eq!(trip, sample_trip().unwrap());
    }

    #[test]
    fn test_import_then_load() {
        let mut storage = MemoryStorage::new();
        import_trip(&mut storage, MINIMAL).unwrap();
        let trip = load_trip(&storage).unwrap();
        assert_eq!(trip.destination, "Oslo");

        clear_trip(&mut storage).unwrap();
        assert_eq!(load_trip(&storage).unwrap().destination, "Singapore & Phuket");
    }

    #[test]
    fn test_import_rejects_bad_json() {
        let mut storage = MemoryStorage::new();
        assert!(import_trip(&mut storage, "{not json").is_err());
        assert_eq!(storage.get(DATA_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_override_uses_sample() {
        let mut storage = MemoryStorage::new();
        storage.set(DATA_KEY, "[1, 2, 3]").unwrap();
        let trip = load_trip(&storage).unwrap();
        assert_eq!(trip.destination, "Singapore & Phuket");
    }

    #[test]
    fn test_unreadable_override_uses_sample() {
        let storage = MemoryStorage::new().with_failing_key(DATA_KEY);
        let trip = load_trip(&storage).unwrap();
        assert_eq!(trip.destination, "Singapore & Phuket");
    }
}
