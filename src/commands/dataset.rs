use crate::commands::{Out, Session};
use crate::model::{clear_trip, import_trip, TripData};
use crate::{utils, Config, Result};
use anyhow::Context;
use std::path::Path;

/// Stores the dataset in `file` so that it is shown instead of the sample.
pub fn dataset_import(config: &Config, file: &Path) -> Result<Out<TripData>> {
    let json = utils::read(file)?;
    let mut storage = config.storage()?;
    let trip = import_trip(&mut storage, &json)
        .with_context(|| format!("Unable to import {}", file.display()))?;
    Ok(Out::new(
        format!(
            "Imported '{}' with {} days",
            trip.title.trim(),
            trip.days.len()
        ),
        trip,
    ))
}

/// Prints the dataset being shown as JSON.
pub fn dataset_export(session: &Session) -> Result<Out<()>> {
    let json =
        serde_json::to_string_pretty(session.trip()).context("Unable to serialize the trip")?;
    Ok(Out::new_message("").with_body(format!("{json}\n")))
}

/// Removes the imported dataset.
pub fn dataset_reset(config: &Config) -> Result<Out<()>> {
    let mut storage = config.storage()?;
    clear_trip(&mut storage)?;
    Ok("The built-in sample trip will be shown".into())
}

/// Prints the JSON schema of a trip dataset.
pub fn schema() -> Result<Out<()>> {
    let schema = schemars::schema_for!(TripData);
    let json = serde_json::to_string_pretty(&schema).context("Unable to serialize the schema")?;
    Ok(Out::new_message("").with_body(format!("{json}\n")))
}
