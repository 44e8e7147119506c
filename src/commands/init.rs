use crate::commands::{dataset_import, Out};
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Creates the home directory and an initial `config.json`, then optionally imports a dataset.
///
/// # Arguments
/// - `trip_home` - The directory that will hold the configuration, e.g. `$HOME/.trip-deck`
/// - `dataset` - A trip dataset to import right away.
///
/// # Errors
/// - Returns an error if the home is already initialized, if any file operation fails or if the
///   dataset is not valid.
pub fn init(trip_home: &Path, dataset: Option<&Path>) -> Result<Out<()>> {
    let config = Config::create(trip_home)
        .context("Unable to create the trip-deck home directory and config")?;
    info!("Created {}", config.config_path().display());
    if let Some(file) = dataset {
        dataset_import(&config, file)?.print();
    }
    Ok(format!(
        "Successfully created the trip-deck home at {}",
        config.root().display()
    )
    .into())
}
