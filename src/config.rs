//! Configuration file handling for trip-deck.
//!
//! The configuration file is stored at `$TRIP_DECK_HOME/config.json`. It says where persisted
//! preferences live and how fast the header images rotate.

use crate::storage::FileStorage;
use crate::{utils, Result};
use anyhow::{bail, ensure, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const APP_NAME: &str = "trip-deck";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const STORAGE_DIR: &str = "storage";
const HERO_INTERVAL_MS: u64 = 3000;

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$TRIP_DECK_HOME` and from there it loads `$TRIP_DECK_HOME/config.json`.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the home directory and writes an initial `config.json` with default settings.
    ///
    /// # Errors
    /// - Returns an error if the home is already initialized or if any file operation fails.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative).context("Unable to create the trip-deck home directory")?;
        let root = utils::canonicalize(&maybe_relative)?;

        let config_path = root.join(CONFIG_JSON);
        ensure!(
            !config_path.exists(),
            "The config file already exists '{}'",
            config_path.display()
        );
        let config_file = ConfigFile::default();
        config_file.save(&config_path)?;

        let config = Self {
            root,
            config_path,
            config_file,
        };
        utils::make_dir(&config.storage_path())?;
        debug!("Created config at {}", config.config_path.display());
        Ok(config)
    }

    /// Validates that the home and its config file exist, then loads the config file.
    pub fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = utils::canonicalize(&maybe_relative).context("The trip-deck home is missing")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!("The config file is missing '{}'", config_path.display())
        }
        let config_file = ConfigFile::load(&config_path)?;
        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// Loads the config at `home`, creating it with defaults on first use.
    pub fn open(home: impl Into<PathBuf>) -> Result<Self> {
        let home = home.into();
        if home.join(CONFIG_JSON).is_file() {
            Self::load(home)
        } else {
            debug!("No config found in {}, creating one", home.display());
            Self::create(home)
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The directory of persisted preferences. A relative `storage_path` is resolved against the
    /// home directory.
    pub fn storage_path(&self) -> PathBuf {
        let p = self.config_file.storage_path();
        if p.is_absolute() {
            return p;
        }
        self.root.join(p)
    }

    /// Opens the file storage, creating its directory when needed.
    pub fn storage(&self) -> Result<FileStorage> {
        FileStorage::new(self.storage_path())
    }

    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.config_file.hero_interval_ms)
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "trip-deck",
///   "config_version": 1,
///   "storage_path": "storage",
///   "hero_interval_ms": 3000
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "trip-deck"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Directory of persisted preferences (optional, relative to the home or absolute)
    /// Defaults to $TRIP_DECK_HOME/storage if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage_path: Option<PathBuf>,

    /// Milliseconds between header image changes
    #[serde(default = "default_hero_interval_ms")]
    hero_interval_ms: u64,
}

fn default_hero_interval_ms() -> u64 {
    HERO_INTERVAL_MS
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            storage_path: None,
            hero_interval_ms: HERO_INTERVAL_MS,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if its values are invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path)?;

        ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        ensure!(
            config.hero_interval_ms > 0,
            "Invalid hero_interval_ms in config file: it must be greater than zero"
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data).context("Unable to write config file")
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(STORAGE_DIR))
    }
}
