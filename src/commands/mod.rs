//! Command handlers for the trip CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod convert;
mod dataset;
mod generate;
mod init;
mod prefs;
mod slideshow;
mod views;

use crate::model::{load_trip, TripData};
use crate::prefs::PreferenceStore;
use crate::render::Painter;
use crate::storage::FileStorage;
use crate::{Config, Result};
use serde::Serialize;
use std::fmt::Debug;
use std::io::IsTerminal;
use tracing::{debug, info};

pub use convert::{convert, Conversion};
pub use dataset::{dataset_export, dataset_import, dataset_reset, schema};
pub use generate::generate;
pub use init::init;
pub use prefs::{prefs, PrefsOut};
pub use slideshow::slideshow;
pub use views::{expenses, itinerary, members, overview, preparation, show, PrepOut};

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, rendered text and structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Rendered output meant for stdout.
    #[serde(skip)]
    body: Option<String>,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            body: None,
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            body: None,
            structure: None,
        }
    }

    /// Attach rendered text to be written to stdout.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the rendered text.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the body to stdout, the message to `info!` and the structured data (if it exists) as
    /// JSON to `debug!`.
    pub fn print(&self) {
        if let Some(body) = self.body() {
            print!("{body}");
        }
        if !self.message.is_empty() {
            info!("{}", self.message);
        }
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// Everything a view command needs: the config, the dataset being shown and the preferences.
#[derive(Debug)]
pub struct Session {
    config: Config,
    trip: TripData,
    prefs: PreferenceStore<FileStorage>,
    color: bool,
}

impl Session {
    /// Loads the dataset and the preferences from the storage of `config`. Colors are used only
    /// when `plain` is false and stdout is a terminal.
    pub fn open(config: Config, plain: bool) -> Result<Self> {
        let storage = config.storage()?;
        let trip = load_trip(&storage)?;
        let prefs = PreferenceStore::load(storage);
        let color = !plain && std::io::stdout().is_terminal();
        debug!(
            "Session for '{}' with theme {} and font {}",
            trip.title.trim(),
            prefs.theme(),
            prefs.font_scale()
        );
        Ok(Self {
            config,
            trip,
            prefs,
            color,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn trip(&self) -> &TripData {
        &self.trip
    }

    pub fn prefs(&self) -> &PreferenceStore<FileStorage> {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut PreferenceStore<FileStorage> {
        &mut self.prefs
    }

    pub fn painter(&self) -> Painter {
        Painter::new(self.prefs.theme(), self.prefs.font_scale(), self.color)
    }
}
