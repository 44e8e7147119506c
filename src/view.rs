//! The views of the planner and the host shell that displays them.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// The fixed image of the cruise cabin layout shown from the members view.
pub const ROOM_MAP_URL: &str = "https://duk.tw/rHRMtM.jpg";

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Overview,
    Itinerary,
    Members,
    Expenses,
    Preparation,
}

serde_plain::derive_display_from_serialize!(View);
serde_plain::derive_fromstr_from_deserialize!(View);

impl View {
    pub const ALL: [View; 5] = [
        View::Overview,
        View::Itinerary,
        View::Members,
        View::Expenses,
        View::Preparation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Itinerary => "Itinerary",
            View::Members => "Members",
            View::Expenses => "Expenses",
            View::Preparation => "Preparation",
        }
    }
}

/// The capabilities a view needs from whatever is hosting it. Neither call reports back to the
/// view.
pub trait Shell {
    /// Displays an image full screen.
    fn show_image(&mut self, url: &str);

    /// Switches to another view.
    fn navigate(&mut self, view: View);
}

/// The command line host: images open in the system viewer and navigation requests are queued
/// for the caller to render.
#[derive(Debug, Default)]
pub struct TerminalShell {
    redirect: Option<View>,
    no_viewer: bool,
}

impl TerminalShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints image links instead of launching a viewer.
    pub fn without_viewer() -> Self {
        Self {
            redirect: None,
            no_viewer: true,
        }
    }

    /// The last view requested through `navigate`, if it has not been taken yet.
    pub fn take_redirect(&mut self) -> Option<View> {
        self.redirect.take()
    }

    fn open_image(url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("Unable to open {url}"))
    }
}

impl Shell for TerminalShell {
    fn show_image(&mut self, url: &str) {
        if self.no_viewer {
            info!("Image: {url}");
            return;
        }
        debug!("Opening image {url}");
        if let Err(e) = Self::open_image(url) {
            warn!("{e:#}");
            info!("Image: {url}");
        }
    }

    fn navigate(&mut self, view: View) {
        debug!("Navigating to the {view} view");
        self.redirect = Some(view);
    }
}

/// A shell that remembers every request, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingShell {
    pub(crate) images: Vec<String>,
    pub(crate) views: Vec<View>,
}

#[cfg(test)]
impl Shell for RecordingShell {
    fn show_image(&mut self, url: &str) {
        self.images.push(url.to_string());
    }

    fn navigate(&mut self, view: View) {
        self.views.push(view);
    }
}
