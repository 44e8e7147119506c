//! Types that represent the trip dataset, such as `TripData`, `DayPlan` and `PreparationItem`.
//!
//! Field names serialize in camelCase so that datasets written for the browser version of the
//! planner load unchanged.
mod dataset;
mod sample;

pub use dataset::{clear_trip, import_trip, load_trip, DATA_KEY};
pub use sample::sample_trip;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The default sub-category of a `PreparationItem` that does not name one.
pub const GENERAL: &str = "General";

/// The whole trip: the single read-only dataset that every view renders.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripData {
    pub destination: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub title: String,
    /// The line-oriented day-by-day summary, e.g. `DAY1：Arrive [free time] | Check in; Dinner`.
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,
    #[serde(default)]
    pub preparation: Vec<PreparationItem>,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// One day of the detailed itinerary.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day_number: u32,
    /// A display date such as "Jan 24".
    pub date: String,
    /// The theme of the day.
    pub title: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    #[default]
    Sightseeing,
    Food,
    Travel,
    Rest,
    Activity,
    Cruise,
}

serde_plain::derive_display_from_serialize!(ActivityType);

/// A line in the expenses view. The cost is display text such as "NT$ 5,000", not a number.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    pub category: String,
    pub description: String,
    pub estimated_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An entry of the packing checklist.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreparationItem {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Emphasize both the item and its note.
    #[serde(default)]
    pub is_highlight: bool,
    /// Emphasize only the note.
    #[serde(default)]
    pub is_note_highlight: bool,
}

impl PreparationItem {
    /// The sub-category, falling back to `GENERAL` when none (or an empty one) is given.
    pub fn sub_category(&self) -> &str {
        match self.sub_category.as_deref() {
            Some(sub) if !sub.is_empty() => sub,
            _ => GENERAL,
        }
    }

    /// The key under which the checked state of this item is stored. Items that share a category,
    /// sub-category and name share their checked state.
    pub fn identity_key(&self) -> String {
        format!("{}-{}-{}", self.category, self.sub_category(), self.item)
    }

    pub fn note_emphasized(&self) -> bool {
        self.is_highlight || self.is_note_highlight
    }
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The input of the (disabled) itinerary generator.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripGenerationParams {
    pub destination: String,
    pub start_date: String,
    pub duration: u32,
    pub travelers: String,
    pub interests: String,
}
