//! Presentation helpers for the detailed itinerary: activity icons, tab dates, highlighted
//! description lines and map links.

use crate::model::{Activity, ActivityType, DayPlan, TripData};
use crate::overview::{highlight_phrases, PhraseTable, Styled};
use crate::Result;
use anyhow::Context;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use url::Url;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Travel activities whose lowercased title contains one of these are flights.
const FLIGHT_HINTS: [&str; 6] = ["flight", "ci753", "tpe", "sin", "plane", "airport"];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityIcon {
    Plane,
    Bus,
    Utensils,
    Pin,
    Bed,
    Flower,
    Ship,
}

serde_plain::derive_display_from_serialize!(ActivityIcon);

impl ActivityIcon {
    pub fn for_activity(activity: &Activity) -> Self {
        match activity.activity_type {
            ActivityType::Travel => {
                let title = activity.title.to_lowercase();
                if FLIGHT_HINTS.iter().any(|hint| title.contains(hint)) {
                    ActivityIcon::Plane
                } else {
                    ActivityIcon::Bus
                }
            }
            ActivityType::Food => ActivityIcon::Utensils,
            ActivityType::Sightseeing => ActivityIcon::Pin,
            ActivityType::Rest => ActivityIcon::Bed,
            ActivityType::Activity => ActivityIcon::Flower,
            ActivityType::Cruise => ActivityIcon::Ship,
        }
    }

    /// A terminal-friendly symbol for the icon.
    pub fn symbol(self) -> &'static str {
        match self {
            ActivityIcon::Plane => "✈",
            ActivityIcon::Bus => "🚌",
            ActivityIcon::Utensils => "🍴",
            ActivityIcon::Pin => "📍",
            ActivityIcon::Bed => "🛏",
            ActivityIcon::Flower => "🌸",
            ActivityIcon::Ship => "🚢",
        }
    }
}

/// The `M/D` date of the day at `offset` from `start_date` (`YYYY-MM-DD`). When the start date
/// cannot be parsed this falls back to `Day <offset + 1>`.
pub fn format_day_date(start_date: &str, offset: u32) -> String {
    NaiveDate::parse_from_str(start_date.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|start| start.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| format!("{}/{}", date.month(), date.day()))
        .unwrap_or_else(|| format!("Day {}", u64::from(offset) + 1))
}

/// The description of `activity`, one entry per line, with the phrases of `phrases` emphasized.
/// Blank lines are kept as empty entries.
pub fn describe<'a>(activity: &'a Activity, phrases: &'a PhraseTable) -> Vec<Vec<Styled<'a>>> {
    if activity.description.is_empty() {
        return Vec::new();
    }
    activity
        .description
        .split('\n')
        .map(|line| highlight_phrases(line.trim_end_matches('\r'), phrases))
        .collect()
}

/// A map search link for a free-text location.
pub fn maps_url(location: &str) -> Result<Url> {
    Url::parse_with_params(MAPS_SEARCH_URL, &[("api", "1"), ("query", location)])
        .with_context(|| format!("Unable to build a map link for '{location}'"))
}

/// One entry of the day selector.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DayTab {
    pub day_number: u32,
    pub label: String,
    pub date: String,
}

/// The day selector: one tab per day, dated from the trip start by position.
pub fn day_tabs(trip: &TripData) -> Vec<DayTab> {
    trip.days
        .iter()
        .zip(0u32..)
        .map(|(day, offset)| DayTab {
            day_number: day.day_number,
            label: format!("DAY {}", day.day_number),
            date: format_day_date(&trip.start_date, offset),
        })
        .collect()
}

/// The day with `day_number`, along with its position in the trip.
pub fn find_day(trip: &TripData, day_number: u32) -> Option<(u32, &DayPlan)> {
    trip.days
        .iter()
        .zip(0u32..)
        .find(|(day, _)| day.day_number == day_number)
        .map(|(day, offset)| (offset, day))
}
