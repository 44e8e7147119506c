use super::{Doc, Painter};
use crate::group::{group_expenses, group_preparation, show_sub_heading, sub_heading_label};
use crate::itinerary::{day_tabs, describe, format_day_date, maps_url, ActivityIcon};
use crate::model::{DayPlan, TripData};
use crate::overview::{
    extract_links, highlight, parse_overview, style, KeywordTable, PhraseTable,
};
use std::collections::BTreeSet;

pub fn render_overview(trip: &TripData, hero_image: Option<&str>, painter: &Painter) -> String {
    let mut doc = Doc::new(painter);
    header(&mut doc, trip);
    if let Some(image) = hero_image {
        doc.line(painter.paint(image, style::MUTED));
    }
    doc.blank();

    let table = KeywordTable::overview_titles();
    for line in parse_overview(&trip.overview) {
        let mut title = format!(
            "{}  {}",
            painter.bold(&line.day_label),
            painter.styled(&highlight(&line.title_text, &table))
        );
        if let Some(tag) = &line.tag {
            title.push_str("  ");
            title.push_str(&painter.paint(&format!("[{tag}]"), style::ACCENT));
        }
        doc.line(title);
        for detail in &line.detail_lines {
            doc.indented(1, format!("• {}", painter.segments(&extract_links(detail))));
        }
        doc.gap();
    }
    doc.finish()
}

/// Renders the day at position `offset` of the trip, with the day selector on top.
pub fn render_itinerary(trip: &TripData, offset: u32, day: &DayPlan, painter: &Painter) -> String {
    let mut doc = Doc::new(painter);
    let tabs: Vec<String> = day_tabs(trip)
        .into_iter()
        .map(|tab| {
            let text = format!("{} {}", tab.label, tab.date);
            if tab.day_number == day.day_number {
                painter.heading(&format!("[{text}]"))
            } else {
                painter.paint(&text, style::MUTED)
            }
        })
        .collect();
    doc.line(tabs.join("  "));
    doc.blank();
    doc.line(painter.heading(&format!(
        "Day {} ({})",
        day.day_number,
        format_day_date(&trip.start_date, offset)
    )));
    doc.line(&day.title);
    doc.blank();

    let phrases = PhraseTable::itinerary_descriptions();
    for activity in &day.activities {
        let icon = ActivityIcon::for_activity(activity);
        doc.line(format!(
            "{} {}  {}",
            icon.symbol(),
            painter.paint(&activity.time, style::ACCENT),
            painter.bold(activity.title.trim())
        ));
        if let Some(location) = activity.location.as_deref().filter(|l| !l.is_empty()) {
            let link = match maps_url(location) {
                Ok(url) => format!(" <{}>", painter.paint(url.as_str(), style::MUTED)),
                Err(_) => String::new(),
            };
            doc.indented(1, format!("📍 {location}{link}"));
        }
        for line in describe(activity, &phrases) {
            doc.indented(2, painter.styled(&line));
        }
        doc.gap();
    }
    doc.finish()
}

pub fn render_members(trip: &TripData, painter: &Painter) -> String {
    let mut doc = Doc::new(painter);
    doc.line(painter.heading("Members"));
    doc.blank();
    for member in &trip.members {
        let mut line = painter.bold(&member.name);
        if !member.role.is_empty() {
            line.push_str("  ");
            line.push_str(&painter.paint(&member.role, style::ACCENT));
        }
        if let Some(room) = &member.room_number {
            line.push_str(&format!("  Room {room}"));
        }
        doc.line(line);
        if let Some(notes) = member.notes.as_deref().filter(|n| !n.is_empty()) {
            doc.indented(1, painter.paint(notes, style::MUTED));
        }
        doc.gap();
    }
    doc.line(painter.paint(
        "Run `trip members --room-map` to view the cabin layout.",
        style::MUTED,
    ));
    doc.finish()
}

pub fn render_expenses(trip: &TripData, painter: &Painter) -> String {
    let mut doc = Doc::new(painter);
    doc.line(painter.heading("Expenses"));
    for (category, items) in group_expenses(&trip.expenses).iter() {
        doc.blank();
        doc.line(painter.bold(category));
        for item in items {
            doc.indented(
                1,
                format!(
                    "{}  {}",
                    item.description,
                    painter.paint(&item.estimated_cost, style::ACCENT)
                ),
            );
            if let Some(note) = item.note.as_deref().filter(|n| !n.is_empty()) {
                doc.indented(2, painter.paint(note, style::MUTED));
            }
        }
        doc.gap();
    }
    doc.finish()
}

/// Renders the checklist. `show_keys` appends the key used to check each item.
pub fn render_preparation(
    trip: &TripData,
    checked: &BTreeSet<String>,
    show_keys: bool,
    painter: &Painter,
) -> String {
    let mut doc = Doc::new(painter);
    let total = trip.preparation.len();
    let done = trip
        .preparation
        .iter()
        .filter(|p| checked.contains(&p.identity_key()))
        .count();
    doc.line(format!("{}  {done}/{total}", painter.heading("Preparation")));

    for (category, subs) in group_preparation(&trip.preparation) {
        doc.blank();
        doc.line(painter.bold(category));
        for (sub, items) in subs.iter() {
            let depth = if show_sub_heading(sub, subs.len()) {
                doc.indented(1, painter.paint(sub_heading_label(sub), style::BRAND));
                2
            } else {
                1
            };
            for item in items {
                let key = item.identity_key();
                let mark = if checked.contains(&key) { "[x]" } else { "[ ]" };
                let name = if item.is_highlight {
                    painter.paint(&item.item, style::ALERT)
                } else {
                    item.item.clone()
                };
                let mut line = format!("{mark} {name}");
                if let Some(note) = item.note.as_deref().filter(|n| !n.is_empty()) {
                    let tag = if item.note_emphasized() {
                        style::ALERT
                    } else {
                        style::MUTED
                    };
                    line.push_str(&format!("  {}", painter.paint(note, tag)));
                }
                if show_keys {
                    line.push_str(&format!("  {}", painter.paint(&key, style::MUTED)));
                }
                doc.indented(depth, line);
            }
        }
        doc.gap();
    }
    doc.finish()
}

fn header(doc: &mut Doc<'_>, trip: &TripData) {
    let painter = doc.painter();
    doc.line(painter.heading(trip.title.trim()));
    let dates = match &trip.end_date {
        Some(end) => format!("{} ~ {end}", trip.start_date),
        None => trip.start_date.clone(),
    };
    doc.line(format!("{}  {dates}", trip.destination));
}
