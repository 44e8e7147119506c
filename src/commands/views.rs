use crate::commands::{Out, Session};
use crate::itinerary::find_day;
use crate::model::{DayPlan, ExpenseItem, Member};
use crate::overview::{parse_overview, OverviewLine};
use crate::render::{
    render_expenses, render_itinerary, render_members, render_overview, render_preparation,
};
use crate::view::{Shell, View, ROOM_MAP_URL};
use crate::Result;
use serde::Serialize;
use tracing::{debug, warn};

/// Renders the overview with the first header image of the current theme.
pub fn overview(session: &Session) -> Result<Out<Vec<OverviewLine>>> {
    let trip = session.trip();
    let images = crate::carousel::hero_images(session.prefs().theme());
    let body = render_overview(
        trip,
        images.first().map(String::as_str),
        &session.painter(),
    );
    let lines: Vec<OverviewLine> = parse_overview(&trip.overview).collect();
    Ok(Out::new("", lines).with_body(body))
}

/// Renders one day, the first when `day` is `None`. When the day does not exist the shell is asked
/// to show the overview instead.
pub fn itinerary(
    session: &Session,
    day: Option<u32>,
    shell: &mut dyn Shell,
) -> Result<Out<DayPlan>> {
    let trip = session.trip();
    let requested = day.or_else(|| trip.days.first().map(|d| d.day_number));
    let found = requested.and_then(|n| find_day(trip, n));
    let Some((offset, plan)) = found else {
        let message = match requested {
            Some(n) => format!("Day {n} is not part of this trip"),
            None => "This trip has no days".to_string(),
        };
        warn!("{message}");
        shell.navigate(View::Overview);
        return Ok(Out::new_message(message));
    };
    debug!("Showing day {} at position {offset}", plan.day_number);
    let body = render_itinerary(trip, offset, plan, &session.painter());
    Ok(Out::new("", plan.clone()).with_body(body))
}

/// Renders the roster. With `room_map` the shell is asked to show the cabin layout image.
pub fn members(
    session: &Session,
    room_map: bool,
    shell: &mut dyn Shell,
) -> Result<Out<Vec<Member>>> {
    if room_map {
        shell.show_image(ROOM_MAP_URL);
    }
    let trip = session.trip();
    let body = render_members(trip, &session.painter());
    Ok(Out::new("", trip.members.clone()).with_body(body))
}

pub fn expenses(session: &Session) -> Result<Out<Vec<ExpenseItem>>> {
    let trip = session.trip();
    let body = render_expenses(trip, &session.painter());
    Ok(Out::new("", trip.expenses.clone()).with_body(body))
}

/// The checklist state after a `prep` command.
#[derive(Debug, Clone, Serialize)]
pub struct PrepOut {
    pub checked: Vec<String>,
    pub toggled: Vec<(String, bool)>,
}

/// Toggles each key of `toggle` in order, then renders the checklist. Keys that match no item are
/// still toggled, with a warning, since items from an earlier dataset may share them.
pub fn preparation(
    session: &mut Session,
    toggle: &[String],
    show_keys: bool,
) -> Result<Out<PrepOut>> {
    let mut toggled = Vec::with_capacity(toggle.len());
    for key in toggle {
        let known = session
            .trip()
            .preparation
            .iter()
            .any(|p| p.identity_key() == *key);
        if !known {
            warn!("No checklist item has the key '{key}'");
        }
        let now = session.prefs_mut().toggle_checked(key)?;
        toggled.push((key.clone(), now));
    }

    let message = toggled
        .iter()
        .map(|(key, now)| {
            let state = if *now { "Checked" } else { "Unchecked" };
            format!("{state} {key}")
        })
        .collect::<Vec<_>>()
        .join("\n");
    let body = render_preparation(
        session.trip(),
        session.prefs().checked(),
        show_keys,
        &session.painter(),
    );
    let out = PrepOut {
        checked: session.prefs().checked().iter().cloned().collect(),
        toggled,
    };
    Ok(Out::new(message, out).with_body(body))
}

/// Renders `view` with its default options and prints it. Used to follow navigation requests.
pub fn show(session: &mut Session, view: View, shell: &mut dyn Shell) -> Result<()> {
    debug!("Showing the {view} view");
    match view {
        View::Overview => overview(session)?.print(),
        View::Itinerary => itinerary(session, None, shell)?.print(),
        View::Members => members(session, false, shell)?.print(),
        View::Expenses => expenses(session)?.print(),
        View::Preparation => preparation(session, &[], false)?.print(),
    }
    Ok(())
}
