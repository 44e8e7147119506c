use crate::commands::{Out, Session};
use crate::prefs::{FontScale, Theme};
use crate::render::render_prefs;
use crate::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PrefsOut {
    pub theme: Theme,
    pub font_scale: FontScale,
}

/// Applies the given changes, each saved as soon as it is made, then shows the preferences.
pub fn prefs(
    session: &mut Session,
    theme: Option<Theme>,
    font_scale: Option<FontScale>,
) -> Result<Out<PrefsOut>> {
    let mut changes = Vec::new();
    if let Some(theme) = theme {
        session.prefs_mut().set_theme(theme)?;
        changes.push(format!("theme set to {theme}"));
    }
    if let Some(font_scale) = font_scale {
        session.prefs_mut().set_font_scale(font_scale)?;
        changes.push(format!("font set to {font_scale}"));
    }
    let current = PrefsOut {
        theme: session.prefs().theme(),
        font_scale: session.prefs().font_scale(),
    };
    let body = render_prefs(current.theme, current.font_scale, &session.painter());
    Ok(Out::new(changes.join(", "), current).with_body(body))
}
