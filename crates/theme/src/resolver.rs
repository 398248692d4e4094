use chrono::{Datelike, Local, NaiveDate};
use liturgy_calendar::{CalendarProvider, GeneralRomanCalendar};
use liturgy_core::ColorKey;

/// Resolve the liturgical color for `date` (today when `None`) against the
/// built-in [`GeneralRomanCalendar`].
///
/// Never fails: any provider error, unmatched day or missing color metadata
/// resolves to [`ColorKey::Green`] (Ordinary Time).  Every downstream
/// formatter relies on always receiving a valid color.
pub fn resolve_color(date: Option<NaiveDate>) -> ColorKey {
    resolve_color_with(&GeneralRomanCalendar::default(), date)
}

/// [`resolve_color`] against an arbitrary provider.
pub fn resolve_color_with(provider: &impl CalendarProvider, date: Option<NaiveDate>) -> ColorKey {
    let target = date.unwrap_or_else(|| Local::now().date_naive());

    let celebrations = match provider.calendar_for(target.year()) {
        Ok(celebrations) => celebrations,
        Err(e) => {
            tracing::warn!("Error getting liturgical color for {target}: {e}; falling back to green.");
            return ColorKey::Green;
        }
    };

    // Match on the calendar day only; the first celebration in provider
    // order is the primary one.  Moments are naive, so a caller converting
    // from a zoned timestamp near midnight can land on the neighbouring day.
    let Some(primary) = celebrations.iter().find(|c| c.moment.date() == target) else {
        return ColorKey::Green;
    };

    match primary.color_key().and_then(ColorKey::from_key) {
        Some(color) => color,
        None => {
            tracing::warn!(
                celebration = %primary.name,
                "Celebration carries no usable color metadata; falling back to green."
            );
            ColorKey::Green
        }
    }
}
