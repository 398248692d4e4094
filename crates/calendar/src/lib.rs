pub mod computus;
pub mod options;
pub mod provider;
pub mod seasons;

pub use computus::easter_sunday;
pub use options::CalendarOptions;
pub use provider::{CalendarProvider, GeneralRomanCalendar, SUPPORTED_YEARS};
pub use seasons::{KeyDates, Season};

use liturgy_core::{Celebration, Result};

/// Return the liturgical calendar for a civil year: every celebration in
/// calendar order, higher-ranking celebrations first within a day.
///
/// `country` selects a national calendar preset; codes without a preset fall
/// back to the general calendar with a warning.
pub fn calendar_for(year: i32, country: Option<&str>) -> Result<Vec<Celebration>> {
    let options = match country {
        None => CalendarOptions::default(),
        Some(code) => CalendarOptions::for_country(code).unwrap_or_else(|| {
            tracing::warn!("No national calendar preset for '{code}'; using the general calendar.");
            CalendarOptions {
                country: Some(code.to_string()),
                ..CalendarOptions::default()
            }
        }),
    };

    GeneralRomanCalendar::new(options).calendar_for(year)
}
