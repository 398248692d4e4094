use liturgy_core::{LiturgyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how the built-in calendar is generated.
///
/// Mirrors the knobs national bishops' conferences actually turn: several
/// solemnities that fall on weekdays in the general calendar are transferred
/// to the nearest Sunday in many countries.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalendarOptions {
    /// ISO country code selecting a national calendar, e.g. `"us"`.
    /// Unrecognized codes fall back to the general calendar.
    pub country: Option<String>,
    /// Celebrate Epiphany on the Sunday between Jan 2 and Jan 8 instead of
    /// the fixed Jan 6.
    pub epiphany_on_sunday: bool,
    /// Celebrate the Ascension on the 7th Sunday of Easter instead of the
    /// Thursday 40 days after Easter.
    pub ascension_on_sunday: bool,
    /// Celebrate Corpus Christi on the Sunday after Trinity Sunday instead
    /// of the preceding Thursday.
    pub corpus_christi_on_sunday: bool,
}

impl CalendarOptions {
    /// Preset options for a national calendar.  Returns `None` for codes
    /// without a preset; callers fall back to the general calendar.
    pub fn for_country(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        match code.as_str() {
            "us" => Some(Self {
                country: Some(code),
                epiphany_on_sunday: true,
                ascension_on_sunday: true,
                corpus_christi_on_sunday: true,
            }),
            "gb" | "uk" => Some(Self {
                country: Some(code),
                epiphany_on_sunday: true,
                ascension_on_sunday: false,
                corpus_christi_on_sunday: true,
            }),
            _ => None,
        }
    }
}

/// Load calendar options from a TOML file.  Returns
/// `CalendarOptions::default()` if the file doesn't exist so callers always
/// get a usable general calendar.
pub fn load(path: impl AsRef<Path>) -> Result<CalendarOptions> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Calendar options file not found at '{}'; using the general calendar.",
            path.display()
        );
        return Ok(CalendarOptions::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| LiturgyError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| LiturgyError::Config(format!("TOML parse error: {e}")))
}
