//! liturgy — liturgical color theming for CSS design systems.
//!
//! Resolves the liturgical color of a calendar day (green, red, white,
//! purple, rose or gold) and formats it into CSS custom-property names and
//! ready-made theme objects for Docusaurus, Tailwind CSS, Bootstrap,
//! Mantine, and plain CSS variables.
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let christmas = NaiveDate::from_ymd_opt(2024, 12, 25);
//! let names = liturgy::liturgical_color_variables(christmas);
//! assert_eq!(names[0], "--color-liturgical-white");
//! ```
//!
//! Every theming function is infallible: any calendar failure or missing
//! color metadata falls back to green (Ordinary Time) with a `tracing`
//! warning, never an error.  Raw calendar data is available through
//! [`calendar_for`].

pub use liturgy_core::{
    Celebration, CelebrationData, CelebrationMeta, ColorKey, LiturgicalColor, LiturgyError,
    Result, SCALE_STEPS,
};

pub use liturgy_calendar::{
    calendar_for, easter_sunday, CalendarOptions, CalendarProvider, GeneralRomanCalendar,
};

pub use liturgy_theme::{
    bootstrap_theme, docusaurus_theme, generic_css_theme, liturgical_color_variables,
    mantine_theme, resolve_color, resolve_color_with, tailwind_theme, variable_names,
    BootstrapTheme, DocusaurusTheme, GenericCssTheme, MantineTheme, TailwindTheme,
    VARIABLE_PREFIX,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn advent_sunday_resolves_purple_through_tailwind() {
        let theme = tailwind_theme(Some(ymd(2024, 12, 1)));
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(
            json["colors"]["primary"]["500"],
            "var(--color-liturgical-purple-500)"
        );
        assert_eq!(json["colors"]["primary"]["DEFAULT"], json["colors"]["primary"]["500"]);
    }

    #[test]
    fn christmas_resolves_white_through_docusaurus() {
        let theme = docusaurus_theme(Some(ymd(2024, 12, 25)));
        assert_eq!(theme.primary, "var(--color-liturgical-white-500)");
    }

    #[test]
    fn raw_calendar_pass_through_exposes_celebrations() {
        let calendar = calendar_for(2024, None).unwrap();
        let christmas = calendar
            .iter()
            .find(|c| c.moment.date() == ymd(2024, 12, 25))
            .unwrap();
        assert_eq!(christmas.color_key(), Some("white"));
    }

    #[test]
    fn resolution_never_panics_for_any_representable_date() {
        for date in [ymd(-44, 3, 15), ymd(1, 1, 1), ymd(10_000, 1, 1)] {
            assert_eq!(resolve_color(Some(date)), ColorKey::Green);
        }
    }
}
