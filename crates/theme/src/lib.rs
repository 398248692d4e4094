pub mod adapters;
pub mod resolver;
pub mod variables;

pub use adapters::{
    BootstrapTheme, DocusaurusTheme, GenericCssTheme, MantineTheme, TailwindTheme,
};
pub use resolver::{resolve_color, resolve_color_with};
pub use variables::{scale_variable, var_ref, variable_names, VARIABLE_PREFIX};

use chrono::NaiveDate;

/// All 12 CSS variable names for the liturgical color of `date` (today when
/// `None`).  Infallible: unresolvable dates yield the Ordinary Time (green)
/// set.
pub fn liturgical_color_variables(date: Option<NaiveDate>) -> [String; 12] {
    variable_names(resolve_color(date))
}

/// Docusaurus theme block for `date`.
pub fn docusaurus_theme(date: Option<NaiveDate>) -> DocusaurusTheme {
    DocusaurusTheme::for_date(date)
}

/// Tailwind CSS theme fragment for `date`.
pub fn tailwind_theme(date: Option<NaiveDate>) -> TailwindTheme {
    TailwindTheme::for_date(date)
}

/// Bootstrap custom-property block for `date`.
pub fn bootstrap_theme(date: Option<NaiveDate>) -> BootstrapTheme {
    BootstrapTheme::for_date(date)
}

/// Mantine `primaryColor` palette for `date`.
pub fn mantine_theme(date: Option<NaiveDate>) -> MantineTheme {
    MantineTheme::for_date(date)
}

/// Color-agnostic custom-property block for `date`.
pub fn generic_css_theme(date: Option<NaiveDate>) -> GenericCssTheme {
    GenericCssTheme::for_date(date)
}
