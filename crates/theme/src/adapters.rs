//! Framework-specific reshapings of a color's variable set.
//!
//! Every adapter is a pure formatter: the resolver guarantees a valid base
//! color, so none of these constructors can fail.  The `Serialize` shapes
//! match what each framework's configuration expects byte-for-byte.

use chrono::NaiveDate;
use liturgy_core::{ColorKey, SCALE_STEPS};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::resolver::resolve_color;
use crate::variables::{scale_variable, var_ref, VARIABLE_PREFIX};

fn shade_ref(color: ColorKey, step: u16) -> String {
    var_ref(&scale_variable(color, step))
}

/// Theme block for `docusaurus.config.js`: the seven Infima primary shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocusaurusTheme {
    #[serde(rename = "--ifm-color-primary")]
    pub primary: String,
    #[serde(rename = "--ifm-color-primary-dark")]
    pub dark: String,
    #[serde(rename = "--ifm-color-primary-darker")]
    pub darker: String,
    #[serde(rename = "--ifm-color-primary-darkest")]
    pub darkest: String,
    #[serde(rename = "--ifm-color-primary-light")]
    pub light: String,
    #[serde(rename = "--ifm-color-primary-lighter")]
    pub lighter: String,
    #[serde(rename = "--ifm-color-primary-lightest")]
    pub lightest: String,
}

impl DocusaurusTheme {
    pub fn for_color(color: ColorKey) -> Self {
        Self {
            primary: shade_ref(color, 500),
            dark: shade_ref(color, 600),
            darker: shade_ref(color, 700),
            darkest: shade_ref(color, 800),
            light: shade_ref(color, 400),
            lighter: shade_ref(color, 300),
            lightest: shade_ref(color, 200),
        }
    }

    pub fn for_date(date: Option<NaiveDate>) -> Self {
        Self::for_color(resolve_color(date))
    }
}

/// Theme fragment for `tailwind.config.js`: a `primary` palette under
/// `colors`, with `DEFAULT` aliasing the 500 shade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailwindTheme {
    pub colors: TailwindColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailwindColors {
    pub primary: TailwindScale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailwindScale {
    #[serde(rename = "50")]
    pub shade_50: String,
    #[serde(rename = "100")]
    pub shade_100: String,
    #[serde(rename = "200")]
    pub shade_200: String,
    #[serde(rename = "300")]
    pub shade_300: String,
    #[serde(rename = "400")]
    pub shade_400: String,
    #[serde(rename = "500")]
    pub shade_500: String,
    #[serde(rename = "600")]
    pub shade_600: String,
    #[serde(rename = "700")]
    pub shade_700: String,
    #[serde(rename = "800")]
    pub shade_800: String,
    #[serde(rename = "900")]
    pub shade_900: String,
    #[serde(rename = "950")]
    pub shade_950: String,
    #[serde(rename = "DEFAULT")]
    pub default: String,
}

impl TailwindTheme {
    pub fn for_color(color: ColorKey) -> Self {
        Self {
            colors: TailwindColors {
                primary: TailwindScale {
                    shade_50: shade_ref(color, 50),
                    shade_100: shade_ref(color, 100),
                    shade_200: shade_ref(color, 200),
                    shade_300: shade_ref(color, 300),
                    shade_400: shade_ref(color, 400),
                    shade_500: shade_ref(color, 500),
                    shade_600: shade_ref(color, 600),
                    shade_700: shade_ref(color, 700),
                    shade_800: shade_ref(color, 800),
                    shade_900: shade_ref(color, 900),
                    shade_950: shade_ref(color, 950),
                    default: shade_ref(color, 500),
                },
            },
        }
    }

    pub fn for_date(date: Option<NaiveDate>) -> Self {
        Self::for_color(resolve_color(date))
    }
}

/// Bootstrap's primary custom properties (`--bs-primary*`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapTheme {
    #[serde(rename = "--bs-primary")]
    pub primary: String,
    #[serde(rename = "--bs-primary-rgb")]
    pub primary_rgb: String,
    #[serde(rename = "--bs-primary-text-emphasis")]
    pub text_emphasis: String,
    #[serde(rename = "--bs-primary-bg-subtle")]
    pub bg_subtle: String,
    #[serde(rename = "--bs-primary-border-subtle")]
    pub border_subtle: String,
}

impl BootstrapTheme {
    pub fn for_color(color: ColorKey) -> Self {
        Self {
            primary: shade_ref(color, 500),
            primary_rgb: shade_ref(color, 500),
            text_emphasis: shade_ref(color, 800),
            bg_subtle: shade_ref(color, 100),
            border_subtle: shade_ref(color, 200),
        }
    }

    pub fn for_date(date: Option<NaiveDate>) -> Self {
        Self::for_color(resolve_color(date))
    }
}

/// Mantine's `primaryColor` tuple: exactly 10 shades, 50 through 900.
/// Mantine palettes have no 950 entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MantineTheme {
    #[serde(rename = "primaryColor")]
    pub primary_color: [String; 10],
}

impl MantineTheme {
    pub fn for_color(color: ColorKey) -> Self {
        const MANTINE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];
        Self {
            primary_color: MANTINE_STEPS.map(|step| shade_ref(color, step)),
        }
    }

    pub fn for_date(date: Option<NaiveDate>) -> Self {
        Self::for_color(resolve_color(date))
    }
}

/// Color-agnostic custom properties: the key set is identical for every
/// color (`--color-liturgical`, `--color-liturgical-50`, ...); only the
/// `var(...)` values change with the resolved color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenericCssTheme {
    pub vars: BTreeMap<String, String>,
}

impl GenericCssTheme {
    pub fn for_color(color: ColorKey) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert(
            VARIABLE_PREFIX.to_string(),
            var_ref(&format!("{VARIABLE_PREFIX}-{color}")),
        );
        for step in SCALE_STEPS {
            vars.insert(
                format!("{VARIABLE_PREFIX}-{step}"),
                var_ref(&scale_variable(color, step)),
            );
        }
        Self { vars }
    }

    pub fn for_date(date: Option<NaiveDate>) -> Self {
        Self::for_color(resolve_color(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn json_keys(value: &Value) -> Vec<String> {
        value
            .as_object()
            .expect("object")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn docusaurus_has_exactly_seven_ifm_keys() {
        let theme = DocusaurusTheme::for_color(ColorKey::White);
        let json = serde_json::to_value(&theme).unwrap();
        let keys = json_keys(&json);
        assert_eq!(keys.len(), 7);
        assert!(keys.iter().all(|k| k.starts_with("--ifm-color-primary")));
        assert_eq!(
            json["--ifm-color-primary"],
            "var(--color-liturgical-white-500)"
        );
        assert_eq!(
            json["--ifm-color-primary-lightest"],
            "var(--color-liturgical-white-200)"
        );
    }

    #[test]
    fn tailwind_primary_has_eleven_shades_plus_default() {
        let theme = TailwindTheme::for_color(ColorKey::Purple);
        let json = serde_json::to_value(&theme).unwrap();
        let primary = &json["colors"]["primary"];
        assert_eq!(json_keys(primary).len(), 12);
        assert_eq!(primary["500"], "var(--color-liturgical-purple-500)");
        assert_eq!(primary["DEFAULT"], primary["500"]);
        assert_eq!(primary["950"], "var(--color-liturgical-purple-950)");
    }

    #[test]
    fn bootstrap_has_exactly_five_bs_keys() {
        let theme = BootstrapTheme::for_color(ColorKey::Red);
        let json = serde_json::to_value(&theme).unwrap();
        let keys = json_keys(&json);
        assert_eq!(keys.len(), 5);
        assert!(keys.iter().all(|k| k.starts_with("--bs-primary")));
        assert_eq!(
            json["--bs-primary-bg-subtle"],
            "var(--color-liturgical-red-100)"
        );
    }

    #[test]
    fn mantine_palette_has_ten_shades_without_950() {
        let theme = MantineTheme::for_color(ColorKey::Green);
        assert_eq!(theme.primary_color.len(), 10);
        assert_eq!(theme.primary_color[0], "var(--color-liturgical-green-50)");
        assert_eq!(theme.primary_color[9], "var(--color-liturgical-green-900)");
        assert!(theme.primary_color.iter().all(|v| !v.contains("950")));
    }

    #[test]
    fn generic_key_set_is_identical_across_colors() {
        let keys_of = |color| {
            GenericCssTheme::for_color(color)
                .vars
                .keys()
                .cloned()
                .collect::<Vec<_>>()
        };
        let green = keys_of(ColorKey::Green);
        assert_eq!(green.len(), 12);
        for color in [ColorKey::White, ColorKey::Purple, ColorKey::Red] {
            assert_eq!(keys_of(color), green);
        }
    }

    #[test]
    fn generic_values_reference_the_resolved_color() {
        let theme = GenericCssTheme::for_color(ColorKey::Rose);
        assert_eq!(
            theme.vars["--color-liturgical"],
            "var(--color-liturgical-rose)"
        );
        assert_eq!(
            theme.vars["--color-liturgical-500"],
            "var(--color-liturgical-rose-500)"
        );
    }

    #[test]
    fn adapters_agree_on_the_resolved_base_color() {
        // Christmas 2024 resolves to white through every adapter.
        let date = Some(chrono::NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(
            DocusaurusTheme::for_date(date).primary,
            "var(--color-liturgical-white-500)"
        );
        assert_eq!(
            TailwindTheme::for_date(date).colors.primary.default,
            "var(--color-liturgical-white-500)"
        );
        assert_eq!(
            BootstrapTheme::for_date(date).primary,
            "var(--color-liturgical-white-500)"
        );
        assert_eq!(
            MantineTheme::for_date(date).primary_color[5],
            "var(--color-liturgical-white-500)"
        );
        assert_eq!(
            GenericCssTheme::for_date(date).vars["--color-liturgical-500"],
            "var(--color-liturgical-white-500)"
        );
    }
}
