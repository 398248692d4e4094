use liturgy_core::{ColorKey, SCALE_STEPS};

/// Common prefix of every CSS custom property this library emits.
pub const VARIABLE_PREFIX: &str = "--color-liturgical";

/// Build the 12 CSS custom-property names of a color's scale: the bare name
/// at index 0, then the numeric steps ascending (`-50` through `-950`).
///
/// Downstream formatters read index 0 as "the base name", so the order is
/// part of the contract.
pub fn variable_names(color: ColorKey) -> [String; 12] {
    std::array::from_fn(|i| {
        if i == 0 {
            format!("{VARIABLE_PREFIX}-{color}")
        } else {
            scale_variable(color, SCALE_STEPS[i - 1])
        }
    })
}

/// The variable name of one shade, e.g. `--color-liturgical-green-500`.
pub fn scale_variable(color: ColorKey, step: u16) -> String {
    format!("{VARIABLE_PREFIX}-{color}-{step}")
}

/// Wrap a variable name in its CSS usage form, e.g. `var(--color-liturgical-green-500)`.
pub fn var_ref(name: &str) -> String {
    format!("var({name})")
}
