use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric shade levels of a CSS color scale, ascending.
///
/// Together with the bare (suffix-less) name these make up the 12-entry
/// variable set produced for every color.
pub const SCALE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// A liturgical color family.
///
/// The set is closed: providers may hand back arbitrary strings, but anything
/// that doesn't parse into one of these variants is treated by the resolver
/// as [`ColorKey::Green`] (Ordinary Time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    #[default]
    Green,
    Red,
    White,
    Purple,
    Rose,
    Gold,
}

impl ColorKey {
    /// All known colors, in no particular liturgical order.
    pub const ALL: [Self; 6] = [
        Self::Green,
        Self::Red,
        Self::White,
        Self::Purple,
        Self::Rose,
        Self::Gold,
    ];

    /// Parse a provider color key (case-insensitive).  Returns `None` for
    /// unknown or empty keys; the fallback decision belongs to the caller.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "green" => Some(Self::Green),
            "red" => Some(Self::Red),
            "white" => Some(Self::White),
            "purple" | "violet" => Some(Self::Purple),
            "rose" => Some(Self::Rose),
            "gold" => Some(Self::Gold),
            _ => None,
        }
    }

    /// The lowercase name used inside CSS variable names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::White => "white",
            Self::Purple => "purple",
            Self::Rose => "rose",
            Self::Gold => "gold",
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
