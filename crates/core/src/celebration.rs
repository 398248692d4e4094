use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single entry of a liturgical calendar: one celebration on one day.
///
/// The nested `data.meta.liturgical_color` path mirrors the loose metadata
/// shape calendar providers expose; each level is optional so missing
/// metadata is a typed absence rather than a crash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Celebration {
    /// The moment the celebration falls on.  Providers emit midnight; only
    /// the calendar day is significant to color resolution.
    pub moment: NaiveDateTime,
    /// Human-readable celebration name, e.g. `"Christmas"`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CelebrationData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CelebrationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<CelebrationMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CelebrationMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liturgical_color: Option<LiturgicalColor>,
}

/// Color metadata as providers ship it: a raw string key, not yet validated
/// against the known color set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiturgicalColor {
    pub key: String,
}

impl Celebration {
    /// Construct a celebration carrying a color key at the nested metadata
    /// path.
    pub fn with_color(moment: NaiveDateTime, name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            moment,
            name: name.into(),
            data: Some(CelebrationData {
                meta: Some(CelebrationMeta {
                    liturgical_color: Some(LiturgicalColor { key: key.into() }),
                }),
            }),
        }
    }

    /// Construct a celebration with no color metadata at all.
    pub fn without_color(moment: NaiveDateTime, name: impl Into<String>) -> Self {
        Self {
            moment,
            name: name.into(),
            data: None,
        }
    }

    /// Walk the optional metadata path down to the raw color key, if present.
    pub fn color_key(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .meta
            .as_ref()?
            .liturgical_color
            .as_ref()
            .map(|c| c.key.as_str())
    }
}
